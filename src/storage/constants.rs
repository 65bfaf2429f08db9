// Filesystem default
pub const DEFAULT_FS_ROOT: &str = "./storage";

// Root reported by bucket-style backends
pub const DEFAULT_REMOTE_ROOT: &str = "/";

/// Namespace every storage key and resolved path starts with.
pub const LFM_PREFIX: &str = "laravel-filemanager";

/// Request input holding the caller's working directory.
pub const WORKING_DIR_INPUT: &str = "working_dir";

/// Request input selecting the folder category (`image` or `file`).
pub const TYPE_INPUT: &str = "type";

pub const USER_FOLDER_TYPE: &str = "user";
pub const SHARE_FOLDER_TYPE: &str = "share";

/// Root folder type used when no working directory is given.
pub const DEFAULT_FOLDER_TYPE: &str = USER_FOLDER_TYPE;
