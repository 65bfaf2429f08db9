// Path helper utilities shared by the resolver and the storage backend
use std::path::Path;

/// Join path segments with `/`, trimming surrounding slashes from each segment
/// and skipping segments that end up empty.
pub fn join_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter_map(|s| {
            let trimmed = s.as_ref().trim_matches('/');
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Strip leading separators from a working directory.
pub fn strip_leading_separator(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Extract a normalized basename from a remote path.
pub fn basename(path: &str) -> String {
    Path::new(path.trim_start_matches('/'))
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.trim_matches('/').to_string())
}

/// Return a new String that guarantees a trailing '/'.
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Whether any segment of `path` steps up to a parent directory.
pub fn has_parent_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "..")
}

/// Translate an absolute folder into one relative to the storage root.
/// Folders outside of the root are returned without their leading separator.
pub fn relative_to_root<'a>(folder: &'a str, root: &str) -> &'a str {
    let root = root.trim_end_matches('/');
    let relative = if root.is_empty() {
        folder
    } else {
        folder
            .strip_prefix(root)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(folder)
    };
    relative.trim_start_matches('/')
}
