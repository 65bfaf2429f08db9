use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Environment variable '{key}' is required but not found"))]
    MissingEnvVar { key: String },

    #[snafu(display("Unsupported storage provider: {provider}"))]
    UnsupportedProvider { provider: String },

    #[snafu(display("Invalid base url '{url}': {source}"))]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[snafu(display("Folder type '{folder_type}' is not allowed"))]
    FolderTypeNotAllowed { folder_type: String },

    #[snafu(display("Folder already exists: {path}"))]
    FolderAlreadyExists { path: String },

    #[snafu(display("Failed to list directory '{path}': {source}"))]
    ListDirectoryFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to create directory '{path}': {source}"))]
    DirectoryCreationFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to stat '{path}': {source}"))]
    StatFailed { path: String, source: Box<Error> },

    #[snafu(display("Path '{path}' escapes the storage root"))]
    PathTraversal { path: String },

    #[snafu(display("Failed to delete '{path}': {source}"))]
    DeleteFailed { path: String, source: Box<Error> },

    #[snafu(display("OpenDAL error: {source}"))]
    OpenDal { source: opendal::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<opendal::Error> for Error {
    fn from(error: opendal::Error) -> Self {
        Error::OpenDal { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

/// Map a failed result into a path-carrying variant whose `source` is boxed.
///
/// `wrap_err!(op.create_dir(&p).await, DirectoryCreationFailed { path: p.clone() })?`
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e| $crate::error::Error::$variant {
            $($field: $value,)*
            source: Box::new($crate::error::Error::from(e)),
        })
    }};
}
