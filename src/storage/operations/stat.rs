// Existence and directory probes
use crate::error::{Error, Result};
use crate::storage::utils::path::ensure_trailing_slash;
use opendal::{ErrorKind, Metadata, Operator};

/// Trait for probing objects in storage.
pub trait Stater {
    /// Whether a file or directory exists at `path`.
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Whether `path` names a directory.
    async fn is_directory(&self, path: &str) -> Result<bool>;
}

/// Implementation of `Stater` for OpenDAL `Operator`.
#[derive(Clone)]
pub struct OpenDalStater {
    operator: Operator,
}

impl OpenDalStater {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Candidate keys for a path: as given, then as a directory key.
    fn candidates(path: &str) -> [String; 2] {
        [path.to_string(), ensure_trailing_slash(path)]
    }

    /// `Ok(None)` only for a missing key; every other failure is surfaced.
    async fn stat(&self, path: &str) -> Result<Option<Metadata>> {
        match self.operator.stat(path).await {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::StatFailed {
                path: path.to_string(),
                source: Box::new(e.into()),
            }),
        }
    }
}

impl Stater for OpenDalStater {
    async fn exists(&self, path: &str) -> Result<bool> {
        for candidate in Self::candidates(path) {
            if self.stat(&candidate).await?.is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn is_directory(&self, path: &str) -> Result<bool> {
        for candidate in Self::candidates(path) {
            let metadata = self.stat(&candidate).await?;
            if metadata.is_some_and(|m| m.mode().is_dir()) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
