use crate::error::{Error, Result};
use crate::storage::utils::path::ensure_trailing_slash;
use crate::wrap_err;
use futures::stream::TryStreamExt;
use opendal::{Entry, EntryMode, Operator};

/// Trait for listing the direct children of a directory in storage.
pub trait Lister {
    /// List the entries of `mode` directly under `path`.
    ///
    /// # Arguments
    /// * `path` - Directory path to list
    /// * `mode` - `EntryMode::DIR` for sub-directories, `EntryMode::FILE` for files
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Child paths without trailing slashes
    async fn list(&self, path: &str, mode: EntryMode) -> Result<Vec<String>>;
}

/// Implementation of Lister for OpenDAL Operator.
pub struct OpenDalLister {
    operator: Operator,
}

impl OpenDalLister {
    /// Create a new lister with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Lister for OpenDalLister {
    async fn list(&self, path: &str, mode: EntryMode) -> Result<Vec<String>> {
        let dir = ensure_trailing_slash(path);
        let lister = wrap_err!(
            self.operator.lister(&dir).await,
            ListDirectoryFailed {
                path: path.to_string()
            }
        )?;

        let entries: Vec<Entry> = lister
            .map_err(|e| Error::ListDirectoryFailed {
                path: path.to_string(),
                source: Box::new(e.into()),
            })
            .try_collect()
            .await?;

        // Some services report the listed directory itself as the first entry.
        Ok(entries
            .into_iter()
            .filter(|entry| entry.path() != dir && entry.metadata().mode() == mode)
            .map(|entry| entry.path().trim_end_matches('/').to_string())
            .collect())
    }
}
