// Directory creation operation trait and implementation
use crate::error::Result;
use crate::storage::utils::path::ensure_trailing_slash;
use crate::wrap_err;
use opendal::Operator;

/// Trait for creating directories in storage.
pub trait Mkdirer {
    /// Create a directory, including any missing parents.
    ///
    /// # Returns
    /// * `Result<bool>` - `true` once the directory is in place
    async fn mkdir(&self, path: &str) -> Result<bool>;
}

/// Implementation of Mkdirer for OpenDAL Operator.
pub struct OpenDalMkdirer {
    operator: Operator,
}

impl OpenDalMkdirer {
    /// Create a new mkdirer with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Mkdirer for OpenDalMkdirer {
    async fn mkdir(&self, path: &str) -> Result<bool> {
        let dir = ensure_trailing_slash(path.trim_start_matches('/'));
        if dir == "/" {
            // Bucket root always exists
            return Ok(true);
        }

        wrap_err!(
            self.operator.create_dir(&dir).await,
            DirectoryCreationFailed {
                path: path.to_string()
            }
        )?;
        log::info!("Created directory: {dir}");
        Ok(true)
    }
}
