// Delete operation trait and implementation
use crate::error::Result;
use crate::storage::utils::path::ensure_trailing_slash;
use crate::wrap_err;
use opendal::Operator;

/// Trait for deleting files and directories from storage.
pub trait Deleter {
    /// Delete a single file.
    async fn delete_file(&self, path: &str) -> Result<bool>;

    /// Delete a directory together with everything below it.
    async fn delete_directory(&self, path: &str) -> Result<bool>;
}

/// Implementation of Deleter for OpenDAL Operator.
pub struct OpenDalDeleter {
    operator: Operator,
}

impl OpenDalDeleter {
    /// Create a new deleter with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Deleter for OpenDalDeleter {
    async fn delete_file(&self, path: &str) -> Result<bool> {
        wrap_err!(
            self.operator.delete(path).await,
            DeleteFailed {
                path: path.to_string()
            }
        )?;
        log::info!("Deleted: {path}");
        Ok(true)
    }

    async fn delete_directory(&self, path: &str) -> Result<bool> {
        let dir = ensure_trailing_slash(path);
        wrap_err!(
            self.operator.remove_all(&dir).await,
            DeleteFailed {
                path: path.to_string()
            }
        )?;
        log::info!("Deleted: {dir}");
        Ok(true)
    }
}
