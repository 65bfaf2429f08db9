use crate::error::{Error, Result};
use opendal::{EntryMode, Operator};
use std::str::FromStr;

pub mod constants;
mod operations;
pub mod utils;

use self::operations::delete::OpenDalDeleter;
use self::operations::list::OpenDalLister;
use self::operations::mkdir::OpenDalMkdirer;
use self::operations::stat::OpenDalStater;
use self::operations::{Deleter, Lister, Mkdirer, Stater};

/// Storage capabilities the path resolver delegates to.
///
/// Every path is relative to the provider's root. Results are passed through
/// the resolver untouched.
pub trait StorageProvider {
    /// Absolute root the provider's relative paths hang off.
    fn root_path(&self) -> &str;

    async fn exists(&self, path: &str) -> Result<bool>;

    async fn is_directory(&self, path: &str) -> Result<bool>;

    /// Direct sub-directories of `path`.
    async fn directories(&self, path: &str) -> Result<Vec<String>>;

    /// Files directly inside `path`.
    async fn files(&self, path: &str) -> Result<Vec<String>>;

    async fn make_directory(&self, path: &str) -> Result<bool>;

    /// Delete a single file.
    async fn delete(&self, path: &str) -> Result<bool>;

    /// Delete a directory recursively.
    async fn delete_directory(&self, path: &str) -> Result<bool>;
}

/// Storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Oss,
    S3,
    Fs,
    Hdfs,
}

impl FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "oss" => Ok(Self::Oss),
            "s3" | "minio" => Ok(Self::S3),
            "fs" => Ok(Self::Fs),
            "hdfs" => Ok(Self::Hdfs),
            _ => Err(Error::UnsupportedProvider {
                provider: s.to_string(),
            }),
        }
    }
}

/// Unified storage configuration for different backends
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub bucket: String,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub root_path: Option<String>,
    pub name_node: Option<String>,
}

impl StorageConfig {
    fn remote(
        backend: StorageBackend,
        bucket: String,
        access_key_id: String,
        access_key_secret: String,
        region: Option<String>,
    ) -> Self {
        Self {
            backend,
            bucket,
            access_key_id: Some(access_key_id),
            access_key_secret: Some(access_key_secret),
            endpoint: None,
            region,
            root_path: None,
            name_node: None,
        }
    }

    pub fn oss(
        bucket: String,
        access_key_id: String,
        access_key_secret: String,
        region: Option<String>,
    ) -> Self {
        Self::remote(
            StorageBackend::Oss,
            bucket,
            access_key_id,
            access_key_secret,
            region,
        )
    }

    pub fn s3(
        bucket: String,
        access_key_id: String,
        secret_access_key: String,
        region: Option<String>,
    ) -> Self {
        Self::remote(
            StorageBackend::S3,
            bucket,
            access_key_id,
            secret_access_key,
            region,
        )
    }

    pub fn fs(root_path: String) -> Self {
        Self {
            backend: StorageBackend::Fs,
            bucket: "local".to_string(),
            access_key_id: None,
            access_key_secret: None,
            endpoint: None,
            region: None,
            root_path: Some(root_path),
            name_node: None,
        }
    }

    pub fn hdfs(name_node: String, root_path: String) -> Self {
        Self {
            backend: StorageBackend::Hdfs,
            bucket: "hdfs".to_string(),
            access_key_id: None,
            access_key_secret: None,
            endpoint: None,
            region: None,
            root_path: Some(root_path),
            name_node: Some(name_node),
        }
    }
}

/// Storage provider backed by an OpenDAL operator.
///
/// Cloning is cheap: the operator is reference counted.
#[derive(Clone)]
pub struct OpenDalStorage {
    operator: Operator,
    backend: StorageBackend,
    root_path: String,
}

impl OpenDalStorage {
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let operator = Self::build_operator(config)?;
        Ok(Self {
            operator,
            backend: config.backend,
            root_path: config
                .root_path
                .clone()
                .unwrap_or_else(|| constants::DEFAULT_REMOTE_ROOT.to_string()),
        })
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    fn build_operator(config: &StorageConfig) -> Result<Operator> {
        match &config.backend {
            StorageBackend::Oss => {
                let mut builder = opendal::services::Oss::default().bucket(&config.bucket);
                if let Some(access_key_id) = &config.access_key_id {
                    builder = builder.access_key_id(access_key_id);
                }
                if let Some(access_key_secret) = &config.access_key_secret {
                    builder = builder.access_key_secret(access_key_secret);
                }
                if let Some(endpoint) = &config.endpoint {
                    builder = builder.endpoint(endpoint);
                }
                Ok(Operator::new(builder)?.finish())
            }
            StorageBackend::S3 => {
                let mut builder = opendal::services::S3::default().bucket(&config.bucket);
                if let Some(access_key_id) = &config.access_key_id {
                    builder = builder.access_key_id(access_key_id);
                }
                if let Some(secret_access_key) = &config.access_key_secret {
                    builder = builder.secret_access_key(secret_access_key);
                }
                if let Some(region) = &config.region {
                    builder = builder.region(region);
                }
                if let Some(endpoint) = &config.endpoint {
                    builder = builder.endpoint(endpoint);
                }
                Ok(Operator::new(builder)?.finish())
            }
            StorageBackend::Fs => {
                let root = config
                    .root_path
                    .as_deref()
                    .unwrap_or(constants::DEFAULT_FS_ROOT);
                let builder = opendal::services::Fs::default().root(root);
                Ok(Operator::new(builder)?.finish())
            }
            StorageBackend::Hdfs => {
                #[cfg(feature = "hdfs")]
                {
                    let root = config.root_path.as_deref().unwrap_or("/");
                    let name_node = config.name_node.as_deref().unwrap_or_default();
                    let builder = opendal::services::Hdfs::default()
                        .root(root)
                        .name_node(name_node);
                    Ok(Operator::new(builder)?.finish())
                }

                #[cfg(not(feature = "hdfs"))]
                {
                    Err(Error::UnsupportedProvider {
                        provider: "hdfs (feature disabled)".to_string(),
                    })
                }
            }
        }
    }
}

impl StorageProvider for OpenDalStorage {
    fn root_path(&self) -> &str {
        &self.root_path
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        log::debug!("exists backend={:?} path={}", self.backend, path);
        OpenDalStater::new(self.operator.clone()).exists(path).await
    }

    async fn is_directory(&self, path: &str) -> Result<bool> {
        log::debug!("is_directory backend={:?} path={}", self.backend, path);
        OpenDalStater::new(self.operator.clone())
            .is_directory(path)
            .await
    }

    async fn directories(&self, path: &str) -> Result<Vec<String>> {
        log::debug!("directories backend={:?} path={}", self.backend, path);
        OpenDalLister::new(self.operator.clone())
            .list(path, EntryMode::DIR)
            .await
    }

    async fn files(&self, path: &str) -> Result<Vec<String>> {
        log::debug!("files backend={:?} path={}", self.backend, path);
        OpenDalLister::new(self.operator.clone())
            .list(path, EntryMode::FILE)
            .await
    }

    async fn make_directory(&self, path: &str) -> Result<bool> {
        log::debug!("make_directory backend={:?} path={}", self.backend, path);
        OpenDalMkdirer::new(self.operator.clone()).mkdir(path).await
    }

    async fn delete(&self, path: &str) -> Result<bool> {
        log::debug!("delete backend={:?} path={}", self.backend, path);
        OpenDalDeleter::new(self.operator.clone())
            .delete_file(path)
            .await
    }

    async fn delete_directory(&self, path: &str) -> Result<bool> {
        log::debug!("delete_directory backend={:?} path={}", self.backend, path);
        OpenDalDeleter::new(self.operator.clone())
            .delete_directory(path)
            .await
    }
}
