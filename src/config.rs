use crate::error::{Error, InvalidBaseUrlSnafu, Result};
use snafu::ResultExt;
use std::env;
use std::str::FromStr;
use url::Url;

use crate::storage::constants::{DEFAULT_FS_ROOT, LFM_PREFIX};
use crate::storage::{StorageBackend, StorageConfig};

/// File-manager settings that do not vary per request.
#[derive(Debug, Clone)]
pub struct LfmConfig {
    pub url_prefix: String,
    pub base_url: Url,
    pub base_path: String,
    pub thumb_folder_name: String,
    pub files_folder_name: String,
    pub images_folder_name: String,
    pub user_folder: String,
    pub shared_folder_name: String,
    pub allow_private_folder: bool,
    pub allow_shared_folder: bool,
    pub storage: StorageConfig,
}

impl LfmConfig {
    /// Defaults for a deployment storing files under `storage`.
    pub fn new(storage: StorageConfig) -> Result<Self> {
        Ok(Self {
            url_prefix: LFM_PREFIX.to_string(),
            base_url: parse_base_url("http://localhost")?,
            base_path: ".".to_string(),
            thumb_folder_name: "thumbs".to_string(),
            files_folder_name: "files".to_string(),
            images_folder_name: "photos".to_string(),
            user_folder: "1".to_string(),
            shared_folder_name: "shares".to_string(),
            allow_private_folder: true,
            allow_shared_folder: true,
            storage,
        })
    }
}

fn parse_base_url(url: &str) -> Result<Url> {
    Url::parse(url).context(InvalidBaseUrlSnafu { url })
}

// Helper function to reduce repetitive environment variable loading logic.
fn get_env_var(primary_key: &str, secondary_key: &str) -> Result<String> {
    env::var(primary_key)
        .or_else(|_| env::var(secondary_key))
        .map_err(|_| Error::MissingEnvVar {
            key: format!("{primary_key} or {secondary_key}"),
        })
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Load the whole file-manager configuration from environment variables
pub fn load_lfm_config() -> Result<LfmConfig> {
    let mut config = LfmConfig::new(load_storage_config()?)?;

    config.url_prefix = env_or("LFM_URL_PREFIX", &config.url_prefix);
    if let Ok(base_url) = env::var("LFM_BASE_URL") {
        config.base_url = parse_base_url(&base_url)?;
    }
    config.base_path = env_or("LFM_BASE_PATH", &config.base_path);
    config.thumb_folder_name = env_or("LFM_THUMB_FOLDER", &config.thumb_folder_name);
    config.files_folder_name = env_or("LFM_FILES_FOLDER", &config.files_folder_name);
    config.images_folder_name = env_or("LFM_IMAGES_FOLDER", &config.images_folder_name);
    config.user_folder = env_or("LFM_USER_FOLDER", &config.user_folder);
    config.shared_folder_name = env_or("LFM_SHARED_FOLDER", &config.shared_folder_name);
    config.allow_private_folder =
        env_flag("LFM_ALLOW_PRIVATE_FOLDER", config.allow_private_folder);
    config.allow_shared_folder = env_flag("LFM_ALLOW_SHARED_FOLDER", config.allow_shared_folder);

    log::debug!(
        "loaded lfm config backend={:?} url_prefix={} base_url={}",
        config.storage.backend,
        config.url_prefix,
        config.base_url
    );
    Ok(config)
}

/// Load storage configuration from environment variables
pub fn load_storage_config() -> Result<StorageConfig> {
    let provider_str = env_or("STORAGE_PROVIDER", "fs");
    let backend = StorageBackend::from_str(&provider_str)?;

    match backend {
        StorageBackend::Oss => load_oss_config(),
        StorageBackend::S3 => load_s3_config(&provider_str),
        StorageBackend::Fs => Ok(StorageConfig::fs(env_or(
            "STORAGE_ROOT_PATH",
            DEFAULT_FS_ROOT,
        ))),
        StorageBackend::Hdfs => Ok(StorageConfig::hdfs(
            get_env_var("STORAGE_NAME_NODE", "HDFS_NAME_NODE")?,
            env_or("STORAGE_ROOT_PATH", "/"),
        )),
    }
}

/// Load OSS (Alibaba Cloud) configuration
fn load_oss_config() -> Result<StorageConfig> {
    let bucket = get_env_var("STORAGE_BUCKET", "OSS_BUCKET")?;
    let access_key_id = get_env_var("STORAGE_ACCESS_KEY_ID", "OSS_ACCESS_KEY_ID")?;
    let access_key_secret = get_env_var("STORAGE_ACCESS_KEY_SECRET", "OSS_ACCESS_KEY_SECRET")?;
    let region = env::var("STORAGE_REGION")
        .or_else(|_| env::var("OSS_REGION"))
        .ok();
    let endpoint = env::var("STORAGE_ENDPOINT")
        .or_else(|_| env::var("OSS_ENDPOINT"))
        .unwrap_or_else(|_| "https://oss-cn-hangzhou.aliyuncs.com".to_string());

    let mut config = StorageConfig::oss(bucket, access_key_id, access_key_secret, region);
    config.endpoint = Some(endpoint);
    Ok(config)
}

/// Load S3 (AWS) or MinIO configuration
fn load_s3_config(provider_str: &str) -> Result<StorageConfig> {
    let is_minio = provider_str.eq_ignore_ascii_case("minio");
    let (bucket_key, id_key, secret_key) = if is_minio {
        ("MINIO_BUCKET", "MINIO_ACCESS_KEY", "MINIO_SECRET_KEY")
    } else {
        ("AWS_S3_BUCKET", "AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY")
    };

    let bucket = get_env_var("STORAGE_BUCKET", bucket_key)?;
    let access_key_id = get_env_var("STORAGE_ACCESS_KEY_ID", id_key)?;
    let secret_access_key = get_env_var("STORAGE_ACCESS_KEY_SECRET", secret_key)?;
    let region = env::var("STORAGE_REGION")
        .or_else(|_| env::var("AWS_DEFAULT_REGION"))
        .or_else(|_| env::var("MINIO_DEFAULT_REGION"))
        .ok();

    let endpoint = if is_minio {
        Some(
            env::var("STORAGE_ENDPOINT")
                .or_else(|_| env::var("MINIO_ENDPOINT"))
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
        )
    } else {
        env::var("STORAGE_ENDPOINT").ok()
    };

    let mut config = StorageConfig::s3(bucket, access_key_id, secret_access_key, region);
    config.endpoint = endpoint;
    Ok(config)
}
