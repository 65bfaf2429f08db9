// Configuration and storage factory seams with their env-backed implementation

use std::collections::HashMap;

use crate::config::LfmConfig;
use crate::error::Result;
use crate::storage::constants::{SHARE_FOLDER_TYPE, TYPE_INPUT, USER_FOLDER_TYPE};
use crate::storage::utils::path::basename;
use crate::storage::{OpenDalStorage, StorageProvider};

/// File-manager settings plus the request-scoped input of one request.
pub trait Configuration {
    /// Request input such as `working_dir` or `type`.
    fn input(&self, key: &str) -> Option<String>;

    /// Storage partition for the current request, e.g. `files` or `photos`.
    fn category_name(&self) -> String;

    /// Absolute root folder for a folder type.
    fn root_folder(&self, folder_type: &str) -> String;

    fn allow_folder_type(&self, folder_type: &str) -> bool;

    fn url_prefix(&self) -> String;

    fn base_path(&self) -> String;

    fn thumb_folder_name(&self) -> String;

    /// Leaf name of a storage path.
    fn name_from_path(&self, path: &str) -> String;

    /// Absolute URL for a relative path; segments are escaped here.
    fn url(&self, path: &str) -> String;
}

/// Hands out the storage that hosts a given storage key.
pub trait StorageFactory {
    type Storage: StorageProvider;

    fn get_storage(&self, key: &str) -> Result<Self::Storage>;
}

/// Configuration and storage for a single request.
#[derive(Clone)]
pub struct Lfm {
    config: LfmConfig,
    inputs: HashMap<String, String>,
    storage: OpenDalStorage,
}

impl Lfm {
    pub fn new(config: LfmConfig, inputs: HashMap<String, String>) -> Result<Self> {
        let storage = OpenDalStorage::new(&config.storage)?;
        Ok(Self {
            config,
            inputs,
            storage,
        })
    }

    /// Set a request input, replacing any previous value.
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }

    pub fn storage(&self) -> &OpenDalStorage {
        &self.storage
    }
}

impl Configuration for Lfm {
    fn input(&self, key: &str) -> Option<String> {
        self.inputs.get(key).cloned()
    }

    fn category_name(&self) -> String {
        match self.input(TYPE_INPUT).as_deref() {
            Some("image") | Some("images") => self.config.images_folder_name.clone(),
            _ => self.config.files_folder_name.clone(),
        }
    }

    fn root_folder(&self, folder_type: &str) -> String {
        match folder_type {
            USER_FOLDER_TYPE => format!("/{}", self.config.user_folder.trim_matches('/')),
            SHARE_FOLDER_TYPE => format!("/{}", self.config.shared_folder_name.trim_matches('/')),
            _ => "/".to_string(),
        }
    }

    fn allow_folder_type(&self, folder_type: &str) -> bool {
        match folder_type {
            USER_FOLDER_TYPE => self.config.allow_private_folder,
            SHARE_FOLDER_TYPE => self.config.allow_shared_folder,
            _ => false,
        }
    }

    fn url_prefix(&self) -> String {
        self.config.url_prefix.clone()
    }

    fn base_path(&self) -> String {
        self.config.base_path.clone()
    }

    fn thumb_folder_name(&self) -> String {
        self.config.thumb_folder_name.clone()
    }

    fn name_from_path(&self, path: &str) -> String {
        basename(path)
    }

    fn url(&self, path: &str) -> String {
        let mut url = self.config.base_url.clone();
        // cannot-be-a-base urls were rejected when parsing the config
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        url.to_string()
    }
}

impl StorageFactory for Lfm {
    type Storage = OpenDalStorage;

    fn get_storage(&self, key: &str) -> Result<OpenDalStorage> {
        log::debug!(
            "get_storage backend={:?} key={}",
            self.storage.backend(),
            key
        );
        Ok(self.storage.clone())
    }
}
