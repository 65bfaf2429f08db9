// Per-request path resolution over the storage that hosts a working directory
use std::path::Path;

use crate::error::{Error, Result};
use crate::item::LfmItem;
use crate::lfm::{Configuration, StorageFactory};
use crate::storage::StorageProvider;
use crate::storage::constants::{DEFAULT_FOLDER_TYPE, LFM_PREFIX, WORKING_DIR_INPUT};
use crate::storage::utils::path::{
    has_parent_segment, join_path, relative_to_root, strip_leading_separator,
};

/// Resolves paths for one request.
///
/// The working directory is read from the `working_dir` input once, at
/// construction. The storage is requested from the factory on first use and
/// kept for the life of the resolver.
pub struct LfmPath<'a, C>
where
    C: Configuration + StorageFactory,
{
    helper: &'a C,
    working_dir: String,
    name: Option<String>,
    is_thumb: bool,
    storage: Option<C::Storage>,
}

impl<'a, C> LfmPath<'a, C>
where
    C: Configuration + StorageFactory,
{
    pub fn new(helper: &'a C) -> Self {
        let working_dir = helper.input(WORKING_DIR_INPUT).unwrap_or_default();
        Self {
            helper,
            working_dir: strip_leading_separator(&working_dir).to_string(),
            name: None,
            is_thumb: false,
            storage: None,
        }
    }

    /// Replace the working directory. Configuration is not consulted again.
    pub fn dir(&mut self, path: &str) -> &mut Self {
        self.working_dir = strip_leading_separator(path).to_string();
        self
    }

    pub fn normalize_working_dir(&self) -> &str {
        &self.working_dir
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Address the thumbnail variant of the named file.
    pub fn thumb(&mut self) -> &mut Self {
        self.is_thumb = true;
        self
    }

    /// Key the storage is requested with: `laravel-filemanager/<category>/<working dir>`.
    pub fn storage_key(&self) -> String {
        join_path([
            LFM_PREFIX,
            self.helper.category_name().as_str(),
            self.working_dir.as_str(),
        ])
    }

    /// Storage path that listing, deletion and folder creation act on.
    pub fn target(&self) -> String {
        join_path([self.storage_key().as_str(), self.name().unwrap_or_default()])
    }

    /// The storage hosting this resolver's key, fetched once.
    pub fn storage(&mut self) -> Result<&C::Storage> {
        let storage = match self.storage.take() {
            Some(storage) => storage,
            None => {
                let key = self.storage_key();
                log::debug!("resolving storage key={key}");
                self.helper.get_storage(&key)?
            }
        };
        Ok(&*self.storage.insert(storage))
    }

    /// Storage-relative path, using the default root folder type when no
    /// working directory is set.
    ///
    /// `Ok(None)` means the root folder type is not allowed; nothing was
    /// asked of the storage in that case.
    pub fn path(&mut self) -> Result<Option<String>> {
        self.path_in(DEFAULT_FOLDER_TYPE)
    }

    /// Like [`path`](Self::path) with an explicit root folder type.
    pub fn path_in(&mut self, root_type: &str) -> Result<Option<String>> {
        let folder = if self.working_dir.is_empty() {
            let Some(root_folder) = self.allowed_root_folder(root_type) else {
                return Ok(None);
            };
            let storage_root = self.storage()?.root_path();
            relative_to_root(&root_folder, storage_root).to_string()
        } else {
            self.working_dir.clone()
        };

        Ok(Some(join_path([
            LFM_PREFIX,
            self.helper.category_name().as_str(),
            folder.as_str(),
            self.name().unwrap_or_default(),
        ])))
    }

    /// Public URL of the working directory (or default root) and name.
    /// `None` when the root folder type is not allowed.
    pub fn url(&self) -> Option<String> {
        self.url_in(DEFAULT_FOLDER_TYPE)
    }

    pub fn url_in(&self, root_type: &str) -> Option<String> {
        let folder = if self.working_dir.is_empty() {
            self.allowed_root_folder(root_type)?
        } else {
            self.working_dir.clone()
        };

        let path = join_path([
            self.helper.url_prefix().as_str(),
            self.helper.category_name().as_str(),
            folder.as_str(),
            self.name().unwrap_or_default(),
        ]);
        Some(self.helper.url(&path))
    }

    /// Absolute location of [`path`](Self::path) on the storage host. A
    /// relative storage root is resolved against the configured base path.
    pub fn absolute_path(&mut self) -> Result<Option<String>> {
        self.absolute_path_in(DEFAULT_FOLDER_TYPE)
    }

    /// Like [`absolute_path`](Self::absolute_path) with an explicit root folder type.
    pub fn absolute_path_in(&mut self, root_type: &str) -> Result<Option<String>> {
        let Some(path) = self.path_in(root_type)? else {
            return Ok(None);
        };
        let base_path = self.helper.base_path();
        let root = self.storage()?.root_path();
        let absolute = Path::new(&base_path).join(root).join(path);
        Ok(Some(absolute.to_string_lossy().to_string()))
    }

    /// `<prefix>/<category>/<working_dir input>`, read fresh from the request
    /// and ignoring `dir`, the name and the thumbnail flag.
    pub fn append_storage_full_path(&self, prefix: &str) -> String {
        let working_dir = self.helper.input(WORKING_DIR_INPUT).unwrap_or_default();
        join_path([
            prefix,
            self.helper.category_name().as_str(),
            strip_leading_separator(&working_dir),
        ])
    }

    /// `<prefix>[/<thumbs>]/<name>`.
    pub fn append_path_to_file(&self, prefix: &str) -> String {
        let thumbs = if self.is_thumb {
            self.helper.thumb_folder_name()
        } else {
            String::new()
        };
        join_path([prefix, thumbs.as_str(), self.name().unwrap_or_default()])
    }

    pub async fn folders(&mut self) -> Result<Vec<LfmItem>> {
        let target = self.contained_target()?;
        let directories = self.storage()?.directories(&target).await?;
        Ok(directories.iter().map(|path| self.get(path)).collect())
    }

    pub async fn files(&mut self) -> Result<Vec<LfmItem>> {
        let target = self.contained_target()?;
        let files = self.storage()?.files(&target).await?;
        Ok(files.iter().map(|path| self.get(path)).collect())
    }

    pub fn get(&self, raw_path: &str) -> LfmItem {
        LfmItem::new(
            raw_path,
            self.helper.name_from_path(raw_path),
            self.is_thumb,
        )
    }

    /// Alphabetical order by item name.
    pub fn sort_items(&self, mut items: Vec<LfmItem>) -> Vec<LfmItem> {
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Remove the target: recursively for a directory, as a file otherwise.
    pub async fn delete(&mut self) -> Result<bool> {
        let target = self.contained_target()?;
        let storage = self.storage()?;
        if storage.is_directory(&target).await? {
            storage.delete_directory(&target).await
        } else {
            storage.delete(&target).await
        }
    }

    /// Create `name` under the target. `Ok(false)` when it already exists.
    pub async fn create_folder(&mut self, name: &str) -> Result<bool> {
        let path = contained(join_path([self.target().as_str(), name]))?;
        let storage = self.storage()?;
        if storage.exists(&path).await? {
            log::debug!("folder already exists path={path}");
            return Ok(false);
        }
        storage.make_directory(&path).await
    }

    pub async fn exists(&mut self) -> Result<bool> {
        let target = self.contained_target()?;
        self.storage()?.exists(&target).await
    }

    pub async fn is_directory(&mut self) -> Result<bool> {
        let target = self.contained_target()?;
        self.storage()?.is_directory(&target).await
    }

    pub fn root_path(&mut self) -> Result<String> {
        Ok(self.storage()?.root_path().to_string())
    }

    /// [`target`](Self::target), refused when it climbs out of the storage root.
    fn contained_target(&self) -> Result<String> {
        contained(self.target())
    }

    fn allowed_root_folder(&self, root_type: &str) -> Option<String> {
        if !self.helper.allow_folder_type(root_type) {
            log::debug!("folder type not allowed type={root_type}");
            return None;
        }
        Some(self.helper.root_folder(root_type))
    }
}

fn contained(path: String) -> Result<String> {
    if has_parent_segment(&path) {
        log::debug!("refusing path outside storage root path={path}");
        return Err(Error::PathTraversal { path });
    }
    Ok(path)
}
