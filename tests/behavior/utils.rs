use assert_cmd::prelude::*;
use libtest_mimic::{Failed, Trial};
use lfm::config::LfmConfig;
use lfm::error::Result;
use lfm::lfm::Lfm;
use lfm::storage::StorageConfig;
use opendal::Operator;
use std::collections::HashMap;
use std::process::Command;
use std::sync::LazyLock;
use tempfile::TempDir;
use uuid::Uuid;

pub static TEST_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

pub static TEST_FIXTURE: LazyLock<Fixture> = LazyLock::new(Fixture::new);

/// Build an `Lfm` over a filesystem backend rooted in the fixture directory.
pub fn init_test_service() -> Result<Lfm> {
    let storage = StorageConfig::fs(TEST_FIXTURE.root());
    let config = LfmConfig::new(storage)?;
    Lfm::new(config, HashMap::new())
}

/// Storage key of a working directory in the `files` category.
pub fn storage_key(working_dir: &str) -> String {
    format!("laravel-filemanager/files/{}", working_dir.trim_matches('/'))
}

pub fn operator(lfm: &Lfm) -> &Operator {
    lfm.storage().operator()
}

pub struct Fixture {
    root: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("failed to create storage root"),
        }
    }

    pub fn root(&self) -> String {
        self.root.path().to_string_lossy().to_string()
    }

    /// A fresh working directory, unique per test.
    pub fn new_working_dir(&self) -> String {
        format!("/{}", Uuid::new_v4())
    }

    pub fn cleanup(&self) {
        let _ = std::fs::remove_dir_all(self.root.path());
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_async_trial<F, Fut>(name: &str, lfm: &Lfm, f: F) -> Trial
where
    F: FnOnce(Lfm) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Result<()>>,
{
    let handle = TEST_RUNTIME.handle().clone();
    let lfm = lfm.clone();

    Trial::test(format!("behavior::{name}"), move || {
        handle
            .block_on(f(lfm))
            .map_err(|err| Failed::from(err.to_string()))
    })
}

#[macro_export]
macro_rules! async_trials {
    ($lfm:ident, $($test:ident),*) => {
        vec![$(build_async_trial(stringify!($test), $lfm, $test),)*]
    };
}

/// The `lfm` binary with a clean environment pointed at the fixture storage.
pub fn lfm_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lfm").unwrap();
    cmd.env_clear()
        .env("RUST_LOG", "info")
        .env("STORAGE_PROVIDER", "fs")
        .env("STORAGE_ROOT_PATH", TEST_FIXTURE.root());
    cmd
}
