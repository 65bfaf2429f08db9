use crate::*;
use assert_cmd::prelude::*;
use libtest_mimic::Trial;
use lfm::error::Result;
use lfm::lfm::Lfm;
use lfm::path::LfmPath;
use predicates::prelude::*;

pub fn tests(lfm: &Lfm, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        lfm,
        test_folders_lists_sub_directories,
        test_files_lists_only_files,
        test_list_empty_directory,
        test_cli_ls_json
    ));
}

async fn test_folders_lists_sub_directories(lfm: Lfm) -> Result<()> {
    let working_dir = TEST_FIXTURE.new_working_dir();
    let key = storage_key(&working_dir);
    operator(&lfm).create_dir(&format!("{key}/beta/")).await?;
    operator(&lfm).create_dir(&format!("{key}/alpha/")).await?;
    operator(&lfm)
        .write(&format!("{key}/readme.txt"), b"hello".to_vec())
        .await?;

    let lfm = lfm.with_input("working_dir", working_dir);
    let mut path = LfmPath::new(&lfm);
    let folders = path.folders().await?;
    let names: Vec<_> = path
        .sort_items(folders)
        .into_iter()
        .map(|item| item.name)
        .collect();

    assert_eq!(names, vec!["alpha", "beta"]);
    Ok(())
}

async fn test_files_lists_only_files(lfm: Lfm) -> Result<()> {
    let working_dir = TEST_FIXTURE.new_working_dir();
    let key = storage_key(&working_dir);
    operator(&lfm).create_dir(&format!("{key}/nested/")).await?;
    operator(&lfm)
        .write(&format!("{key}/photo.png"), vec![0u8; 16])
        .await?;

    let lfm = lfm.with_input("working_dir", working_dir);
    let mut path = LfmPath::new(&lfm);
    let files = path.files().await?;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "photo.png");
    assert_eq!(files[0].path, format!("{key}/photo.png"));
    assert!(!files[0].is_thumb);
    Ok(())
}

async fn test_list_empty_directory(lfm: Lfm) -> Result<()> {
    let working_dir = TEST_FIXTURE.new_working_dir();
    operator(&lfm)
        .create_dir(&format!("{}/", storage_key(&working_dir)))
        .await?;

    let lfm = lfm.with_input("working_dir", working_dir);
    let mut path = LfmPath::new(&lfm);

    assert!(path.folders().await?.is_empty());
    assert!(path.files().await?.is_empty());
    Ok(())
}

async fn test_cli_ls_json(lfm: Lfm) -> Result<()> {
    let working_dir = TEST_FIXTURE.new_working_dir();
    let key = storage_key(&working_dir);
    operator(&lfm).create_dir(&format!("{key}/docs/")).await?;

    lfm_cmd()
        .arg("--working-dir")
        .arg(&working_dir)
        .arg("ls")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"docs""#));

    Ok(())
}
