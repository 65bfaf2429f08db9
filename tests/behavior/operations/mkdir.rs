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
        test_create_folder,
        test_create_existing_folder,
        test_cli_mkdir_existing_fails
    ));
}

async fn test_create_folder(lfm: Lfm) -> Result<()> {
    let working_dir = TEST_FIXTURE.new_working_dir();
    let key = storage_key(&working_dir);

    let lfm = lfm.with_input("working_dir", working_dir);
    let mut path = LfmPath::new(&lfm);

    assert!(path.create_folder("albums").await?);

    let meta = operator(&lfm).stat(&format!("{key}/albums/")).await?;
    assert!(meta.mode().is_dir(), "created entry should be a directory");
    Ok(())
}

async fn test_create_existing_folder(lfm: Lfm) -> Result<()> {
    let working_dir = TEST_FIXTURE.new_working_dir();
    operator(&lfm)
        .create_dir(&format!("{}/albums/", storage_key(&working_dir)))
        .await?;

    let lfm = lfm.with_input("working_dir", working_dir);
    let mut path = LfmPath::new(&lfm);

    assert!(!path.create_folder("albums").await?);
    Ok(())
}

async fn test_cli_mkdir_existing_fails(_lfm: Lfm) -> Result<()> {
    let working_dir = TEST_FIXTURE.new_working_dir();

    lfm_cmd()
        .arg("-w")
        .arg(&working_dir)
        .arg("mkdir")
        .arg("reports")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory: reports"));

    lfm_cmd()
        .arg("-w")
        .arg(&working_dir)
        .arg("mkdir")
        .arg("reports")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}
