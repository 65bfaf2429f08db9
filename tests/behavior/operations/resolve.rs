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
        test_path_defaults_to_user_root,
        test_url_with_image_category,
        test_cli_path_and_url,
        test_cli_absolute_path_follows_folder_type,
        test_cli_disallowed_folder_type
    ));
}

async fn test_path_defaults_to_user_root(lfm: Lfm) -> Result<()> {
    let mut path = LfmPath::new(&lfm);

    assert_eq!(
        path.path()?.as_deref(),
        Some("laravel-filemanager/files/1")
    );
    assert_eq!(
        path.set_name("avatar.png").path_in("share")?.as_deref(),
        Some("laravel-filemanager/files/shares/avatar.png")
    );
    Ok(())
}

async fn test_url_with_image_category(lfm: Lfm) -> Result<()> {
    let lfm = lfm
        .with_input("type", "image")
        .with_input("working_dir", "/1/summer trip");
    let mut path = LfmPath::new(&lfm);
    path.set_name("beach.jpg");

    assert_eq!(
        path.url().as_deref(),
        Some("http://localhost/laravel-filemanager/photos/1/summer%20trip/beach.jpg")
    );
    assert_eq!(
        path.append_storage_full_path("laravel-filemanager"),
        "laravel-filemanager/photos/1/summer trip"
    );
    Ok(())
}

async fn test_cli_path_and_url(_lfm: Lfm) -> Result<()> {
    lfm_cmd()
        .arg("-w")
        .arg("/shares")
        .arg("path")
        .arg("--name")
        .arg("a.txt")
        .assert()
        .success()
        .stdout(predicate::str::diff("laravel-filemanager/files/shares/a.txt\n"));

    lfm_cmd()
        .env("LFM_BASE_URL", "https://files.example.com")
        .arg("url")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "https://files.example.com/laravel-filemanager/files/1\n",
        ));

    Ok(())
}

async fn test_cli_absolute_path_follows_folder_type(_lfm: Lfm) -> Result<()> {
    lfm_cmd()
        .env("LFM_ALLOW_PRIVATE_FOLDER", "false")
        .arg("path")
        .arg("--folder-type")
        .arg("share")
        .arg("--absolute")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(TEST_FIXTURE.root()))
        .stdout(predicate::str::ends_with("laravel-filemanager/files/shares\n"));

    Ok(())
}

async fn test_cli_disallowed_folder_type(_lfm: Lfm) -> Result<()> {
    lfm_cmd()
        .env("LFM_ALLOW_SHARED_FOLDER", "false")
        .arg("path")
        .arg("--folder-type")
        .arg("share")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Folder type 'share' is not allowed"));

    Ok(())
}
