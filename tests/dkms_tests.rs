use dkmscope::dkms::{find_make_log, make_log_path};
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

fn write_make_log(base: &Path, version: &str, age_secs: u64) {
    let log = make_log_path(&base.join(version));
    fs::create_dir_all(log.parent().unwrap()).unwrap();
    fs::write(&log, format!("build of {version}\n")).unwrap();
    let f = File::options().write(true).open(&log).unwrap();
    f.set_modified(SystemTime::now() - Duration::from_secs(age_secs)).unwrap();
}

#[test]
fn missing_base_directory_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(find_make_log(&dir.path().join("8821cu")), None);
}

#[test]
fn base_that_is_a_file_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let f = dir.path().join("8821cu");
    fs::write(&f, "").unwrap();
    assert_eq!(find_make_log(&f), None);
}

#[test]
fn versions_without_make_log_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("5.12.0.4/build")).unwrap();
    fs::create_dir_all(dir.path().join("5.13.0.1")).unwrap();
    assert_eq!(find_make_log(dir.path()), None);
}

#[test]
fn newest_make_log_wins() {
    let dir = tempfile::tempdir().unwrap();
    write_make_log(dir.path(), "5.12.0.4", 3600);
    write_make_log(dir.path(), "5.13.0.1", 10);
    write_make_log(dir.path(), "5.11.0.0", 7200);
    let found = find_make_log(dir.path()).unwrap();
    assert_eq!(found, make_log_path(&dir.path().join("5.13.0.1")));
}
