use std::fs;
use std::process::Command;

fn dkmscope() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dkmscope"));
    cmd.env_remove("RTL8821CU_WSL_TARGET").env_remove("DKMSCOPE_LOG");
    cmd
}

#[test]
fn no_subcommand_prints_usage_and_exits_1() {
    let out = dkmscope().output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("summarize"));
}

#[test]
fn summarize_missing_log_exits_0_with_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = dkmscope()
        .arg("summarize")
        .arg(dir.path().join("run.log"))
        .arg("--target")
        .arg(dir.path())
        .arg("--dkms-base")
        .arg(dir.path().join("dkms"))
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["errors"], serde_json::json!([]));
    assert_eq!(v["dkms_make_log_tail"], "");
    let notes: Vec<&str> = v["notes"].as_array().unwrap().iter().filter_map(|n| n.as_str()).collect();
    assert!(notes.iter().any(|n| n.starts_with("Could not read logfile:")));
    assert!(notes.contains(&"No DKMS make.log found."));
}

#[test]
fn target_directory_comes_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("PATCHES_APPLIED"), "patch1\npatch2\n").unwrap();
    let log = dir.path().join("run.log");
    fs::write(&log, "make: *** No rule to make target 'modules'\n").unwrap();
    let out = dkmscope()
        .env("RTL8821CU_WSL_TARGET", dir.path())
        .arg("summarize")
        .arg(&log)
        .arg("--dkms-base")
        .arg(dir.path().join("dkms"))
        .arg("--pretty")
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["applied_patches"], serde_json::json!(["patch1", "patch2"]));
    assert_eq!(v["errors"].as_array().unwrap().len(), 1);
    assert_eq!(v["suggested_fixes"].as_array().unwrap().len(), 1);
}

#[test]
fn unknown_subcommand_is_rejected() {
    let out = dkmscope().arg("explain").output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
