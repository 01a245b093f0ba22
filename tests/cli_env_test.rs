#![cfg(target_os = "linux")]

use std::{fs, path::PathBuf, process::Command};

fn data_home(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("consolify-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_client_warns_and_continues_when_env_cannot_load() {
    let dir = data_home("env-blocked");
    // A plain file where the config directory should be.
    fs::write(dir.join("consolify"), "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_consolify"))
        .args(["completions", "bash"])
        .env("XDG_DATA_HOME", &dir)
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", stdout);
    assert!(stdout.contains("Cannot load environment"));
    assert!(stdout.contains("consolify"));

    let _ = fs::remove_dir_all(&dir);
}
