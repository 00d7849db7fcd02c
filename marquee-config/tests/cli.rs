use std::process::Command;

use tempfile::tempdir;

fn marquee_insights() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee-insights"));
    cmd.env_remove("MARQUEE_CONFIG_JSON")
        .env_remove("TMDB_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_works_with_a_broken_config_path() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist.toml");

    let output = marquee_insights()
        .env("MARQUEE_CONFIG_PATH", &missing)
        .arg("--help")
        .output()
        .expect("run marquee-insights");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("report"));
    assert!(stdout.contains("fingerprint"));
}

#[test]
fn broken_config_path_still_fails_real_commands() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist.toml");
    let snapshot = dir.path().join("snapshot.json");
    std::fs::write(&snapshot, r#"{"lists":[],"ratings":[]}"#).unwrap();

    let output = marquee_insights()
        .env("MARQUEE_CONFIG_PATH", &missing)
        .args(["fingerprint", "--snapshot"])
        .arg(&snapshot)
        .args(["--user", "0191d5a4-6b8e-7c3e-9f00-000000000001"])
        .output()
        .expect("run marquee-insights");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.toml"));
}
