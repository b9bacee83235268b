use assert_cmd::Command;

#[test]
fn help_lists_options() {
    let output = Command::cargo_bin("loksewa-prep")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--language", "--duration", "--page", "--topic", "--save-config"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn version_prints_package_version() {
    let output = Command::cargo_bin("loksewa-prep")
        .unwrap()
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_language() {
    Command::cargo_bin("loksewa-prep")
        .unwrap()
        .args(["--language", "klingon"])
        .assert()
        .failure();
}

#[test]
fn refuses_to_run_without_a_tty() {
    // stdin is piped by assert_cmd, so the TUI must not start
    Command::cargo_bin("loksewa-prep")
        .unwrap()
        .write_stdin("")
        .assert()
        .failure();
}
