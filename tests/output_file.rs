use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bf2js").unwrap();
    cmd.env_remove("BF2JS_TAPE_SIZE")
        .env_remove("BF2JS_INDENT")
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("bf2js-no-config"));
    cmd
}

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn writes_script_to_output_path() {
    let tf = source_file(",[.,]");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cat.js");

    cargo_bin()
        .arg(tf.path())
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    let js = fs::read_to_string(&out).unwrap();
    assert!(js.starts_with("#!/usr/bin/env node\n"));
    assert!(js.contains(
        "    await readCell();\n    while (!isCurrentZero()) {\n        await writeCell();\n        await readCell();\n    }\n"
    ));
}

#[cfg(unix)]
#[test]
fn output_is_executable_by_owner() {
    use std::os::unix::fs::PermissionsExt;

    let tf = source_file("+.");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plus.js");

    cargo_bin().arg(tf.path()).arg(&out).assert().success();

    let mode = fs::metadata(&out).unwrap().permissions().mode();
    assert_eq!(mode & 0o700, 0o700, "mode was {mode:o}");
}

#[test]
fn overwrites_existing_output() {
    let tf = source_file("+.");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plus.js");
    fs::write(&out, "stale").unwrap();

    cargo_bin().arg(tf.path()).arg(&out).assert().success();

    let js = fs::read_to_string(&out).unwrap();
    assert!(!js.contains("stale"));
    assert!(js.contains("    addToCell(1);\n    await writeCell();\n"));
}
