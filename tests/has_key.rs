use std::fs::File;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const WORDS: &str = "apple\napp\napricot\nbanana\n";

fn dictionary() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(WORDS.as_bytes()).unwrap();
    file
}

fn has_key() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_has_key"));
    cmd.env_remove("RUST_LOG")
        .env_remove("HAS_KEY_SENTINEL")
        .env_remove("HAS_KEY_MAX_NODES");
    cmd
}

fn run_with_input(mut cmd: Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The child may exit (e.g. on a load failure) before reading stdin.
    if let Err(err) = child.stdin.take().unwrap().write_all(input) {
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe, "{err}");
    }
    child.wait_with_output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<&str> {
    std::str::from_utf8(&output.stdout).unwrap().lines().collect()
}

#[test]
fn answers_until_sentinel() {
    let dict = dictionary();
    let mut cmd = has_key();
    cmd.arg(dict.path());
    let output = run_with_input(cmd, b"app\nap\n\x00apple\nexit\napp\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["YES", "NO", "YES"]);
}

#[test]
fn end_of_input_ends_session() {
    let dict = dictionary();
    let mut cmd = has_key();
    cmd.arg(dict.path());
    let output = run_with_input(cmd, b"banana\nban");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["YES", "NO"]);
}

#[test]
fn custom_sentinel_from_flag() {
    let dict = dictionary();
    let mut cmd = has_key();
    cmd.arg("--sentinel").arg("quit").arg(dict.path());
    let output = run_with_input(cmd, b"exit\napple\nquit\napple\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["NO", "YES"]);
}

#[test]
fn custom_sentinel_from_env() {
    let dict = dictionary();
    let mut cmd = has_key();
    cmd.env("HAS_KEY_SENTINEL", "stop").arg(dict.path());
    let output = run_with_input(cmd, b"apricot\nstop\nbanana\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["YES"]);
}

#[test]
fn missing_argument_is_usage_error() {
    let output = has_key().stdin(Stdio::null()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn help_exits_cleanly() {
    let output = has_key().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn missing_dictionary_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let output = has_key()
        .arg(dir.path().join("nope.txt"))
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.starts_with("Failed to load dictionary from file"));
}

#[test]
fn node_limit_fails_load() {
    let dict = dictionary();
    let mut cmd = has_key();
    cmd.arg("--max-nodes").arg("2").arg(dict.path());
    let output = run_with_input(cmd, b"apple\nexit\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn node_limit_from_env() {
    let dict = dictionary();

    let mut cmd = has_key();
    cmd.env("HAS_KEY_MAX_NODES", "2").arg(dict.path());
    let output = run_with_input(cmd, b"apple\n");
    assert_eq!(output.status.code(), Some(2));

    // root, "ap", "p", "le", "ricot", "banana"
    let mut cmd = has_key();
    cmd.env("HAS_KEY_MAX_NODES", "6").arg(dict.path());
    let output = run_with_input(cmd, b"apple\nap\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["YES", "NO"]);
}

#[test]
fn unreadable_queries_fail_session() {
    let dict = dictionary();
    let dir = tempfile::tempdir().unwrap();
    let stdin = File::open(dir.path()).unwrap();
    let output = has_key()
        .arg(dict.path())
        .stdin(Stdio::from(stdin))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}
