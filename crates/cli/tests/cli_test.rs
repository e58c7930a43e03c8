//! End-to-end tests running the `movies` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn movie_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"Toy Story,1995,[English],4.3\n\
          Amelie,2001,[French],4.6\n\
          not a movie\n",
    )
    .unwrap();
    file.flush().unwrap();
    file
}

fn run_with_input(args: &[&std::ffi::OsStr], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_movies"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = run_with_input(&[], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(stdout.contains("You must provide the name of the file to process"));
}

#[test]
fn test_unreadable_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");

    let output = run_with_input(&[missing.as_os_str()], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(stdout.contains("Failed to load movie file"));
}

#[test]
fn test_session_runs_queries_and_exits_cleanly() {
    let file = movie_file();

    let output = run_with_input(&[file.path().as_os_str()], "1\n1995\n3\nFrench\nxyz\n2\n4\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("parsed data for 2 movies"));
    assert!(stdout.contains("Parse error at line 3") || stdout.contains("in line 3"));
    assert!(stdout.contains("Toy Story\n"));
    assert!(stdout.contains("Amelie (2001) 4.6"));
    assert!(stdout.contains("Invalid input: 'xyz' is not a number"));
    assert!(stdout.contains("1995 4.3 Toy Story\n2001 4.6 Amelie\n"));
    assert!(stdout.contains("4. Exit from the program\n"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let file = movie_file();

    let output = run_with_input(&[file.path().as_os_str()], "2\n");
    assert!(output.status.success());
}
