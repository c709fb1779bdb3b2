use assert_cmd::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn run_args_one_move() {
    let output = r"Solving 1 2 3 4 5 6 7 0 8...
---------------
Found solution:
---------------
Step 0:
 1  2  3
 4  5  6
 7  0  8
---------------
Step 1:
 1  2  3
 4  5  6
 7  8  0
---------------
Moves: 1
r
";

    Command::main_binary()
        .unwrap()
        .args(&["--color", "never", "1", "2", "3", "4", "5", "6", "7", "0", "8"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_verbose() {
    let status = format!(
        "total created / unique visited / reached duplicates:\n{:<16}{:<16}{}\n",
        1, 1, 0
    );
    let status2 = format!(
        "total created / unique visited / reached duplicates:\n{:<16}{:<16}{}\n",
        4, 2, 0
    );
    let output = format!(
        "Solving 1 2 3 4 5 6 7 0 8...\n\
         Visited new depth: 0\n{}\n\
         Visited new depth: 1\n{}\n\
         ---------------\n\
         Found solution:\n\
         ---------------\n\
         Step 0:\n 1  2  3\n 4  5  6\n 7  0  8\n---------------\n\
         Step 1:\n 1  2  3\n 4  5  6\n 7  8  0\n---------------\n\
         Moves: 1\nr\n",
        status, status2
    );

    let out = Command::main_binary()
        .unwrap()
        .args(&[
            "--color", "never", "--verbose", "1", "2", "3", "4", "5", "6", "7", "0", "8",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), output);
    assert!(out.stderr.is_empty());
}

#[test]
fn run_file_solved() {
    let output = r"Solving 1 2 3 4 5 6 7 8 0...
---------------
Found solution:
---------------
Step 0:
 1  2  3
 4  5  6
 7  8  0
---------------
Moves: 0
";

    Command::main_binary()
        .unwrap()
        .arg("--file")
        .arg("puzzles/00-solved.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_example() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["--color", "never", "--file", "puzzles/02-example.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Solving 0 5 7 1 4 3 6 8 2...\n"));
    assert!(stdout.contains("Step 24:\n 1  2  3\n 4  5  6\n 7  8  0\n"));
    assert!(!stdout.contains("Step 25:"));
    assert!(stdout.ends_with("Moves: 24\ndrrulddlurrdluldruruldrd\n"));
}

#[test]
fn run_stats() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["--stats", "1", "2", "3", "4", "5", "6", "7", "0", "8"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("States created total: 4\n"));
    assert!(stdout.contains("Unique visited total: 2\n"));
    assert!(stdout.contains("Reached duplicates total: 0\n"));
    assert!(stdout.contains("Created but not reached total: 2\n"));
}

#[test]
fn run_no_solution() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["--file", "puzzles/no-solution.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Solving 1 2 3 4 5 6 8 7 0...\n---------------\nNo solution\n"
    );
}

#[test]
fn run_limit() {
    Command::main_binary()
        .unwrap()
        .args(&["--limit", "100", "--file", "puzzles/31-hardest.txt"])
        .assert()
        .failure()
        .stdout("Solving 8 6 7 2 5 4 3 0 1...\nGave up after creating 100 states\n");
}

#[test]
fn run_interactive() {
    let mut child = Command::main_binary()
        .unwrap()
        .args(&["--color", "never"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"1 2 3\n1 2 3 4 5 6 7 0 8\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("8-puzzle solver\n"));
    assert!(stdout.contains("Invalid input: Expected 9 numbers, got 3."));
    assert_eq!(stdout.matches("Initial configuration: ").count(), 2);
    assert!(stdout.ends_with("Moves: 1\nr\n"));
}

#[test]
fn run_bad_args() {
    // doesn't check stderr - only that it fails and doesn't print to stdout

    Command::main_binary()
        .unwrap()
        .args(&["1", "2", "3"])
        .assert()
        .failure()
        .stdout("");

    Command::main_binary()
        .unwrap()
        .args(&["1", "2", "3", "4", "5", "6", "7", "8", "8"])
        .assert()
        .failure()
        .stdout("");

    Command::main_binary()
        .unwrap()
        .args(&["--file", "puzzles/00-solved.txt", "1"])
        .assert()
        .failure()
        .stdout("");
}
