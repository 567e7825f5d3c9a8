use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn script_replay_prints_json_states() {
    let exe = env!("CARGO_BIN_EXE_dotmap");
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("session.txt");
    fs::write(&script, "# pick the last word\nword Zoo\nadd\ntoggle 0\nadd\nremove 1\n").unwrap();

    let output = Command::new(exe)
        .args(["--quiet", "--json", "--script", script.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let states: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(states.len(), 5);
    assert_eq!(states[0]["binary"], "11111111111");
    assert_eq!(states[2]["word_index"], 1023);
    assert_eq!(states[2]["input_word"], "zoo");
    let last = &states[4]["committed_words"];
    assert_eq!(last.as_array().unwrap().len(), 1);
    assert_eq!(last[0], states[2]["word"]);
}

#[test]
fn script_errors_name_the_line() {
    let exe = env!("CARGO_BIN_EXE_dotmap");
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("bad.txt");
    fs::write(&script, "toggle 1\ntoggle 11\n").unwrap();

    let output = Command::new(exe)
        .args(["--quiet", "--script", script.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("Use 0 to 10"));
}

#[test]
fn missing_script_is_reported() {
    let exe = env!("CARGO_BIN_EXE_dotmap");
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("absent.txt");

    let output = Command::new(exe)
        .args(["--quiet", "--script", script.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Check that the file exists"));
}

#[test]
fn stdin_session_survives_bad_lines() {
    let exe = env!("CARGO_BIN_EXE_dotmap");
    let mut child = Command::new(exe)
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"word xyz123\nfly away\ntoggle 10\nadd\nlist\nquit\nadd\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Typed word:    xyz123"));
    assert!(stdout.contains("BIP39 Word:    ability"));
    assert!(stdout.contains("Word List (1)"));
    assert!(!stdout.contains("Word List (2)"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown command"));
}

#[test]
fn stdin_session_skips_invalid_utf8_lines() {
    let exe = env!("CARGO_BIN_EXE_dotmap");
    let mut child = Command::new(exe)
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"toggle 10\n\xff\xfe\ntoggle 9\nlist\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Decimal index: 3"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid UTF-8"));
}

#[test]
fn help_is_printed_in_json_mode() {
    let exe = env!("CARGO_BIN_EXE_dotmap");
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("help.txt");
    fs::write(&script, "help\ntoggle 10\n").unwrap();

    let output = Command::new(exe)
        .args(["--quiet", "--json", "--script", script.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("toggle <0-10>"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let states: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["word_index"], 1);
}
