//! Tests that run the built `lumenctl` binary

use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const TIMEOUT: Duration = Duration::from_secs(10);

/// Run lumenctl, failing the test if it does not exit on its own
fn lumenctl(args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lumenctl"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let started = Instant::now();
    while child.try_wait().unwrap().is_none() {
        if started.elapsed() > TIMEOUT {
            let _ = child.kill();
            panic!("lumenctl {:?} did not exit within {:?}", args, TIMEOUT);
        }
        thread::sleep(Duration::from_millis(20));
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_dry_run_prints_frame_and_exits() {
    let output = lumenctl(&["--dry-run"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        "10000064000000000000000000000000\
         00000000000000000000000000000000\
         00000000000000000000000000000000\
         0000000000000000000000ffffff0371"
    );
}

#[test]
fn test_dry_run_with_color_flags() {
    let output = lumenctl(&["--dry-run", "--red", "100", "--green", "0"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim().starts_with("1000640000"));
    assert!(stdout.trim().ends_with("ffffff0371"));
}

#[test]
fn test_help_exits() {
    let output = lumenctl(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().contains("--dry-run"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = lumenctl(&["--purple"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let output = lumenctl(&["--dry-run", "--config", "/nonexistent/lumen.toml"]);
    assert_eq!(output.status.code(), Some(1));
}
