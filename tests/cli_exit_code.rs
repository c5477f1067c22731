//! Tests for the binary's exit status and diagnostics.

mod common;

use common::{missing_program, temp_config};
use std::process::Command;

fn wtd_cmd(config: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wtd"));
    cmd.env("WTD_CONFIG", config).env_remove("WTD_LOG");
    cmd
}

fn config_for_missing_program(echo: bool) -> (tempfile::TempDir, std::path::PathBuf, String) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let program = missing_program(dir.path());
    let content = format!(
        "[launcher]\napp_path = '{}'\necho_command_line = {}\n",
        program.display(),
        echo
    );
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (dir, config_path, program.display().to_string())
}

#[test]
fn test_spawn_failure_exits_with_error_line() {
    let (_dir, config, _program) = config_for_missing_program(false);

    let output = wtd_cmd(&config)
        .arg("nt")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Cannot create process"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_echo_prints_command_line_before_spawn() {
    let (_dir, config, program) = config_for_missing_program(true);

    let output = wtd_cmd(&config)
        .args(["--title", "two words", "-d", "sub"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!("\"{}\" --title \"two words\" -d \"", program)));
    assert!(stdout.trim_end().ends_with("sub\""), "stdout: {}", stdout);
}

#[test]
fn test_invalid_config_exits_with_one() {
    let (_dir, config) = temp_config("[launcher]\napplication = \"\"\n");

    let output = wtd_cmd(&config)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"), "stderr: {}", stderr);
}

/// Config whose terminal is `/bin/sh`, so a test can see what it was handed.
#[cfg(target_os = "linux")]
fn config_for_shell(dir: &std::path::Path) -> std::path::PathBuf {
    let config_path = dir.join("config.toml");
    std::fs::write(
        &config_path,
        "[launcher]\napp_path = '/bin/sh'\necho_command_line = false\n",
    )
    .expect("Failed to write config");
    config_path
}

/// The terminal runs detached, so wait for it to write its output file.
#[cfg(target_os = "linux")]
fn wait_for_file(path: &std::path::Path) -> Vec<u8> {
    for _ in 0..100 {
        if let Ok(bytes) = std::fs::read(path) {
            if !bytes.is_empty() {
                return bytes;
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
    panic!("{} was never written", path.display());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_unicode_argument_is_forwarded() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = config_for_shell(dir.path());
    let seen = dir.path().join("seen");

    let status = wtd_cmd(&config)
        .arg("-c")
        .arg(format!("printf %s \"$1\" > '{}'", seen.display()))
        .arg("sh")
        .arg(OsStr::from_bytes(b"caf\xe9"))
        .status()
        .expect("Failed to execute command");

    assert_eq!(status.code(), Some(0));
    assert_eq!(wait_for_file(&seen), b"caf\xe9");
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_unicode_cwd_is_passed_as_directory() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = config_for_shell(dir.path());
    let seen = dir.path().join("seen");
    let cwd = dir.path().join(OsStr::from_bytes(b"caf\xe9"));
    std::fs::create_dir(&cwd).expect("Failed to create directory");

    // The launcher appends `-d <cwd>`, which the script sees as `$1 $2`.
    let status = wtd_cmd(&config)
        .current_dir(&cwd)
        .arg("-c")
        .arg(format!("printf %s \"$2\" > '{}'", seen.display()))
        .arg("sh")
        .status()
        .expect("Failed to execute command");

    assert_eq!(status.code(), Some(0));
    let cwd = std::fs::canonicalize(&cwd).expect("Failed to canonicalize directory");
    assert_eq!(wait_for_file(&seen), cwd.as_os_str().as_bytes());
}

#[cfg(target_os = "linux")]
#[test]
fn test_terminal_does_not_write_to_launcher_console() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = config_for_shell(dir.path());
    let seen = dir.path().join("seen");

    let output = wtd_cmd(&config)
        .arg("-c")
        .arg(format!(
            "echo out; echo err >&2; printf done > '{}'",
            seen.display()
        ))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(wait_for_file(&seen), b"done");
    assert!(output.stdout.is_empty(), "stdout: {:?}", output.stdout);
    assert!(output.stderr.is_empty(), "stderr: {:?}", output.stderr);
}
