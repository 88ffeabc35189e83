//! External command execution
//!
//! Stage strings from the dispatcher are opaque shell command lines, so they
//! are handed to the platform shell rather than tokenized here. Output is
//! always captured as text; the caller decides what to print.

use crate::error::{HalError, HalResult};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Build a std::process::Command that runs `command` through the platform shell.
pub fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Run one shell command to completion and capture its standard output.
///
/// When `input` is given the child's stdin is fed the full text and then
/// closed; otherwise stdin is inherited. A nonzero exit status is not an
/// error: whatever the process wrote to stdout is still returned. Only a
/// spawn or wait failure produces `Err`.
pub fn capture(command: &str, input: Option<&str>) -> HalResult<String> {
    let mut cmd = shell_command(command);
    cmd.stdout(Stdio::piped());
    if input.is_some() {
        cmd.stdin(Stdio::piped());
    }

    let mut child = cmd
        .spawn()
        .map_err(|e| HalError::process_error(command, e))?;

    if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
        // The downstream process may exit before reading everything; a broken
        // pipe here is normal shell behavior, not a failure of the chain.
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            debug!(command, error = %e, "stdin write cut short");
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|e| HalError::process_error(command, e))?;
    if !output.status.success() {
        debug!(command, status = ?output.status.code(), "stage exited abnormally");
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run one shell command and return its captured output, converting any
/// launch failure into diagnostic text instead of propagating it.
pub fn run_shell_command(command: &str) -> String {
    match capture(command, None) {
        Ok(output) => output,
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn capture_returns_stdout() {
        let out = capture("echo hello", None).unwrap();
        assert_eq!(out, "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn capture_feeds_stdin() {
        let out = capture("cat", Some("one\ntwo")).unwrap();
        assert_eq!(out, "one\ntwo");
    }

    #[cfg(unix)]
    #[test]
    fn abnormal_exit_still_yields_captured_output() {
        let out = capture("echo partial; exit 3", None).unwrap();
        assert_eq!(out, "partial\n");
    }

    #[cfg(unix)]
    #[test]
    fn run_shell_command_swallows_missing_commands() {
        // The shell spawns fine and reports the missing command itself; the
        // runner must come back with a plain string either way.
        let out = run_shell_command("definitely-not-a-command-on-this-box");
        assert_eq!(out, "");
    }
}
