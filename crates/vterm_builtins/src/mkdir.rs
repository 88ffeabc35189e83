//! `mkdir` builtin command - create a directory
//!
//! Creates exactly one new directory. An existing target is a conflict, not
//! a silent success.

use crate::common;
use vterm_core::{Builtin, Context, ExecutionResult, Notice, ShellError, ShellResult};
use vterm_hal::fs;

/// The `mkdir` builtin command implementation
pub struct MkdirCommand;

impl Builtin for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn synopsis(&self) -> &'static str {
        "Create a new directory"
    }

    fn usage(&self) -> &'static str {
        "mkdir <DIRECTORY>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let dir = ctx.argline;
        match fs::make_directory(dir) {
            Ok(()) => {
                ctx.console
                    .notify(Notice::Success, &format!("Created directory: {dir}"));
                Ok(ExecutionResult::success())
            }
            Err(err) => match err.io_kind() {
                Some(std::io::ErrorKind::AlreadyExists) => Err(ShellError::conflict(format!(
                    "Directory already exists: {dir}"
                ))),
                _ => Err(ShellError::new(
                    common::hal_kind(&err),
                    format!("Error creating directory: {}", common::hal_message(&err)),
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vterm_core::{CommandTable, ErrorKind, ScriptedConsole};

    #[test]
    fn creates_directory_and_reports_success() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("made");
        let target = target.to_str().unwrap();
        let table = CommandTable::new();
        let mut console = ScriptedConsole::new();
        {
            let mut ctx = Context {
                argline: target,
                console: &mut console,
                table: &table,
            };
            MkdirCommand.invoke(&mut ctx).unwrap();
        }
        assert!(std::path::Path::new(target).is_dir());
        assert_eq!(console.notices[0].0, Notice::Success);
        assert_eq!(console.notices[0].1, format!("Created directory: {target}"));
    }

    #[test]
    fn existing_directory_is_a_conflict() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().to_str().unwrap();
        let table = CommandTable::new();
        let mut console = ScriptedConsole::new();
        let mut ctx = Context {
            argline: target,
            console: &mut console,
            table: &table,
        };
        let err = MkdirCommand.invoke(&mut ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, format!("Directory already exists: {target}"));
    }
}
