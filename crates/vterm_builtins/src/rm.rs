//! `rm` builtin command - remove a file or directory tree
//!
//! `-r` is accepted for familiarity; directory targets are detected and
//! removed recursively either way.

use crate::common;
use vterm_core::{Builtin, Context, ExecutionResult, Notice, ShellError, ShellResult};
use vterm_hal::fs::{self, Removed};

/// The `rm` builtin command implementation
pub struct RmCommand;

impl Builtin for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn synopsis(&self) -> &'static str {
        "Remove a file or directory"
    }

    fn usage(&self) -> &'static str {
        "rm <FILENAME> or rm -r <DIRECTORY>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let target = match ctx.argline.strip_prefix("-r") {
            Some(rest) => rest.trim(),
            None => ctx.argline,
        };
        if target.is_empty() {
            return Err(ShellError::usage(format!(
                "Argument needed. Usage: {}",
                self.usage()
            )));
        }

        match fs::remove_file_or_tree(target) {
            Ok(Removed::File) => {
                ctx.console
                    .notify(Notice::Success, &format!("Removed file: {target}"));
                Ok(ExecutionResult::success())
            }
            Ok(Removed::Tree) => {
                ctx.console.notify(
                    Notice::Success,
                    &format!("Removed directory and its contents: {target}"),
                );
                Ok(ExecutionResult::success())
            }
            Err(err) => match err.io_kind() {
                Some(std::io::ErrorKind::NotFound) => Err(ShellError::not_found(format!(
                    "File or directory not found: {target}"
                ))),
                _ => Err(ShellError::new(
                    common::hal_kind(&err),
                    format!(
                        "Error removing file or directory: {}",
                        common::hal_message(&err)
                    ),
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

    fn invoke(argline: &str) -> (ShellResult<ExecutionResult>, ScriptedConsole) {
        let table = CommandTable::new();
        let mut console = ScriptedConsole::new();
        let result = {
            let mut ctx = Context {
                argline,
                console: &mut console,
                table: &table,
            };
            RmCommand.invoke(&mut ctx)
        };
        (result, console)
    }

    #[test]
    fn removes_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("gone.txt");
        std::fs::write(&file, "x").unwrap();
        let (result, console) = invoke(file.to_str().unwrap());
        result.unwrap();
        assert!(!file.exists());
        assert!(console.notices[0].1.starts_with("Removed file:"));
    }

    #[test]
    fn removes_a_tree_with_dash_r() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("tree");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("inner.txt"), "x").unwrap();
        let argline = format!("-r {}", sub.display());
        let (result, console) = invoke(&argline);
        result.unwrap();
        assert!(!sub.exists());
        assert!(console.notices[0]
            .1
            .starts_with("Removed directory and its contents:"));
    }

    #[test]
    fn directory_without_dash_r_is_still_removed() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("tree");
        std::fs::create_dir(&sub).unwrap();
        let (result, _) = invoke(sub.to_str().unwrap());
        result.unwrap();
        assert!(!sub.exists());
    }

    #[test]
    fn missing_target_is_reported_not_found() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("ghost");
        let (result, _) = invoke(gone.to_str().unwrap());
        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.starts_with("File or directory not found:"));
    }

    #[test]
    fn bare_dash_r_is_a_usage_error() {
        let (result, _) = invoke("-r");
        assert_eq!(result.unwrap_err().kind, ErrorKind::Usage);
    }
}
