//! `cd` builtin command - change directory
//!
//! Changes the process-wide working directory. The new directory is visible
//! on the very next prompt because the loop re-queries the OS each iteration
//! rather than caching a path.

use vterm_core::{Builtin, Context, ExecutionResult, ShellError, ShellResult};
use vterm_hal::fs;

/// The `cd` builtin command implementation
pub struct CdCommand;

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn synopsis(&self) -> &'static str {
        "Change the current working directory"
    }

    fn usage(&self) -> &'static str {
        "cd <DIRECTORY>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let target = ctx.argline;
        if let Err(err) = fs::change_directory(target) {
            return Err(match err.io_kind() {
                Some(std::io::ErrorKind::NotFound) => {
                    ShellError::not_found(format!("Directory not found: {target}"))
                }
                _ => err.into(),
            });
        }
        Ok(ExecutionResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_core::{CommandTable, ErrorKind, ScriptedConsole};

    #[test]
    fn missing_directory_is_reported_not_found() {
        let table = CommandTable::new();
        let mut console = ScriptedConsole::new();
        let mut ctx = Context {
            argline: "/definitely/not/a/directory",
            console: &mut console,
            table: &table,
        };
        let err = CdCommand.invoke(&mut ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(
            err.message,
            "Directory not found: /definitely/not/a/directory"
        );
    }
}
