//! `ls` builtin command - list the current directory
//!
//! One entry name per line, in directory order, always against the live
//! working directory.

use vterm_core::{Builtin, Context, ExecutionResult, ShellResult};
use vterm_hal::fs;

/// The `ls` builtin command implementation
pub struct LsCommand;

impl Builtin for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn synopsis(&self) -> &'static str {
        "List files and directories in the current directory"
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        for name in fs::list_directory()? {
            ctx.console.print(&name);
        }
        Ok(ExecutionResult::success())
    }
}
