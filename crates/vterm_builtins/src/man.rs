//! `man` builtin command - one verb's description
//!
//! Shares the help renderer, so `man v` and `help v` always print the same
//! text for every table verb.

use crate::help;
use vterm_core::{Builtin, Context, ExecutionResult, ShellResult};

/// The `man` builtin command implementation
pub struct ManCommand;

impl Builtin for ManCommand {
    fn name(&self) -> &'static str {
        "man"
    }

    fn synopsis(&self) -> &'static str {
        "View descriptions of available commands"
    }

    fn usage(&self) -> &'static str {
        "man <COMMAND>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        help::describe(ctx.console, ctx.table, ctx.argline)?;
        Ok(ExecutionResult::success())
    }
}
