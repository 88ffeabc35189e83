//! `touch` builtin command - create an empty file
//!
//! Also reachable as `create`. An existing file is truncated, matching the
//! open-for-write behavior this verb has always had.

use crate::common;
use vterm_core::{Builtin, Context, ExecutionResult, Notice, ShellError, ShellResult};
use vterm_hal::fs;

/// The `touch` builtin command implementation
pub struct TouchCommand;

impl Builtin for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn synopsis(&self) -> &'static str {
        "Create an empty file"
    }

    fn usage(&self) -> &'static str {
        "create OR touch <FILENAME>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let filename = ctx.argline;
        fs::create_empty_file(filename).map_err(|err| {
            ShellError::new(
                common::hal_kind(&err),
                format!("Error creating file: {}", common::hal_message(&err)),
            )
        })?;
        ctx.console
            .notify(Notice::Success, &format!("Created empty file: {filename}"));
        Ok(ExecutionResult::success())
    }
}
