//! `edit` builtin command - line-mode file editing
//!
//! Also reachable as `nano` and `vim`. This is a nested mode of the single
//! read loop: lines are collected until end-of-input (Ctrl-D) and then
//! written back in one shot. An interrupt cancels without touching the file.

use crate::common;
use tracing::debug;
use vterm_core::{
    Builtin, Context, ExecutionResult, Notice, ReadOutcome, ShellError, ShellResult,
};
use vterm_hal::fs;

/// The `edit` builtin command implementation
pub struct EditCommand;

impl Builtin for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn synopsis(&self) -> &'static str {
        "Edit or create a text file"
    }

    fn usage(&self) -> &'static str {
        "edit OR nano OR vim <FILENAME>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let filename = ctx.argline;
        ctx.console
            .print("Enter your text. Press Ctrl+D to save and exit.");

        let mut lines: Vec<String> = Vec::new();
        loop {
            match ctx.console.read_line("") {
                ReadOutcome::Line(line) => lines.push(line),
                ReadOutcome::Eof => break,
                ReadOutcome::Interrupted => {
                    return Err(ShellError::interrupted("Edit cancelled."));
                }
            }
        }

        debug!(lines = lines.len(), filename, "edit mode collected input");
        fs::write_file(filename, &lines.join("\n")).map_err(|err| {
            ShellError::new(
                common::hal_kind(&err),
                format!("Error editing file: {}", common::hal_message(&err)),
            )
        })?;
        ctx.console.notify(
            Notice::Success,
            &format!("File '{filename}' saved successfully."),
        );
        Ok(ExecutionResult::success())
    }
}
