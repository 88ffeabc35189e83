//! `grep` builtin command - filter interactively supplied text
//!
//! Unlike a pipeline stage, this verb does not consume piped output: it asks
//! for the text to filter as a second interactive line, then keeps the lines
//! matching the pattern anywhere.

use vterm_core::filter::filter_lines;
use vterm_core::{Builtin, Context, ExecutionResult, ReadOutcome, ShellError, ShellResult};

/// The `grep` builtin command implementation
pub struct GrepCommand;

impl Builtin for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn synopsis(&self) -> &'static str {
        "Filter lines of the provided text by a regular expression"
    }

    fn usage(&self) -> &'static str {
        "grep <PATTERN>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let pattern = ctx.argline;
        let text = match ctx.console.read_line("Enter the output to grep: ") {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Eof => String::new(),
            ReadOutcome::Interrupted => {
                return Err(ShellError::interrupted("Interrupted."));
            }
        };

        let matching = filter_lines(pattern, &text)?;
        ctx.console.print(&matching);
        Ok(ExecutionResult::success())
    }
}
