//! `view` builtin command - print a text file
//!
//! Also reachable as `cat`. Prints a header naming the file, then the
//! content verbatim.

use crate::common;
use vterm_core::{Builtin, Context, ExecutionResult, ShellError, ShellResult};
use vterm_hal::fs;

/// The `view` builtin command implementation
pub struct ViewCommand;

impl Builtin for ViewCommand {
    fn name(&self) -> &'static str {
        "view"
    }

    fn synopsis(&self) -> &'static str {
        "View the content of a text file"
    }

    fn usage(&self) -> &'static str {
        "view OR cat <FILENAME>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let filename = ctx.argline;
        let content = fs::read_file(filename).map_err(|err| match err.io_kind() {
            Some(std::io::ErrorKind::NotFound) => {
                ShellError::not_found(format!("File '{filename}' not found."))
            }
            _ => ShellError::new(
                common::hal_kind(&err),
                format!("Error viewing file: {}", common::hal_message(&err)),
            ),
        })?;
        ctx.console.print(&format!("Content of '{filename}':\n"));
        ctx.console.print(&content);
        Ok(ExecutionResult::success())
    }
}
