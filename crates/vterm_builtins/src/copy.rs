//! `copy` builtin command - recursive directory copy
//!
//! Copies a whole directory tree. The destination must not exist yet.

use crate::common;
use vterm_core::{Builtin, Context, ExecutionResult, Notice, ShellError, ShellResult};
use vterm_hal::fs;

/// The `copy` builtin command implementation
pub struct CopyCommand;

impl Builtin for CopyCommand {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn synopsis(&self) -> &'static str {
        "Copy a directory from source to destination"
    }

    fn usage(&self) -> &'static str {
        "copy <SOURCE> <DESTINATION>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let (source, destination) = match ctx.argline.split_once(char::is_whitespace) {
            Some((src, rest)) if !rest.trim().is_empty() => (src, rest.trim()),
            _ => {
                return Err(ShellError::usage(format!(
                    "Argument needed. Usage: {}",
                    self.usage()
                )))
            }
        };

        fs::copy_tree(source, destination).map_err(|err| {
            ShellError::new(
                common::hal_kind(&err),
                format!("Error copying directory: {}", common::hal_message(&err)),
            )
        })?;
        ctx.console.notify(
            Notice::Success,
            &format!("Directory copied from {source} to {destination}"),
        );
        Ok(ExecutionResult::success())
    }
}
