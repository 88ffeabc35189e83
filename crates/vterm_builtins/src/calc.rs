//! `python` builtin command - interactive expression evaluation
//!
//! Historically this verb executed arbitrary code behind a substring
//! denylist, which provided no security at all. It is now a nested
//! calculator mode: lines are collected behind a `... ` prompt until the
//! sentinel `end`, and each line is evaluated as a pure arithmetic
//! expression with no filesystem, process, or import access.

use tracing::debug;
use vterm_core::{Builtin, Context, ExecutionResult, Notice, ReadOutcome, ShellResult};

/// The `python` builtin command implementation
pub struct CalcCommand;

impl Builtin for CalcCommand {
    fn name(&self) -> &'static str {
        "python"
    }

    fn synopsis(&self) -> &'static str {
        "Evaluate arithmetic expressions interactively"
    }

    fn usage(&self) -> &'static str {
        "python"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let mut lines: Vec<String> = Vec::new();
        loop {
            match ctx.console.read_line("... ") {
                ReadOutcome::Line(line) => {
                    if line.trim().eq_ignore_ascii_case("end") {
                        break;
                    }
                    lines.push(line);
                }
                ReadOutcome::Eof | ReadOutcome::Interrupted => break,
            }
        }

        debug!(lines = lines.len(), "calculator mode collected input");
        for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            match exmex::eval_str::<f64>(line) {
                Ok(value) => ctx.console.print(&value.to_string()),
                Err(err) => ctx
                    .console
                    .notify(Notice::Error, &format!("Cannot evaluate '{line}': {err}")),
            }
        }
        Ok(ExecutionResult::success())
    }
}
