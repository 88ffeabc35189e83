//! `celebrate` builtin command
//!
//! Prints the celebration line as a success notice so the UI fires its
//! feedback cue.

use vterm_core::{Builtin, Context, ExecutionResult, Notice, ShellResult};

/// The `celebrate` builtin command implementation
pub struct CelebrateCommand;

impl Builtin for CelebrateCommand {
    fn name(&self) -> &'static str {
        "celebrate"
    }

    fn synopsis(&self) -> &'static str {
        "Celebrates"
    }

    fn usage(&self) -> &'static str {
        "celebrate"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.console.notify(Notice::Success, "yay!");
        Ok(ExecutionResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_core::{CommandTable, ScriptedConsole};

    #[test]
    fn fires_a_success_notice() {
        let table = CommandTable::new();
        let mut console = ScriptedConsole::new();
        {
            let mut ctx = Context {
                argline: "",
                console: &mut console,
                table: &table,
            };
            CelebrateCommand.invoke(&mut ctx).unwrap();
        }
        assert_eq!(console.notices, vec![(Notice::Success, "yay!".to_string())]);
    }
}
