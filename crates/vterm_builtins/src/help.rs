//! `help` builtin command - command descriptions
//!
//! Bare `help` (or the `commands` alias) lists every verb; `help <COMMAND>`
//! prints the table's help text for one verb. `man` shares the same
//! rendering so the two are always in lockstep.

use vterm_core::{
    Builtin, CommandTable, Console, Context, ExecutionResult, ShellError, ShellResult,
};

/// The `help` builtin command implementation
pub struct HelpCommand;

impl Builtin for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn synopsis(&self) -> &'static str {
        "Provides help for available commands"
    }

    fn usage(&self) -> &'static str {
        "help <COMMAND>"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        if ctx.argline.is_empty() {
            list_commands(ctx.console, ctx.table);
            Ok(ExecutionResult::success())
        } else {
            describe(ctx.console, ctx.table, ctx.argline)?;
            Ok(ExecutionResult::success())
        }
    }
}

/// Print the overview of every verb in table order.
pub(crate) fn list_commands(console: &mut dyn Console, table: &CommandTable) {
    console.print("Available commands:");
    for spec in table.iter() {
        console.print(&format!("  - {}", spec.name));
    }
    console.print("\nUse 'help <COMMAND>' to receive help on a specific command.");
}

/// Print one verb's help text, resolving aliases. Unknown verbs are a
/// recoverable not-found report, never a crash.
pub(crate) fn describe(
    console: &mut dyn Console,
    table: &CommandTable,
    verb: &str,
) -> ShellResult<()> {
    match table.resolve(verb) {
        Some(spec) => {
            console.print(&format!("{}:", spec.name));
            console.print(spec.help);
            Ok(())
        }
        None => Err(ShellError::not_found(format!(
            "Help for {verb} not found. The command may not exist."
        ))),
    }
}
