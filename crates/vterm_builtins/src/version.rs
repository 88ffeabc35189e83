//! `version` builtin command - version banner

use nu_ansi_term::Color;
use vterm_core::{Builtin, Context, ExecutionResult, ShellResult};

/// The `version` builtin command implementation
pub struct VersionCommand;

impl VersionCommand {
    /// The plain banner text, without styling.
    pub fn banner_text() -> String {
        format!(
            "vterm {} | {}",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        )
    }
}

impl Builtin for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn synopsis(&self) -> &'static str {
        "Prints the terminal version"
    }

    fn usage(&self) -> &'static str {
        "version"
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.console
            .print(&Color::Green.paint(Self::banner_text()).to_string());
        Ok(ExecutionResult::success())
    }
}
