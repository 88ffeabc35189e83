//! Builtin command trait
//!
//! Every verb in the action table is a unit struct implementing [`Builtin`].
//! The dispatcher resolves the verb, checks the argument contract, and hands
//! the builtin the untokenized remainder of the line — filenames may contain
//! spaces, so builtins split their own arguments where they need to.

use crate::console::Console;
use crate::error::ShellResult;
use crate::table::CommandTable;

/// Invocation context for one builtin call.
pub struct Context<'a> {
    /// Remainder of the line after the verb, trimmed. Empty for verbs that
    /// take no argument.
    pub argline: &'a str,
    /// Interactive surface for output and nested input modes.
    pub console: &'a mut dyn Console,
    /// The command table, for help lookup and suggestion candidates.
    pub table: &'a CommandTable,
}

/// Result of one builtin invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
}

impl ExecutionResult {
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A built-in action implemented by this process, as opposed to a spawned
/// external program.
pub trait Builtin: Send + Sync {
    /// Canonical verb name, matching the command table entry.
    fn name(&self) -> &'static str;

    /// One-line summary.
    fn synopsis(&self) -> &'static str;

    /// Usage string printed on a missing required argument.
    fn usage(&self) -> &'static str;

    /// Execute the builtin. Errors are recoverable: the dispatcher reports
    /// them and the loop resumes.
    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult>;
}
