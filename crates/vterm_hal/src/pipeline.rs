//! Store-and-forward pipeline executor
//!
//! Each stage runs to completion and its whole captured stdout is buffered
//! before the next stage starts, with the buffer written to that stage's
//! stdin. This is intentionally not a live OS pipe: there is no streaming
//! overlap between stages, and a hung stage blocks the chain.

use crate::command;
use tracing::warn;

/// Run an ordered chain of shell command strings, feeding each stage's
/// captured output to the next stage's stdin.
///
/// A stage that fails to launch contributes empty output and the chain keeps
/// going; a stage that exits abnormally contributes whatever it wrote. The
/// return value is the final stage's captured output, or diagnostic text if
/// the final stage itself could not be run. Callers print it verbatim.
pub fn run_pipeline(stages: &[String]) -> String {
    let mut buffered = String::new();
    let last = stages.len().saturating_sub(1);

    for (index, stage) in stages.iter().enumerate() {
        let input = if index == 0 { None } else { Some(buffered.as_str()) };
        match command::capture(stage, input) {
            Ok(output) => buffered = output,
            Err(err) => {
                warn!(stage = %stage, error = %err, "pipeline stage failed");
                if index == last {
                    return err.to_string();
                }
                buffered = String::new();
            }
        }
    }

    buffered
}
