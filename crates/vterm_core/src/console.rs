//! The console seam between the core and the UI layer
//!
//! The core never talks to the terminal directly. It reads lines and emits
//! classified notifications through this trait; the UI decides color, sound
//! cues, and line-editing behavior. Interrupts surface as a read outcome, not
//! as a panic or a process signal.

use std::collections::VecDeque;

/// Classification of a user-facing message, used by the UI to pick color and
/// feedback cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Success,
    Error,
}

/// Outcome of one interactive read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C during the read; reported and recovered, never propagated.
    Interrupted,
    /// Ctrl-D or closed input.
    Eof,
}

/// Interactive surface the dispatcher and builtins talk to.
pub trait Console {
    /// Block for one line of input, shown behind `prompt`.
    fn read_line(&mut self, prompt: &str) -> ReadOutcome;

    /// Plain output, one logical block (may contain embedded newlines).
    fn print(&mut self, text: &str);

    /// Classified output; the UI renders color and plays the matching cue.
    fn notify(&mut self, kind: Notice, message: &str);

    /// Clear the screen.
    fn clear_screen(&mut self);

    /// Re-render the warning banner (shown at boot and after `clear`).
    fn banner(&mut self);
}

/// Scripted console used across the workspace's test suites: input lines are
/// served from a queue and everything written is recorded.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub printed: Vec<String>,
    pub notices: Vec<(Notice, String)>,
    pub clears: usize,
    pub banners: usize,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue lines to be returned by successive `read_line` calls; once the
    /// queue drains, reads return `Eof`.
    pub fn with_inputs<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything printed and notified, joined for coarse assertions.
    pub fn transcript(&self) -> String {
        let mut out: Vec<String> = self.printed.clone();
        out.extend(self.notices.iter().map(|(_, m)| m.clone()));
        out.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> ReadOutcome {
        match self.inputs.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => ReadOutcome::Eof,
        }
    }

    fn print(&mut self, text: &str) {
        self.printed.push(text.to_string());
    }

    fn notify(&mut self, kind: Notice, message: &str) {
        self.notices.push((kind, message.to_string()));
    }

    fn clear_screen(&mut self) {
        self.clears += 1;
    }

    fn banner(&mut self) {
        self.banners += 1;
    }
}
