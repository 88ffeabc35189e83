//! Terminal console
//!
//! The interactive implementation of the core's `Console` seam: rustyline
//! for line editing and history, crossterm for screen clearing, nu-ansi-term
//! for notice coloring, and a terminal bell as the audible feedback cue.
//! Color and cues are suppressed off-TTY and can be disabled in the config.

use crate::banner;
use crate::config::UiConfig;
use crate::error::UiError;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use is_terminal::IsTerminal;
use nu_ansi_term::Color;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use tracing::warn;
use vterm_core::{Console, Notice, ReadOutcome};

/// Interactive console over the real terminal.
pub struct TerminalConsole {
    editor: DefaultEditor,
    styled: bool,
    cues: bool,
}

impl TerminalConsole {
    pub fn new(config: &UiConfig) -> Result<Self, UiError> {
        let editor = DefaultEditor::new()?;
        let tty = std::io::stdout().is_terminal();
        Ok(Self {
            editor,
            styled: config.color && tty,
            cues: config.cues && tty,
        })
    }

    /// Whether output is being styled (TTY with color enabled).
    pub fn styled(&self) -> bool {
        self.styled
    }

    fn cue(&self) {
        if self.cues {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                ReadOutcome::Line(line)
            }
            Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
            Err(ReadlineError::Eof) => ReadOutcome::Eof,
            Err(err) => {
                warn!(error = %err, "line read failed");
                ReadOutcome::Eof
            }
        }
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }

    fn notify(&mut self, kind: Notice, message: &str) {
        let rendered = match kind {
            _ if !self.styled => message.to_string(),
            Notice::Info => message.to_string(),
            Notice::Success => Color::Green.paint(message).to_string(),
            Notice::Error => Color::Red.paint(message).to_string(),
        };
        println!("{rendered}");
        if matches!(kind, Notice::Success | Notice::Error) {
            self.cue();
        }
    }

    fn clear_screen(&mut self) {
        if let Err(err) = execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(error = %err, "screen clear failed");
        }
    }

    fn banner(&mut self) {
        banner::warning_banner(self.styled);
    }
}
