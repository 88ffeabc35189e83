//! vterm terminal UI layer
//!
//! Implements the core's [`Console`](vterm_core::Console) seam on top of
//! rustyline and crossterm: colored prompt and notices, audible cues, the
//! boot banner, and the blocking read-eval loop. The core never touches the
//! terminal directly.

pub use config::UiConfig;
pub use console::TerminalConsole;
pub use error::UiError;
pub use repl::run;

pub mod banner;
pub mod config;
pub mod console;
pub mod error;
pub mod prompt;
pub mod repl;
