//! UI-layer errors

use thiserror::Error;

/// Failures raised while setting up or driving the terminal surface.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("line editor initialization failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}
