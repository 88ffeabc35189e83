//! Error handling for the vterm HAL
//!
//! Structured error types for all HAL operations, carrying the operation
//! name and the offending path or command so callers can build one-line
//! user messages without re-deriving context.

use std::fmt;
use std::io;
use std::result;

/// Result type for HAL operations
pub type HalResult<T> = result::Result<T, HalError>;

/// Error types for HAL operations
#[derive(Debug)]
pub enum HalError {
    /// I/O operation failed
    Io(IoError),
    /// External process operation failed
    Process(ProcessError),
}

#[derive(Debug)]
pub struct IoError {
    pub operation: &'static str,
    pub path: Option<String>,
    pub kind: io::ErrorKind,
    pub message: String,
}

#[derive(Debug)]
pub struct ProcessError {
    pub command: String,
    pub message: String,
}

impl HalError {
    /// Build an I/O error from a failed std::io call.
    pub fn io_error(operation: &'static str, path: Option<&str>, err: io::Error) -> Self {
        HalError::Io(IoError {
            operation,
            path: path.map(str::to_string),
            kind: err.kind(),
            message: err.to_string(),
        })
    }

    /// Build a process error for a command that could not be spawned or waited on.
    pub fn process_error(command: &str, err: io::Error) -> Self {
        HalError::Process(ProcessError {
            command: command.to_string(),
            message: err.to_string(),
        })
    }

    /// The io::ErrorKind behind this error, when there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            HalError::Io(err) => Some(err.kind),
            HalError::Process(_) => None,
        }
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::Io(err) => match &err.path {
                Some(path) => write!(f, "{} failed for {}: {}", err.operation, path, err.message),
                None => write!(f, "{} failed: {}", err.operation, err.message),
            },
            HalError::Process(err) => {
                write!(f, "failed to run '{}': {}", err.command, err.message)
            }
        }
    }
}

impl std::error::Error for HalError {}
