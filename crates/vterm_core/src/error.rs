//! Error handling for the vterm core
//!
//! Every dispatch failure is recoverable: the loop reports one human-readable
//! line naming the offending input and re-prompts. The kinds below mirror
//! that taxonomy; none of them is fatal, and only the explicit `exit` verb
//! terminates the process.

use std::fmt;
use std::io;
use vterm_hal::HalError;

/// Result type for all core operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Error raised while resolving or executing one command line
#[derive(Debug, Clone)]
pub struct ShellError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Categories of recoverable dispatch failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing required argument
    Usage,
    /// Target file, directory, or verb absent
    NotFound,
    /// Target already exists on create
    Conflict,
    /// Spawn failure or abnormal exit of an external command
    ExternalProcess,
    /// Invalid regular expression
    Pattern,
    /// User-issued interrupt during an input read
    Interrupted,
    /// Other collaborator I/O failure
    Io,
}

impl ShellError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn pattern(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Pattern, message)
    }

    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Interrupted, message)
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ShellError {}

impl From<HalError> for ShellError {
    fn from(err: HalError) -> Self {
        let kind = match err.io_kind() {
            Some(io::ErrorKind::NotFound) => ErrorKind::NotFound,
            Some(io::ErrorKind::AlreadyExists) => ErrorKind::Conflict,
            Some(_) => ErrorKind::Io,
            None => ErrorKind::ExternalProcess,
        };
        Self::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hal_not_found_maps_to_not_found() {
        let hal = HalError::io_error(
            "read_file",
            Some("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let err = ShellError::from(hal);
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("missing.txt"));
    }

    #[test]
    fn hal_already_exists_maps_to_conflict() {
        let hal = HalError::io_error(
            "make_directory",
            Some("dir"),
            io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
        );
        assert_eq!(ShellError::from(hal).kind, ErrorKind::Conflict);
    }

    #[test]
    fn hal_process_maps_to_external_process() {
        let hal = HalError::process_error("badcmd", io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(ShellError::from(hal).kind, ErrorKind::ExternalProcess);
    }
}
