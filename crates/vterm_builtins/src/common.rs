//! Shared helpers for the built-in commands

use vterm_core::ErrorKind;
use vterm_hal::HalError;

/// The underlying OS error text, without the HAL's operation prefix; used to
/// build the user-facing message shapes.
pub fn hal_message(err: &HalError) -> &str {
    match err {
        HalError::Io(io) => &io.message,
        HalError::Process(proc) => &proc.message,
    }
}

/// Map a HAL failure to the core error kind the dispatcher reports.
pub fn hal_kind(err: &HalError) -> ErrorKind {
    match err.io_kind() {
        Some(std::io::ErrorKind::NotFound) => ErrorKind::NotFound,
        Some(std::io::ErrorKind::AlreadyExists) => ErrorKind::Conflict,
        Some(_) => ErrorKind::Io,
        None => ErrorKind::ExternalProcess,
    }
}
