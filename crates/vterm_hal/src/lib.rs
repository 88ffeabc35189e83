//! vterm hardware/OS abstraction layer
//!
//! This crate owns every interaction with the operating system: spawning
//! external processes, the store-and-forward pipeline executor, and the
//! filesystem actions behind the built-in verbs. The shell core stays
//! platform-agnostic and calls through here.

pub use error::{HalError, HalResult};

pub mod command;
pub mod error;
pub mod fs;
pub mod pipeline;
