//! vterm core library
//!
//! The command resolution engine: tokenizing a raw input line, deciding
//! whether it is a reserved keyword, a pipeline of external commands, a
//! built-in verb, or unrecognized input, and producing ranked spelling
//! suggestions for the latter. Rendering, sound cues, and line editing live
//! behind the [`Console`] trait in the UI layer; OS work lives in vterm_hal.

pub use builtin::{Builtin, Context, ExecutionResult};
pub use console::{Console, Notice, ReadOutcome, ScriptedConsole};
pub use dispatch::{classify, split_pipeline, Classified, Dispatcher, LoopControl, Reserved};
pub use error::{ErrorKind, ShellError, ShellResult};
pub use table::{ArgSpec, CommandSpec, CommandTable};

pub mod builtin;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod suggest;
pub mod table;
