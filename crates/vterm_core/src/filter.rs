//! Line filter behind the `grep` verb
//!
//! Keeps the lines of a text block matching a regular expression anywhere
//! (unanchored), in original order. The text is split on `\n` and rejoined
//! the same way; zero matches yield an empty string, not an error.

use crate::error::{ShellError, ShellResult};
use regex::Regex;

/// Filter `text` to the lines matching `pattern`.
///
/// An invalid pattern is a recoverable [`ErrorKind::Pattern`] error naming
/// the pattern; no state changes.
///
/// [`ErrorKind::Pattern`]: crate::error::ErrorKind::Pattern
pub fn filter_lines(pattern: &str, text: &str) -> ShellResult<String> {
    let re = Regex::new(pattern)
        .map_err(|e| ShellError::pattern(format!("Invalid pattern '{pattern}': {e}")))?;
    let matching: Vec<&str> = text.split('\n').filter(|line| re.is_match(line)).collect();
    Ok(matching.join("\n"))
}
