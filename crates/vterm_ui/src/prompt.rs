//! Prompt rendering
//!
//! `<current directory>: >> ` — directory in bold green, separator in
//! magenta. The caller queries the working directory fresh every iteration;
//! nothing here caches it.

use nu_ansi_term::Color;

/// Render the prompt for the given working directory.
pub fn render(cwd: &str, styled: bool) -> String {
    if styled {
        format!(
            "{}{}",
            Color::Green.bold().paint(cwd),
            Color::Magenta.paint(": >> ")
        )
    } else {
        format!("{cwd}: >> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prompt_names_the_directory() {
        assert_eq!(render("/home/me", false), "/home/me: >> ");
    }

    #[test]
    fn styled_prompt_keeps_the_directory_and_separator() {
        let prompt = render("/srv", true);
        assert!(prompt.contains("/srv"));
        assert!(prompt.contains(": >> "));
    }
}
