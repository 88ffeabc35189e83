//! The blocking read-eval loop
//!
//! Single-threaded: query the working directory fresh, render the prompt,
//! read one line, dispatch, repeat. An interrupt during the read is reported
//! and the loop resumes; end-of-input shuts down cleanly. Only the `exit`
//! verb (or EOF) leaves the loop.

use crate::console::TerminalConsole;
use crate::{banner, prompt};
use vterm_core::{Console, Dispatcher, LoopControl, ReadOutcome};

/// Drive the interactive session until `exit` or end-of-input.
pub fn run(dispatcher: &Dispatcher, console: &mut TerminalConsole, show_banner: bool) {
    if show_banner {
        banner::boot_progress();
        console.clear_screen();
        console.banner();
    }

    loop {
        // The working directory is process-global OS state; a `cd` from the
        // previous iteration must be visible here, so never cache it.
        let cwd = current_dir_display();
        let rendered = prompt::render(&cwd, console.styled());

        match console.read_line(&rendered) {
            ReadOutcome::Line(line) => {
                if dispatcher.dispatch(&line, console) == LoopControl::Exit {
                    break;
                }
            }
            ReadOutcome::Interrupted => {
                console.print("Use 'exit' to exit the terminal.");
            }
            ReadOutcome::Eof => {
                console.print("Shutting Down...");
                break;
            }
        }
    }
}

fn current_dir_display() -> String {
    std::env::current_dir()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| String::from("?"))
}
