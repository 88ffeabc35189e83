//! Boot sequence and warning banner

use indicatif::{ProgressBar, ProgressStyle};
use nu_ansi_term::Color;
use rand::Rng;
use std::time::Duration;

/// Fake boot progress: a green bar stepped with small randomized delays.
pub fn boot_progress() {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::with_template("{msg} {bar:40.green} {percent:>3}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message("Booting...");

    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        std::thread::sleep(Duration::from_millis(rng.gen_range(1..=50)));
        bar.inc(1);
    }
    bar.finish_and_clear();
}

/// The development warning shown at boot and after `clear`.
pub fn warning_banner(styled: bool) {
    let warning = "Warning: This is a development environment, and there may be bugs.";
    let hint = "Type 'commands' to view available commands";
    if styled {
        println!("{}", Color::Red.bold().paint(warning));
        println!("{}\n", Color::LightGray.paint(hint));
    } else {
        println!("{warning}");
        println!("{hint}\n");
    }
}
