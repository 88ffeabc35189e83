use clap::Parser;
use vterm_core::{CommandTable, Dispatcher};
use vterm_ui::{TerminalConsole, UiConfig};

/// vterm command-line interface.
#[derive(Parser, Debug)]
#[command(author, version, about = "vterm interactive terminal", long_about = None)]
struct Cli {
    /// Command line to dispatch instead of launching the interactive shell.
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// Skip the boot animation and warning banner.
    #[arg(long)]
    no_banner: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dispatcher = Dispatcher::new(CommandTable::new()).with_builtins(vterm_builtins::all());
    let config = UiConfig::load();
    let mut console = TerminalConsole::new(&config)?;

    match cli.command {
        Some(line) => {
            dispatcher.dispatch(&line, &mut console);
        }
        None => {
            let show_banner = config.banner && !cli.no_banner;
            vterm_ui::run(&dispatcher, &mut console, show_banner);
        }
    }

    Ok(())
}
