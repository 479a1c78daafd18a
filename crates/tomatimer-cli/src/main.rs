use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod sound;
mod ui;

#[derive(Parser)]
#[command(name = "tomatimer", version, about = "Pomodoro focus timer for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive timer (default)
    Run(commands::run::RunArgs),
    /// List the timer modes and their durations
    Modes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    logging::init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        None => commands::run::run(commands::run::RunArgs::default()),
        Some(Commands::Run(args)) => commands::run::run(args),
        Some(Commands::Modes { json }) => commands::modes::run(json),
        Some(Commands::Config { action }) => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
