use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Composite readability scoring and commit gating for Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Gate staged Markdown files on the readability threshold
    Check(cmd::check::CheckArgs),
    /// Score Markdown files across the commit history
    History(cmd::history::HistoryArgs),
    /// Score a single document (file or stdin)
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => cmd::check::run(args),
        Commands::History(args) => cmd::history::run(args),
        Commands::Score(args) => cmd::score::run(args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(2);
        }
    }
}
