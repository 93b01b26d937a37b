//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use hsa::output::OutputMode;

/// hsa - Scaffold and launch the analytics take-home demo
#[derive(Parser, Debug)]
#[command(
    name = "hsa",
    version,
    about = "Scaffold and launch the Help Scout analytics demo",
    long_about = "Bootstrap tooling for the analytics take-home demo.\n\n\
                  `setup` creates the project skeleton, virtual environment\n\
                  and initial commit. `run` checks prerequisites and starts\n\
                  the web app."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold the demo project in the current directory
    Setup {
        /// Skip the confirmation prompt when the project directory exists
        #[arg(short, long)]
        yes: bool,
    },

    /// Check prerequisites and start the web app
    Run,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Setup { yes }) => commands::setup(yes, output_mode),
        Some(Command::Run) => commands::run(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": hsa::VERSION
                    })
                );
            } else {
                println!("hsa v{}", hsa::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": hsa::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("hsa v{}", hsa::VERSION);
                println!("Use --help for usage");
            }
            Ok(())
        },
    }
}
