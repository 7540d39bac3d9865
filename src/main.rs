mod commands;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colgit_core::paths::Paths;
use colgit_core::session::{Outcome, Session};
use commands::ActionCommand;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colgit")]
#[command(about = "Settings, per-date notes, tasks and commit/branch markers")]
#[command(version)]
struct Cli {
    /// Log filesystem activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Action(ActionCommand),
    /// Show a theme palette (defaults to the configured theme)
    Theme { name: Option<String> },
    /// Start an interactive session; tasks live for its duration
    Shell,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = Paths::discover()?;
    let mut session = Session::open(paths.clone())
        .with_context(|| format!("Failed to open ColGit data in {}", paths.home().display()))?;

    match cli.command {
        Commands::Action(command) => {
            let json = command.wants_json();
            let outcome = session.dispatch(command.into_action(commands::read_note_body)?)?;

            match (&outcome, json) {
                (Outcome::Config(state), true) => {
                    println!("{}", serde_json::to_string_pretty(state)?)
                }
                _ => println!("{}", render::render_outcome(&outcome, session.config())),
            }
            Ok(())
        }
        Commands::Theme { name } => commands::theme::run(session.config(), name.as_deref()),
        Commands::Shell => commands::shell::run(&mut session),
    }
}
