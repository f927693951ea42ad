//! derelict CLI entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use derelict::{logging, Config};

mod commands;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("DERELICT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DERELICT_BUILD_DATE"),
    ")"
);

/// Boot the failing terminals of a derelict ship
#[derive(Parser, Debug)]
#[command(name = "derelict")]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: local data dir)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Seed for jitter and corruption, for reproducible sessions
    #[arg(long, global = true, value_name = "SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Power up a terminal and use it
    Play {
        /// Terminal name from the config
        #[arg(default_value = "mother")]
        terminal: String,
    },
    /// Show integrity and degradation of the ship's terminals
    Status {
        /// Only show this terminal
        terminal: Option<String>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path
    Path,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_path) = cli.log_file.clone().or_else(logging::default_log_path) {
        logging::init_global(&log_path);
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
        },
        Commands::Status { terminal } => {
            let config = Config::load_from(&config_path)?;
            commands::status::handle(&config, terminal.as_deref(), cli.seed)
        }
        Commands::Play { terminal } => {
            let config = Config::load_from(&config_path)?;
            commands::play::handle(&config, &terminal, cli.seed)
        }
    }
}
