//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use zdx_reply::ButtonTagOptions;
use zdx_reply::config;

mod commands;

#[derive(Parser)]
#[command(name = "zdx-reply")]
#[command(version)]
#[command(about = "Parse and clean inline button tags in agent replies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use (default: $ZDX_HOME/config.toml)
    #[arg(long, global = true, value_name = "FILE", env = "ZDX_REPLY_CONFIG")]
    config: Option<PathBuf>,
}

/// Where to read reply text from.
#[derive(clap::Args, Debug, Clone, Default)]
struct InputArgs {
    /// Read from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Extract a [[buttons]] block and print the result as JSON
    Extract {
        #[command(flatten)]
        input: InputArgs,

        /// Print a Telegram sendMessage body for this chat instead
        #[arg(long, value_name = "CHAT_ID")]
        telegram_chat_id: Option<i64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Strip leftover button syntax from a partial chunk
    Strip {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Finalize streamed reply chunks (JSON array of payloads)
    Finalize {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_override = cli.config;
    let config_path = || -> Result<PathBuf> {
        match &config_override {
            Some(path) => Ok(path.clone()),
            None => config::paths::config_path(),
        }
    };
    let load_options = || -> Result<ButtonTagOptions> {
        let config = match &config_override {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using config override");
                config::Config::load_from(path)
            }
            None => config::Config::load(),
        }
        .context("load config")?;
        Ok(config.button_tag_options())
    };

    match cli.command {
        Commands::Extract {
            input,
            telegram_chat_id,
            pretty,
        } => commands::extract::run(
            input.input.as_deref(),
            &load_options()?,
            telegram_chat_id,
            pretty,
        ),
        Commands::Strip { input } => commands::strip::run(input.input.as_deref()),
        Commands::Finalize { input, pretty } => {
            commands::finalize::run(input.input.as_deref(), &load_options()?, pretty)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path()?);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path()?),
        },
    }
}
