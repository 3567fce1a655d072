//! CLI module for coindash
//!
//! Uses clap for argument parsing and a structured command pattern: each
//! subcommand carries an Args struct and a Command struct with an
//! `execute` method.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{init_logging, LogMode, LoggingConfig};

use commands::dash::{DashArgs, DashCommand};
use commands::markets::{MarketsArgs, MarketsCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "coindash")]
#[command(version)]
#[command(about = "Terminal dashboard for cryptocurrency market data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive market dashboard
    Dash(DashArgs),

    /// Fetch market data once and print it as a table
    Markets(MarketsArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);
        data_paths.ensure_directories()?;

        // -v raises the default filter; an explicit RUST_LOG still wins
        if self.verbose > 0 && std::env::var_os("RUST_LOG").is_none() {
            let level = if self.verbose > 1 { "trace" } else { "debug" };
            std::env::set_var("RUST_LOG", level);
        }

        // The TUI owns the terminal, so its logs go to file only
        let log_mode = match self.command {
            Commands::Dash(_) => LogMode::FileOnly,
            _ => LogMode::ConsoleAndFile,
        };
        init_logging(LoggingConfig::new(log_mode, data_paths))?;

        match self.command {
            Commands::Dash(args) => DashCommand::new(args).execute().await,
            Commands::Markets(args) => MarketsCommand::new(args).execute().await,
            Commands::Version(args) => VersionCommand::new(args).execute().await,
        }
    }
}
