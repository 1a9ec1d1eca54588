//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --json, --silent, --color, --verbose) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Skeleton - a tiny templating engine
#[derive(Parser, Debug)]
#[command(name = "skeleton")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Includes look like @require('partials.header').")]
pub struct Cli {
    /// Config file (default: ./skeleton.toml, then the user config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit events as NDJSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress event output
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v adds timestamps)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the root template once
    Build {
        /// Root template identifier (overrides config)
        #[arg(short, long)]
        template: Option<String>,

        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile, then recompile whenever a watched file changes
    Watch {
        /// Root template identifier (overrides config)
        #[arg(short, long)]
        template: Option<String>,

        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Poll interval in milliseconds (overrides config)
        #[arg(long, value_name = "MS")]
        interval: Option<u64>,
    },
}
