//! Skeleton CLI - a tiny templating engine
//!
//! Usage: skeleton [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build   Compile the root template once
//!   watch   Compile, then recompile whenever a watched file changes

mod commands;

use anyhow::Result;
use clap::Parser;

use skeleton::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Build { template, output } => {
            let written = commands::build::cmd_build(&cli, template.clone(), output.clone())?;
            if !written {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Watch {
            template,
            output,
            interval,
        } => commands::watch::cmd_watch(&cli, template.clone(), output.clone(), *interval),
    }
}
