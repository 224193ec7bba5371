// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mealmaker",
    about = "Meal Maker voice skill backend",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true, env = "MEALMAKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the skill endpoint over HTTP
    Serve {
        /// `host:port` to bind, overriding `http.bind`
        #[arg(long)]
        bind: Option<String>,
    },
    /// Dispatch one request envelope and print the response envelope
    Invoke {
        /// JSON file holding the request envelope (`-` reads stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the merged configuration as YAML
    ShowConfig,
    /// Print shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
