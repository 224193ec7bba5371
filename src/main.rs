// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod cli;

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use mealmaker_config::Config;
use mealmaker_skill::{HttpListServiceFactory, RequestEnvelope, Skill};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        cli::print_completions(*shell);
        return Ok(());
    }

    let mut config = mealmaker_config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::ShowConfig => {
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.http.bind = bind;
            }
            let skill = Arc::new(build_skill(&config)?);
            info!(handlers = ?skill.handler_names(), "skill ready");
            mealmaker_skill::server::serve(&config.http, skill).await
        }
        Commands::Invoke { file } => {
            let bytes = read_input(&file)?;
            let envelope = RequestEnvelope::from_json(&bytes)?;
            let skill = build_skill(&config)?;
            let reply = skill.dispatch(&envelope).await;
            println!("{}", serde_json::to_string_pretty(&reply)?);
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn build_skill(config: &Config) -> anyhow::Result<Skill> {
    let lists = HttpListServiceFactory::from_config(&config.lists)
        .context("building list API client")?;
    Ok(Skill::new(config.skill.clone(), Arc::new(lists)))
}

fn read_input(path: &std::path::Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading request envelope from stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
