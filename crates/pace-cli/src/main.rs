//! pace CLI application
//!
//! Command-line interface and MCP server for time-boxed learning plans.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, PaceMcpServer};
use pace_core::{Config, PaceBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        database_file,
        plans_dir,
        no_color,
        command,
    } = Args::parse();

    let config = Config::load(config.as_deref()).context("Failed to load configuration")?;

    let pace = PaceBuilder::new()
        .with_config(config)
        .with_database_path(database_file)
        .with_plans_dir(plans_dir)
        .build()
        .await
        .context("Failed to initialize pace")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("pace started");

    match command {
        Some(Plan { command }) => Cli::new(pace, renderer).handle_plan_command(command).await,
        Some(Session { command }) => {
            Cli::new(pace, renderer)
                .handle_session_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting pace MCP server");
            run_stdio_server(PaceMcpServer::new(pace))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(pace, renderer).overview().await,
    }
}
