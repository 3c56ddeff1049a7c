// ABOUTME: Server binary for the recipe API
// ABOUTME: Loads configuration, opens the database and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe API Server Binary
//!
//! Environment variables configure everything; `--http-port` and
//! `--database-url` override them.

use anyhow::Result;
use clap::Parser;
use recipe_api_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::info;

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "recipe-api-server")]
#[command(about = "Recipe API - chef-owned recipe records over HTTP")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/recipes.db`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }

    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    server::run(resources).await?;
    Ok(())
}
