// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::app::config::AppConfig;
use crate::logic::api::ApiClient;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("upai_desk=info")),
        )
        .init();

    let config = AppConfig::load()?;
    tracing::info!(base_url = %config.base_url, "starting upai-desk");
    let api = ApiClient::new(&config).context("failed to build HTTP client")?;

    app::run(api).map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
