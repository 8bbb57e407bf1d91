// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use anyhow::{Context, Result};
use clap::Parser;
use genz_dashboard::{http::build_router, AppState, ServerConfig};
use tally::{Dashboard, DatasetLoader};
use tracing::{error, info};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
    let config = ServerConfig::parse();
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(usize::from(config.threads))
        .enable_all()
        .build()
        .context("building tokio runtime")?
        .block_on(run_server(config))
}

async fn run_server(config: ServerConfig) -> Result<()> {
    let loader = DatasetLoader::default();
    let table = loader.fetch().await.inspect_err(|e| {
        error!(category = e.category(), "{}", e.user_message());
    })?;
    let dashboard = Dashboard::build(&table).inspect_err(|e| {
        error!(category = e.category(), "{}", e.user_message());
    })?;
    let app = build_router(AppState::new(dashboard));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(threads = config.threads, "Dashboard server listening");
    for url in config.reachable_urls() {
        info!("Available at {url}");
    }
    info!("Press CTRL+C to stop the server");
    tokio::select! {
        served = axum::serve(listener, app) => served.context("serving dashboard")?,
        _ = tokio::signal::ctrl_c() => info!("Shutting down"),
    }
    Ok(())
}
