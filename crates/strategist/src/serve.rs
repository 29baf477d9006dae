// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `strategist serve` command implementation.
//!
//! Opens SQLite storage (running migrations), wires the optional Claude
//! gateway, and serves the REST API until shutdown.

use std::sync::Arc;

use strategist_anthropic::ClaudeStrategist;
use strategist_config::StrategistConfig;
use strategist_core::{AiGateway, StrategistError};
use strategist_gateway::{start_server, AppState, ServerConfig};
use strategist_storage::Database;
use tracing::{info, warn};

/// Runs the `strategist serve` command.
pub async fn run_serve(config: StrategistConfig) -> Result<(), StrategistError> {
    init_tracing(&config.app.log_level);

    info!("starting strategist serve");

    let db = Database::from_config(&config.storage).await?;
    info!(path = config.storage.database_path.as_str(), "storage ready");

    // The AI gateway is optional: without a key every CRUD route still
    // works and only /api/ai/* reports the gateway as unconfigured.
    let ai: Option<Arc<dyn AiGateway>> = match ClaudeStrategist::from_config(&config.anthropic) {
        Ok(gateway) => Some(Arc::new(gateway)),
        Err(e) => {
            warn!(error = %e, "AI gateway disabled");
            None
        }
    };

    let state = AppState {
        db: Arc::new(db),
        ai,
        recent_limit: config.app.dashboard_recent_limit,
        start_time: std::time::Instant::now(),
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    info!("strategist serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("strategist={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
