//! Queuewise Daemon - Main Entry Point
//! Hosts the queue store and serves it over JSON-RPC

mod settings;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::{DaemonConfig, LogFormat};
use queuewise_api_rpc::{server::RpcServerConfig, RpcServer};
use queuewise_core::application::{seed_state, QueueStore, SeedOptions, StorePolicy};
use queuewise_core::domain::DEFAULT_CATALOG;
use queuewise_core::port::{
    IdProvider, RandomSource, SeededRandom, SystemTimeProvider, ThreadRandom, TimeProvider,
    UuidProvider,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::load()?;

    // 2. Initialize logging
    init_logging(config.log_format)?;

    info!("Queuewise daemon v{} starting...", VERSION);
    info!(
        strict = config.strict,
        seed = ?config.seed,
        mock_tickets = config.mock_tickets,
        "Configuration loaded"
    );

    // 3. Setup dependencies (DI wiring)
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let id_provider: Arc<dyn IdProvider> = Arc::new(UuidProvider);
    let random: Arc<dyn RandomSource> = match config.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };

    // 4. Seed the session
    let initial = seed_state(
        DEFAULT_CATALOG,
        SeedOptions {
            mock_tickets: config.mock_tickets,
        },
        id_provider.as_ref(),
        time_provider.as_ref(),
        random.as_ref(),
    );
    info!(services = initial.queues.len(), "Service queues seeded");

    let store = Arc::new(QueueStore::new(
        initial,
        StorePolicy {
            strict: config.strict,
            max_arrival_minutes: config.max_arrival_minutes,
        },
        id_provider,
        time_provider,
        random,
    ));

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, store)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    info!("Shutdown signal received. Exiting gracefully...");

    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("queuewise=info"))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
