//! Sentiment processor entry point.
//!
//! Runs the batch loop until SIGINT/SIGTERM, finishing the in-flight
//! batch before exiting with success status.

use anyhow::Context;
use tokio::signal;
use tracing::info;

use sentiment_processor::cache::{CacheBackend, StatsCacheInvalidator};
use sentiment_processor::classifier::VaderClassifier;
use sentiment_processor::database::DatabaseConnection;
use sentiment_processor::logging::init_logging;
use sentiment_processor::{ProcessorConfig, SentimentProcessor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ProcessorConfig::from_env().context("invalid processor configuration")?;

    let db = DatabaseConnection::new(&config)
        .await
        .context("database connection failed")?;
    db.health_check()
        .await
        .context("database health check failed")?;

    // Redis being down is not fatal; invalidation degrades to a no-op.
    let cache = CacheBackend::connect(&config.redis_url()).await;
    let invalidator = StatsCacheInvalidator::new(cache);

    let processor = SentimentProcessor::new(
        db.pool().clone(),
        VaderClassifier::new(),
        invalidator,
        &config,
    );

    let shutdown = processor.shutdown_handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("interrupt received, finishing in-flight batch");
        shutdown.shutdown();
    });

    processor.run().await;

    db.close().await;
    info!("sentiment processor shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
