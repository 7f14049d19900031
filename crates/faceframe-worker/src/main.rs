//! Photo processing worker binary.
//!
//! Takes object keys as arguments, processes each photo from the
//! unprocessed bucket, and uploads the framed portrait to the processed
//! bucket. Queue consumption and reply posting live with the calling
//! orchestration layer.

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use faceframe_worker::{ProcessingContext, WorkerConfig, WorkerError};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting faceframe-worker");

    let config = WorkerConfig::from_env();
    info!("Worker config: {:?}", config);

    let ctx = match ProcessingContext::new(config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Failed to create processing context: {}", e);
            std::process::exit(1);
        }
    };

    let keys: Vec<String> = std::env::args().skip(1).collect();
    if keys.is_empty() {
        error!("No photo keys given; nothing to do");
        std::process::exit(1);
    }

    let mut failures = 0usize;
    for key in &keys {
        match ctx.process_photo(key).await {
            Ok(()) => info!(key = %key, "Done"),
            Err(e @ (WorkerError::MissingFace | WorkerError::ExplicitContent)) => {
                // Expected per-photo outcomes; the caller decides what to
                // tell the user.
                warn!(key = %key, "Skipped: {}", e);
            }
            Err(e) => {
                error!(key = %key, "Failed: {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        error!("{}/{} photos failed", failures, keys.len());
        std::process::exit(1);
    }
}
