//! Binary entrypoint for the UCA API server.
use std::sync::Arc;

use uca_api::{run, AppState};
use uca_core::AnalyzerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match AnalyzerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "refusing to start without an analysis endpoint");
            std::process::exit(1);
        }
    };

    let state = match AppState::new(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(error = %e, "metrics registry failed");
            std::process::exit(1);
        }
    };

    // Default listen address can be overridden with UCA_ADDR
    let addr = std::env::var("UCA_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    run(&addr, state).await;
}
