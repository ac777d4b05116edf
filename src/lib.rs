pub mod auth; // Session & login
pub mod clinic; // Cross-store operations & joins
pub mod config;
pub mod dashboard; // Per-role summary cards
pub mod models;
pub mod nav; // Menu + route guard
pub mod notify; // Toast abstraction
pub mod screens; // CRUD screen wiring
pub mod seed; // Demo dataset
pub mod store; // Generic in-memory resource store

use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG`, falling back to the built-in
/// default filter. Call once at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
