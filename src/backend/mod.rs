#![cfg(feature = "server")]

pub mod config;
pub mod nasa;
pub mod telemetry;

pub use config::{NasaConfig, GLOBAL_CONFIG};

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
