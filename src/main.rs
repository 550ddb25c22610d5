use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(feature = "server")]
use std::sync::Arc;

fn main() {
    #[cfg(feature = "server")]
    {
        backend::init_tracing();

        use dotenvy::dotenv;
        dotenv().ok();

        // Resolve upstream config once at boot; the data-fetch layer only
        // ever sees this object.
        let config = backend::NasaConfig::from_env();
        if config.live_upstream {
            eprintln!("[nasa] live upstream enabled");
        } else {
            eprintln!("[nasa] mock mode; set USE_REAL_NASA_API=true for live upstream");
        }
        let _ = backend::GLOBAL_CONFIG.set(Arc::new(config));
    }
    dioxus::launch(app::App);
}
