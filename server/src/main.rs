#![recursion_limit = "512"]

mod config;
mod routes;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let leptos_options = match get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(e) => fatal("leptos configuration failed", &e),
    };

    let config = match ServerConfig::from_env(leptos_options.site_addr) {
        Ok(config) => config,
        Err(e) => fatal("server configuration failed", &e),
    };

    let app = routes::app(leptos_options);
    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => fatal("failed to bind", &e),
    };

    tracing::info!(%addr, "trip-maker listening");
    if let Err(e) = axum::serve(listener, app).await {
        fatal("server failed", &e);
    }
}

fn fatal(context: &str, err: &dyn std::fmt::Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1)
}
