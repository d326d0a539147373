use std::net::SocketAddr;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/kr";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let use_json = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()) == "json";
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,payroll_engine=debug".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config_dir =
        std::env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let loader = ConfigLoader::load(&config_dir).map_err(|e| {
        tracing::error!(config_dir = %config_dir, "Configuration error: {}", e);
        e
    })?;
    tracing::info!(
        config_dir = %config_dir,
        jurisdiction = %loader.jurisdiction().code,
        rate_tables = loader.config().rate_tables().len(),
        "Configuration loaded"
    );

    let bind_addr: SocketAddr = std::env::var("PAYROLL_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    let app = create_router(AppState::new(loader));
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Payroll engine listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
