use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use pricebook_api::{app, AppState};
use pricebook_store::{app_config::Config, InMemoryProductRepository, InMemoryProfileRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricebook_api=debug,pricebook_catalog=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting pricebook API on port {}", config.server.port);

    let products = InMemoryProductRepository::from_path(&config.catalog.products_path)
        .context("Failed to load product catalog")?;
    let profiles = InMemoryProfileRepository::seeded(&config.catalog.global_profile_id);

    let app_state = AppState {
        products: Arc::new(products),
        profiles: Arc::new(profiles),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;
    Ok(())
}
