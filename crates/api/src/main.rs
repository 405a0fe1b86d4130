use anyhow::Result;
use tracing::info;

use call_analytics_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting Call Analytics API v{}", env!("CARGO_PKG_VERSION"));

    let stores = persistence::store::create_stores(&config.data.store_config()).await?;
    info!(
        seeded = config.data.seed_demo_data,
        call_records = stores.call_records.count().await,
        "Stores ready"
    );

    let app = app::create_app(config.clone(), stores);

    let addr = config.socket_addr()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
