use std::sync::Arc;

use imagebot::commands::CommandRouter;
use imagebot::config::AppConfig;
use imagebot::image_store::{PostgresImageStore, StoreConfig};
use imagebot::intent::RasaClient;
use imagebot::routes::configure_routes;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,imagebot=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = StoreConfig::from_connection_string(&config.database_url)?
        .with_max_pool_size(config.database_pool_size)
        .build_pool()?;
    let store = PostgresImageStore::new(pool);
    store.ensure_schema().await?;
    tracing::info!("connected to the image store");

    let classifier = RasaClient::new(config.classifier.clone())?;
    tracing::info!(endpoint = %config.classifier.endpoint, "using intent classifier");

    let router = CommandRouter::new(Arc::new(store), Arc::new(classifier));
    let routes = configure_routes(router);

    tracing::info!("starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}
