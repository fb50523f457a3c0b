use product_api::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_service(&ConfigService::from_env())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    tracing::info!("🚀 Starting Product API...");

    let store = if config.seed_sample_data {
        ProductStore::with_sample_data()
    } else {
        ProductStore::new()
    };

    let app = Application::builder()
        .config(config)
        .store(Arc::new(store))
        .build()?;

    app.serve().await?;
    Ok(())
}
