use anyhow::Context;
use streamsearch_api::{
    api::{create_router, AppState},
    config::Config,
    services::{load_catalog, provider_from_config, Recommender},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = provider_from_config(&config);
    let catalog = load_catalog(provider.as_ref())
        .await
        .with_context(|| format!("Failed to load {} catalog", provider.name()))?;

    let state = AppState::new(catalog, Recommender::from_config(&config));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(address = %address, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
