use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worldwise_core::core::config::Config;
use worldwise_core::core::context::AppContext;
use worldwise_core::features::navigation::city_link;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(2)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded successfully (tokio_worker_threads={})",
        worker_threads
    );

    let context = AppContext::new(config)?;

    if let Some(initial_load) = context.cities.activate() {
        initial_load.await?;
    }

    let state = context.cities.snapshot();
    if state.error.is_some() {
        tracing::error!("{}", state.error_message());
    } else {
        for city in &state.cities {
            tracing::info!(
                "{} {} ({}) on {} -> {}",
                city.emoji,
                city.city_name,
                city.country,
                city.formatted_date(),
                city_link(city)
            );
        }

        tracing::info!(
            "{} cities across {} countries",
            state.cities.len(),
            context.cities.countries().len()
        );
    }

    context.cities.deactivate();
    tracing::info!("Session closed");

    Ok(())
}
