//! Site server entry point.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hnh_site::{build_router, content, content::ContentStore, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        tracing::error!("fatal: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = content::data_dir();

    // Content failures are fatal: the site never starts with missing data.
    let store = ContentStore::load_from(&data_dir)?;
    let state = AppState::new(store);

    #[cfg(debug_assertions)]
    let _watcher = hnh_site::watch::spawn(&data_dir, state.clone())?;

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
