//! Lineup Player - headless runner binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lineup_player::infrastructure::{load_dotenv_from_repo_root, PlayerConfig};
use lineup_player::runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lineup_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lineup Player");

    let config = PlayerConfig::from_env();
    let snapshot = runner::run(&config).await?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
