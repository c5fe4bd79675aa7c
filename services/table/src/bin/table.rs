//! services/table/src/bin/table.rs

use table_lib::{config::Config, error::AppError, runner::run_table};
use tokio::task::LocalSet;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded. Mounting people table...");

    // --- 2. Run the Table Until Its Countdown Ends ---
    // Tick callbacks are not `Send`, so everything runs on one local task set.
    let local = LocalSet::new();
    let snapshot = local
        .run_until(async {
            let mut stdout = std::io::stdout();
            run_table(&config, &mut stdout).await
        })
        .await?;

    info!(
        "People table finished (timer active: {}).",
        snapshot.timer_active
    );
    Ok(())
}
