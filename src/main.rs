use std::path::Path;

use tracing::error;
use tracing_subscriber::EnvFilter;

use pretix_stats::config::Config;
use pretix_stats::error::Result;
use pretix_stats::{fetcher, snapshot};

#[tokio::main]
async fn main() {
    let cfg = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(&cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

/// Download the event's orders and item catalog and snapshot both to the
/// working directory. Snapshots are written only after their fetch fully
/// succeeds; an aborted pagination walk leaves the previous files in place.
async fn run(cfg: &Config) -> Result<()> {
    let out_dir = Path::new(".");

    let orders = fetcher::fetch_orders(cfg).await?;
    snapshot::write_orders(out_dir, &cfg.event_id, &orders)?;

    let items = fetcher::fetch_items(cfg).await?;
    snapshot::write_items(out_dir, &cfg.event_id, &items)?;

    Ok(())
}
