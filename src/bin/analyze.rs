use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pretix_stats::config::Config;
use pretix_stats::countries::CountryTable;
use pretix_stats::error::Result;
use pretix_stats::{charts, extract, snapshot};

fn main() {
    let cfg = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(&cfg) {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

/// Read the order snapshot produced by the fetch step, flatten it into
/// attendee records and render the chart set under `plots/`.
fn run(cfg: &Config) -> Result<()> {
    let orders = snapshot::load_orders(Path::new("."), &cfg.event_id)?;
    let countries = CountryTable::builtin();

    let attendees = extract::extract_attendees(&orders, &countries);
    info!(
        "Extracted {} attendees from {} orders",
        attendees.len(),
        orders.len()
    );

    charts::render_all(&cfg.event_id, Path::new("plots"), &attendees, &countries)?;

    Ok(())
}
