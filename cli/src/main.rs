//! Training Tracker session driver
//!
//! Iterates a batch of sensor packages in order, dispatches each one to its
//! workout variant, and prints one report line per package to stdout. The
//! batch is either the built-in demo session or a JSON file passed as the
//! first argument (see `input`).

mod input;

use anyhow::{Context, Result};
use tracing::debug;
use training_tracker_shared::read_package;

fn main() -> Result<()> {
    init_tracing();

    let packages = match std::env::args().nth(1) {
        Some(path) => input::load_packages(&path)
            .with_context(|| format!("Failed to load sensor packages from {}", path))?,
        None => input::demo_packages(),
    };

    debug!(count = packages.len(), "Processing sensor batch");

    for (tag, data) in &packages {
        let workout = read_package(tag, data)
            .with_context(|| format!("Failed to dispatch sensor package tagged {:?}", tag))?;
        println!("{}", workout.report());
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "training_tracker=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
