#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;

use anyhow::Context;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use muncher::app::App;

fn main() -> anyhow::Result<()> {
    // Allow RUST_LOG to override levels; default to info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).context("could not set global subscriber")?;

    let seed = parse_seed().context("could not parse arguments")?;
    info!(seed, "Starting demo session");

    let mut app = App::new(seed).context("could not start session")?;
    app.run();
    Ok(())
}

/// Reads an optional `--seed N` argument; defaults to a random seed so
/// repeated unattended runs wander differently.
fn parse_seed() -> anyhow::Result<u64> {
    let args: Vec<String> = env::args().collect();
    if let Some(index) = args.iter().position(|arg| arg == "--seed") {
        let value = args.get(index + 1).context("--seed requires a value")?;
        return value.parse().with_context(|| format!("invalid seed {value:?}"));
    }
    Ok(rand::random())
}
