use anyhow::Result;
use clap::Parser;
use tracing::info;

use bridge::{load_config, run, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    info!(?cfg, "Bridge config loaded");

    run(&args, cfg)
}
