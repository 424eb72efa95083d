use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use sim::{scenarios, specs, Vec3, VehicleSpec, WorldSpec};

/// Command-line options for the bridge console.
#[derive(Parser, Debug, Clone)]
#[command(about = "Headless submarine simulation host")]
pub struct Args {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<String>,
    /// Scenario override (open_water, trench_run).
    #[arg(long)]
    pub scenario: Option<String>,
    /// Run the fixed-step scheduler for this much simulated time instead of
    /// running on wall clock until a terminal outcome.
    #[arg(long)]
    pub run_secs: Option<f32>,
    /// Tick rate override in Hz.
    #[arg(long)]
    pub tick_hz: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scenario: String,
    pub tick_hz: f32,
    pub log_telemetry: bool,
    /// Optional override for the scenario's target position.
    pub target: Option<[f32; 3]>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenario: "open_water".to_string(),
            tick_hz: 60.0,
            log_telemetry: true,
            target: None,
        }
    }
}

/// Load the TOML config, falling back to defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let cfg = toml::from_str(&raw).with_context(|| format!("parsing config {path}"))?;
    Ok(cfg)
}

/// Resolve the scenario named by CLI/config into vehicle and world specs.
pub fn resolve_scenario(args: &Args, cfg: &Config) -> Result<(VehicleSpec, WorldSpec)> {
    let name = args.scenario.as_deref().unwrap_or(&cfg.scenario);
    let mut world = match name {
        "open_water" => scenarios::open_water(),
        "trench_run" => scenarios::trench_run(),
        other => bail!("unknown scenario {other:?}"),
    };
    if let Some([x, y, z]) = cfg.target {
        world.target = Vec3::new(x, y, z);
    }
    Ok((specs::training_skiff_spec(), world))
}
