//! Headless host for the simulation core: configuration, the control
//! mailbox input adapters write into, the schedulers that drive ticks, and
//! the diagnostic overlay.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

mod config;
mod mailbox;
mod overlay;
mod scheduler;
mod sink;

pub use config::{load_config, resolve_scenario, Args, Config};
pub use mailbox::{control_state, ControlMailbox, MailboxDrain};
pub use overlay::overlay_text;
pub use scheduler::{FixedStepScheduler, RealtimeScheduler};
pub use sink::{LogSink, NullSink, TelemetrySink};

/// Build the simulation from config and drive it until a terminal outcome
/// (or for `--run-secs` of simulated time with the fixed-step scheduler).
pub fn run(args: &Args, cfg: Config) -> Result<()> {
    let (spec, world) = resolve_scenario(args, &cfg)?;
    let mut simulation = sim::Simulation::new(spec, world);
    simulation.start();

    let mailbox = Arc::new(ControlMailbox::new());
    let mut sink = LogSink::new(cfg.log_telemetry);
    let tick_hz = args.tick_hz.unwrap_or(cfg.tick_hz);

    if let Some(run_secs) = args.run_secs {
        let driver = FixedStepScheduler::new(tick_hz);
        let ticks = (run_secs * tick_hz).ceil() as u64;
        let executed = driver.run(&mut simulation, &mailbox, &mut sink, ticks);
        info!(executed, "fixed-step run complete");
        println!("{}", overlay_text(&simulation.snapshot()));
        return Ok(());
    }

    let driver = RealtimeScheduler::spawn(simulation, mailbox, Box::new(sink), tick_hz);
    let simulation = driver.join()?;
    println!("{}", overlay_text(&simulation.snapshot()));
    Ok(())
}
