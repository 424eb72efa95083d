use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use protocol::{Command, DiscreteAction};
use sim::Simulation;
use tracing::{debug, info};

use crate::mailbox::{control_state, ControlMailbox};
use crate::sink::TelemetrySink;

/// Feed everything adapters posted since the last tick into the core.
/// Discrete actions and lifecycle commands run synchronously here, outside
/// the tick cycle.
fn drain_into(simulation: &mut Simulation, mailbox: &ControlMailbox, sink: &mut dyn TelemetrySink) {
    let drained = mailbox.drain();
    if let Some(frame) = drained.controls {
        simulation.apply_controls(control_state(frame));
    }
    for action in drained.actions {
        match action {
            DiscreteAction::EmergencyAllStop => {
                info!("emergency all stop");
                simulation.emergency_all_stop();
            }
            DiscreteAction::GrabTarget => simulation.grab_target(),
        }
    }
    for command in drained.commands {
        debug!(?command, "lifecycle command");
        match command {
            Command::Start => simulation.start(),
            Command::Stop => simulation.stop(),
            Command::Restart => {
                simulation.restart();
                sink.begin_session();
            }
        }
    }
}

/// Drives the core with synthetic fixed deltas: the test-harness and
/// bounded-run scheduler.
pub struct FixedStepScheduler {
    dt: f32,
}

impl FixedStepScheduler {
    pub fn new(tick_hz: f32) -> Self {
        Self { dt: 1.0 / tick_hz }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Run up to `max_ticks`, stopping early on a terminal outcome. Returns
    /// the number of ticks executed.
    pub fn run(
        &self,
        simulation: &mut Simulation,
        mailbox: &ControlMailbox,
        sink: &mut dyn TelemetrySink,
        max_ticks: u64,
    ) -> u64 {
        for n in 0..max_ticks {
            drain_into(simulation, mailbox, sink);
            if let Some(snapshot) = simulation.advance(self.dt) {
                sink.refresh(&snapshot);
                if snapshot.outcome.is_some() {
                    return n + 1;
                }
            }
        }
        max_ticks
    }
}

/// Wall-clock driver on a dedicated thread. Stopping flips an atomic flag
/// that is checked before every scheduled continuation, so a stop request
/// invalidates any pending tick.
pub struct RealtimeScheduler {
    stop_flag: Arc<AtomicBool>,
    handle: thread::JoinHandle<Simulation>,
}

impl RealtimeScheduler {
    pub fn spawn(
        mut simulation: Simulation,
        mailbox: Arc<ControlMailbox>,
        mut sink: Box<dyn TelemetrySink + Send>,
        tick_hz: f32,
    ) -> Self {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop_flag);
        let period = Duration::from_secs_f32(1.0 / tick_hz);

        let handle = thread::spawn(move || {
            let mut last = Instant::now();
            loop {
                thread::sleep(period);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                let now = Instant::now();
                // The core caps this delta; a stalled host resumes cleanly.
                let dt = (now - last).as_secs_f32();
                last = now;

                drain_into(&mut simulation, &mailbox, sink.as_mut());
                if let Some(snapshot) = simulation.advance(dt) {
                    sink.refresh(&snapshot);
                    if snapshot.outcome.is_some() {
                        break;
                    }
                }
            }
            simulation
        });

        Self { stop_flag, handle }
    }

    /// Cancel the next scheduled tick and reclaim the simulation.
    pub fn stop(self) -> Result<Simulation> {
        self.stop_flag.store(true, Ordering::Relaxed);
        self.handle
            .join()
            .map_err(|_| anyhow!("scheduler thread panicked"))
    }

    /// Block until the run reaches a terminal outcome (or is stopped from
    /// another handle) and reclaim the simulation.
    pub fn join(self) -> Result<Simulation> {
        self.handle
            .join()
            .map_err(|_| anyhow!("scheduler thread panicked"))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;
    use protocol::ControlFrame;
    use sim::{scenarios, specs, RunState};

    fn simulation() -> Simulation {
        let mut s = Simulation::new(specs::training_skiff_spec(), scenarios::open_water());
        s.start();
        s
    }

    #[test]
    fn fixed_step_applies_mailed_controls() {
        let mut s = simulation();
        let mailbox = ControlMailbox::new();
        let mut sink = NullSink;
        mailbox.post_controls(ControlFrame {
            throttle_left: 100.0,
            throttle_right: 100.0,
            ..ControlFrame::default()
        });

        let driver = FixedStepScheduler::new(60.0);
        driver.run(&mut s, &mailbox, &mut sink, 120);

        assert_eq!(s.state().controls.throttle_left, 100.0);
        assert!(
            s.state().velocity.length() > 0.0,
            "two seconds at full throttle should move the boat"
        );
    }

    #[test]
    fn restart_command_goes_through_the_mailbox() {
        let mut s = simulation();
        let mailbox = ControlMailbox::new();
        let mut sink = NullSink;
        let driver = FixedStepScheduler::new(60.0);

        mailbox.post_controls(ControlFrame {
            throttle_left: 50.0,
            throttle_right: 50.0,
            ..ControlFrame::default()
        });
        driver.run(&mut s, &mailbox, &mut sink, 60);
        assert!(s.state().time.elapsed > 0.0);

        mailbox.post_command(Command::Restart);
        // One tick to drain the command, then enough to cover the delay.
        driver.run(&mut s, &mailbox, &mut sink, 60);
        assert_eq!(s.run_state(), RunState::Running);
        assert_eq!(s.state().controls.throttle_left, 0.0);
    }

    #[test]
    fn realtime_scheduler_cancels_cleanly() {
        let s = simulation();
        let mailbox = Arc::new(ControlMailbox::new());
        let driver = RealtimeScheduler::spawn(s, mailbox, Box::new(NullSink), 120.0);

        thread::sleep(Duration::from_millis(50));
        let s = driver.stop().expect("join scheduler");
        assert!(s.state().time.elapsed > 0.0);
    }
}
