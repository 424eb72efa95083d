use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::{battery_drain_per_s, step_vehicle_dbg, update_navigation, StepDebug};
use crate::{ControlState, VehicleSpec, VehicleState, WorldSpec};

/// Wall-clock delta cap per tick, so a stalled frame loop resumes without a
/// spiral of death.
pub const MAX_TICK_DT: f32 = 0.1;
/// Seconds between telemetry/display refresh cycles.
pub const UI_REFRESH_INTERVAL: f32 = 0.5;
/// Delay between a restart request and the relaunch, giving dependent
/// subsystems time to settle.
pub const RESTART_DELAY: f32 = 0.5;
/// Scaled-distance threshold treated as target reached.
const WIN_DISTANCE: f32 = 0.1;
/// Scaled-distance threshold within which a grab attempt secures the target.
const GRAB_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Stopped,
    Running,
}

/// Terminal outcome of a run. Both stop the simulation rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    TargetReached,
    OxygenDepleted,
}

/// Read-only view handed to display adapters once per UI-refresh cycle.
/// Gauges clamp and remap these into their own presentation ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub position: Vec3,
    pub rotation: Vec3,
    pub compass_heading: f32,
    pub current_speed: f32,
    pub distance_to_target: f32,
    pub heading_to_target: f32,
    pub depth: f32,
    pub oxygen_level: f32,
    pub battery_level: f32,
    pub boundary_warning: bool,
    pub target_secured: bool,
    pub outcome: Option<Outcome>,
}

/// The tick driver: owns the Vehicle State and the Stopped/Running state
/// machine. Drivable by any scheduler through `advance`; input adapters
/// write through `apply_controls` and the discrete-action methods between
/// ticks.
#[derive(Debug, Clone)]
pub struct Simulation {
    spec: VehicleSpec,
    world: WorldSpec,
    state: VehicleState,
    run_state: RunState,
    restart_timer: Option<f32>,
    outcome: Option<Outcome>,
    last_debug: StepDebug,
}

impl Simulation {
    pub fn new(spec: VehicleSpec, world: WorldSpec) -> Self {
        let mut state = VehicleState::reset(&world);
        update_navigation(&spec, &world, &mut state);
        Self {
            spec,
            world,
            state,
            run_state: RunState::Stopped,
            restart_timer: None,
            outcome: None,
            last_debug: StepDebug::default(),
        }
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    /// Escape hatch for tests and tools that set up non-default state.
    pub fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    pub fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    pub fn world(&self) -> &WorldSpec {
        &self.world
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_debug(&self) -> &StepDebug {
        &self.last_debug
    }

    /// Start is a toggle: starting a running simulation stops it instead.
    pub fn start(&mut self) {
        match self.run_state {
            RunState::Stopped => {
                self.run_state = RunState::Running;
                self.outcome = None;
            }
            RunState::Running => self.stop(),
        }
    }

    /// Halt immediately. Cancels any armed restart as well, so no scheduled
    /// continuation survives a stop.
    pub fn stop(&mut self) {
        self.run_state = RunState::Stopped;
        self.restart_timer = None;
    }

    /// Stop now, rebuild the Vehicle State from the typed default, and
    /// relaunch after `RESTART_DELAY` seconds of wall time fed through
    /// `advance`.
    pub fn restart(&mut self) {
        self.run_state = RunState::Stopped;
        self.outcome = None;
        self.state = VehicleState::reset(&self.world);
        update_navigation(&self.spec, &self.world, &mut self.state);
        self.restart_timer = Some(RESTART_DELAY);
    }

    /// Latest control values win; adapters may write at any point between
    /// ticks. Values arrive pre-clamped from the protocol edge.
    pub fn apply_controls(&mut self, controls: ControlState) {
        self.state.controls = controls;
    }

    /// Zero every control and both velocity vectors immediately, outside the
    /// tick cycle.
    pub fn emergency_all_stop(&mut self) {
        self.state.controls = ControlState::default();
        self.state.velocity = Vec3::ZERO;
        self.state.angular_velocity = Vec3::ZERO;
    }

    /// Attempt to secure the target with the manipulator. Latches
    /// `target_secured` when within grab range; otherwise a no-op. Does not
    /// affect the win condition.
    pub fn grab_target(&mut self) {
        if self.state.navigation.distance_to_target < GRAB_DISTANCE {
            self.state.status.target_secured = true;
        }
    }

    /// Advance wall time. Counts down a pending restart, then runs one tick
    /// when Running. Returns a telemetry snapshot when a UI-refresh cycle
    /// fired.
    pub fn advance(&mut self, wall_dt: f32) -> Option<TelemetrySnapshot> {
        if let Some(remaining) = self.restart_timer {
            let remaining = remaining - wall_dt;
            if remaining > 0.0 {
                self.restart_timer = Some(remaining);
            } else {
                self.restart_timer = None;
                self.run_state = RunState::Running;
            }
            return None;
        }
        if self.run_state != RunState::Running {
            return None;
        }
        self.tick(wall_dt.min(MAX_TICK_DT))
    }

    fn tick(&mut self, dt: f32) -> Option<TelemetrySnapshot> {
        self.state.time.elapsed += dt;
        self.state.time.delta_time = dt;
        self.state.time.ui_refresh_accumulator += dt;

        // Oxygen is a function of elapsed time, not a decrement; a direct
        // write to the field does not survive the next tick.
        let oxygen = ((self.spec.max_oxygen_time - self.state.time.elapsed)
            / self.spec.max_oxygen_time
            * 100.0)
            .ceil()
            .max(0.0);
        self.state.status.oxygen_level = oxygen;

        let drain = battery_drain_per_s(&self.spec, &self.state.controls) * dt;
        self.state.status.battery_level = (self.state.status.battery_level - drain).max(0.0);

        let mut dbg = StepDebug::default();
        step_vehicle_dbg(&self.spec, &self.world, &mut self.state, dt, Some(&mut dbg));
        self.last_debug = dbg;

        update_navigation(&self.spec, &self.world, &mut self.state);

        if self.state.time.ui_refresh_accumulator >= UI_REFRESH_INTERVAL {
            self.state.time.ui_refresh_accumulator = 0.0;
            return Some(self.refresh());
        }
        None
    }

    /// One UI-refresh cycle: evaluate terminal outcomes and emit telemetry.
    /// Win/loss detection lives here rather than in the per-tick path, so
    /// detection latency is bounded by the refresh interval.
    fn refresh(&mut self) -> TelemetrySnapshot {
        if self.state.status.oxygen_level <= 0.0 {
            self.outcome = Some(Outcome::OxygenDepleted);
            self.stop();
        } else if self.state.navigation.distance_to_target < WIN_DISTANCE {
            self.outcome = Some(Outcome::TargetReached);
            self.stop();
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            position: self.state.position,
            rotation: self.state.rotation,
            compass_heading: self.state.navigation.compass_heading,
            current_speed: self.state.navigation.current_speed,
            distance_to_target: self.state.navigation.distance_to_target,
            heading_to_target: self.state.navigation.heading_to_target,
            depth: self.state.status.depth,
            oxygen_level: self.state.status.oxygen_level,
            battery_level: self.state.status.battery_level,
            boundary_warning: self.state.status.boundary_warning,
            target_secured: self.state.status.target_secured,
            outcome: self.outcome,
        }
    }
}
