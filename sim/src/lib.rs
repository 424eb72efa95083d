//! Shared simulation core for the bridge console and display adapters.
//!
//! This crate intentionally avoids any async, I/O or windowing types. It
//! exposes a serializable vehicle/world schema plus a synchronous physics
//! step the host can drive from any scheduler and tests can drive with
//! synthetic deltas.

pub use bevy_math::{Quat, Vec3};

mod state;
pub use state::{ControlState, NavState, StatusState, TimeState, VehicleState};

mod vehicle;
pub use vehicle::specs;
pub use vehicle::VehicleSpec;

mod world;
pub use world::scenarios;
pub use world::WorldSpec;

pub mod physics;
pub use physics::{
    enforce_bounds, near_boundary, step_vehicle, step_vehicle_dbg, update_navigation, StepDebug,
};

mod simulation;
pub use simulation::{
    Outcome, RunState, Simulation, TelemetrySnapshot, MAX_TICK_DT, RESTART_DELAY,
    UI_REFRESH_INTERVAL,
};
