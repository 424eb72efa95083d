use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::WorldSpec;

/// Normalized control inputs, written by input adapters between ticks.
///
/// Adapters clamp to [-100, 100] before writing; the core reads the latest
/// value each tick without re-clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub throttle_left: f32,
    pub throttle_right: f32,
    pub pitch_elevator: f32,
    pub yaw_rudder: f32,
    pub vertical_thruster: f32,
}

/// Life-support and contact status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusState {
    /// Percent remaining. Recomputed from elapsed time every tick, so a
    /// direct write to this field is overwritten on the next tick.
    pub oxygen_level: f32,
    /// Percent remaining. Drained by engine load; never recovers outside a
    /// full reset.
    pub battery_level: f32,
    /// Meters below the surface line. Capped at the world's gauge ceiling,
    /// negative above the surface line.
    pub depth: f32,
    pub boundary_warning: bool,
    pub target_secured: bool,
}

/// Navigation telemetry recomputed from kinematic state every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    pub target_position: Vec3,
    /// Percent of `WorldSpec::max_distance`, capped at 100.
    pub distance_to_target: f32,
    /// Degrees in [0, 360).
    pub heading_to_target: f32,
    /// Degrees in [0, 360). Yaw is heading; no inversion.
    pub compass_heading: f32,
    /// Percent of `VehicleSpec::max_speed`. Deliberately uncapped: drag does
    /// not guarantee a strict speed ceiling.
    pub current_speed: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeState {
    pub elapsed: f32,
    pub delta_time: f32,
    pub ui_refresh_accumulator: f32,
}

/// The single mutable aggregate holding all per-run simulation data.
/// Owned by a `Simulation`; never a module-level global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// World position, y-up.
    pub position: Vec3,
    /// Euler angles in degrees: x = pitch, y = yaw, z = roll.
    pub rotation: Vec3,
    /// World-space velocity in units/s.
    pub velocity: Vec3,
    /// Degrees per second about each axis.
    pub angular_velocity: Vec3,
    pub controls: ControlState,
    pub status: StatusState,
    pub navigation: NavState,
    pub time: TimeState,
}

impl VehicleState {
    /// The canonical start-of-run snapshot for a world. A pure constructor,
    /// so a reset can never leak mutations from an earlier run.
    pub fn reset(world: &WorldSpec) -> Self {
        Self {
            position: world.start,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            controls: ControlState::default(),
            status: StatusState {
                oxygen_level: 100.0,
                battery_level: 100.0,
                depth: 0.0,
                boundary_warning: false,
                target_secured: false,
            },
            navigation: NavState {
                target_position: world.target,
                distance_to_target: 0.0,
                heading_to_target: 0.0,
                compass_heading: 0.0,
                current_speed: 0.0,
            },
            time: TimeState::default(),
        }
    }
}
