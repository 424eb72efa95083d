use bevy_math::Vec3;

use crate::ControlState;

/// Per-term breakdown of one physics step. Filled by `step_vehicle_dbg`;
/// costs nothing when unused.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDebug {
    pub dt: f32,
    pub controls: ControlState,
    pub battery_live: bool,
    // Thrust
    pub net_thrust: f32,
    pub differential: f32,
    /// Nose direction in world space.
    pub forward: Vec3,
    /// Velocity gained from the screws this step (world space).
    pub thrust_delta: Vec3,
    // Angular-rate contributions applied this step (deg/s)
    pub yaw_from_differential: f32,
    pub yaw_from_rudder: f32,
    pub pitch_from_elevator: f32,
    pub pitch_from_vertical: f32,
    // Roll stabilizer terms (deg/s)
    pub roll_decay_factor: f32,
    pub roll_restoring: f32,
    pub roll_emergency: f32,
    pub roll_anti_turn: f32,
    // Drag factors applied to velocity / pitch+yaw rate / roll rate
    pub linear_drag_factor: f32,
    pub angular_drag_factor: f32,
    pub roll_drag_factor: f32,
    // Bounds
    pub boundary_hit: bool,
}
