use serde::{Deserialize, Serialize};

/// Precomputed performance constants for a specific submarine hull class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Seconds of breathable air at the start of a run.
    pub max_oxygen_time: f32,
    /// Seconds of battery at sustained full engine load.
    pub max_battery_time: f32,
    /// Full-throttle reference speed (world units/s) used to scale thrust,
    /// control authority and the speed gauge.
    pub max_speed: f32,
    /// Hard pitch envelope in degrees.
    pub max_pitch_angle: f32,
    /// Full-rudder yaw rate in degrees/s at reference speed.
    pub max_yaw_rate: f32,
    /// First-order drag per second on linear velocity.
    pub drag_coefficient: f32,
    /// Hull mass in kg. Reserved: the force model works in velocity deltas.
    pub mass: f32,
}

pub mod specs {
    use super::*;

    // Tuned for the training scenarios: slow, forgiving, strongly damped.
    pub fn training_skiff_spec() -> VehicleSpec {
        VehicleSpec {
            max_oxygen_time: 300.0,
            max_battery_time: 600.0,
            max_speed: 50.0,
            max_pitch_angle: 30.0,
            max_yaw_rate: 45.0,
            drag_coefficient: 0.3,
            mass: 1200.0,
        }
    }
}
