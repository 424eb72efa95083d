use crate::{ControlState, VehicleSpec};

// ----- Thrust -----

/// Mean of both throttles: forward drive in [-100, 100].
pub(super) fn net_thrust(controls: &ControlState) -> f32 {
    (controls.throttle_left + controls.throttle_right) * 0.5
}

/// Half the throttle split: the yaw contribution of running the screws at
/// different speeds.
pub(super) fn differential_thrust(controls: &ControlState) -> f32 {
    (controls.throttle_left - controls.throttle_right) * 0.5
}

/// Speed gained along the nose this step, before orientation.
pub(super) fn thrust_speed_delta(spec: &VehicleSpec, net: f32, dt: f32) -> f32 {
    net / 100.0 * spec.max_speed / 100.0 * dt
}

// ----- Control surfaces -----

/// Rudder authority scales with forward speed; a parked boat does not steer.
pub(super) fn rudder_yaw_delta(
    spec: &VehicleSpec,
    controls: &ControlState,
    forward_speed: f32,
    dt: f32,
) -> f32 {
    controls.yaw_rudder / 100.0 * (forward_speed.abs() / spec.max_speed) * spec.max_yaw_rate * dt
}

/// Elevator authority also scales with forward speed, at half the pitch
/// envelope per second at full deflection and reference speed.
pub(super) fn elevator_pitch_delta(
    spec: &VehicleSpec,
    controls: &ControlState,
    forward_speed: f32,
    dt: f32,
) -> f32 {
    controls.pitch_elevator / 100.0
        * (forward_speed.abs() / spec.max_speed)
        * spec.max_pitch_angle
        * 0.5
        * dt
}

/// The vertical thruster tilts the nose; it has no direct heave component.
pub(super) fn vertical_pitch_delta(controls: &ControlState, dt: f32) -> f32 {
    controls.vertical_thruster / 100.0 * 0.2 * dt
}

// ----- Roll stabilizer -----

pub(super) fn roll_decay_factor(dt: f32) -> f32 {
    1.0 - 0.95 * dt
}

/// Proportional restoring term pulling roll back to level.
pub(super) fn roll_restoring_delta(roll_deg: f32, dt: f32) -> f32 {
    -roll_deg * 0.8 * dt
}

/// Constant-rate override once roll leaves the ±15° band.
pub(super) fn roll_emergency_delta(roll_deg: f32, dt: f32) -> f32 {
    if roll_deg.abs() > 15.0 {
        -roll_deg.signum() * 3.0 * dt
    } else {
        0.0
    }
}

/// Counter-term for the roll induced by hard rudder.
pub(super) fn roll_anti_turn_delta(controls: &ControlState, yaw_rate: f32, dt: f32) -> f32 {
    if controls.yaw_rudder.abs() > 10.0 {
        -yaw_rate * 0.3 * dt
    } else {
        0.0
    }
}

// ----- Drag -----

pub(super) fn linear_drag_factor(spec: &VehicleSpec, dt: f32) -> f32 {
    1.0 - spec.drag_coefficient * dt
}

/// Pitch and yaw see heavier rotational drag than roll; the stabilizer
/// already damps roll separately.
pub(super) fn angular_drag_factor(spec: &VehicleSpec, dt: f32) -> f32 {
    1.0 - spec.drag_coefficient * 4.0 * dt
}

pub(super) fn roll_drag_factor(spec: &VehicleSpec, dt: f32) -> f32 {
    1.0 - spec.drag_coefficient * 2.0 * dt
}

// ----- Power -----

/// Battery percent consumed per second at the given control settings. The
/// vertical thruster draws at 30% of main engine rate.
pub(crate) fn battery_drain_per_s(spec: &VehicleSpec, controls: &ControlState) -> f32 {
    let engine_load = (controls.throttle_left.abs() + controls.throttle_right.abs()) * 0.5 / 100.0;
    let vertical_load = controls.vertical_thruster.abs() / 100.0;
    (engine_load + 0.3 * vertical_load) * (100.0 / spec.max_battery_time)
}
