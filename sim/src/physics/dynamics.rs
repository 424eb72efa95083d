use bevy_math::Vec3;

use super::boundary::enforce_bounds;
use super::terms::*;
use super::types::StepDebug;
use super::util::{orientation_quat, BODY_FWD};
use crate::{VehicleSpec, VehicleState, WorldSpec};

/// One physics step: thrust, roll stabilizer, drag, integration, bounds.
/// Life support and derived telemetry live with the tick driver, not here.
/// See `step_vehicle_dbg` for the instrumented variant.
pub fn step_vehicle(spec: &VehicleSpec, world: &WorldSpec, state: &mut VehicleState, dt: f32) {
    step_vehicle_dbg(spec, world, state, dt, None);
}

/// Variant of `step_vehicle` that fills out an optional debug telemetry
/// struct with the per-term breakdown.
pub fn step_vehicle_dbg(
    spec: &VehicleSpec,
    world: &WorldSpec,
    state: &mut VehicleState,
    dt: f32,
    mut dbg: Option<&mut StepDebug>,
) {
    if dt <= 0.0 {
        return;
    }

    let battery_live = state.status.battery_level > 0.0;
    let net = net_thrust(&state.controls);
    let differential = differential_thrust(&state.controls);
    let forward = orientation_quat(state.rotation) * BODY_FWD;

    // Reference forward speed for control-surface authority. Kept as the
    // world-z component: authority is tuned for runs flown roughly along the
    // z axis.
    let forward_speed = state.velocity.z;

    let mut thrust_delta = Vec3::ZERO;
    let mut yaw_from_differential = 0.0;
    let mut yaw_from_rudder = 0.0;
    let mut pitch_from_elevator = 0.0;
    let mut pitch_from_vertical = 0.0;

    // A dead battery means no screws and no actuated surfaces.
    if battery_live {
        thrust_delta = forward * thrust_speed_delta(spec, net, dt);
        state.velocity += thrust_delta;

        yaw_from_differential = -differential * 0.5 * dt;
        yaw_from_rudder = rudder_yaw_delta(spec, &state.controls, forward_speed, dt);
        state.angular_velocity.y += yaw_from_differential + yaw_from_rudder;

        pitch_from_elevator = elevator_pitch_delta(spec, &state.controls, forward_speed, dt);
        pitch_from_vertical = vertical_pitch_delta(&state.controls, dt);
        state.angular_velocity.x += pitch_from_elevator + pitch_from_vertical;
    }

    // The roll stabilizer runs with or without battery. No control ever
    // drives roll directly.
    let decay = roll_decay_factor(dt);
    state.angular_velocity.z *= decay;
    let restoring = roll_restoring_delta(state.rotation.z, dt);
    let emergency = roll_emergency_delta(state.rotation.z, dt);
    let anti_turn = roll_anti_turn_delta(&state.controls, state.angular_velocity.y, dt);
    state.angular_velocity.z += restoring + emergency + anti_turn;

    let lin = linear_drag_factor(spec, dt);
    let ang = angular_drag_factor(spec, dt);
    let roll_f = roll_drag_factor(spec, dt);
    debug_assert!(
        lin >= 0.0 && ang >= 0.0 && roll_f >= 0.0,
        "drag factors must stay non-negative at dt={dt}"
    );
    state.velocity *= lin;
    state.angular_velocity.x *= ang;
    state.angular_velocity.y *= ang;
    state.angular_velocity.z *= roll_f;

    state.position += state.velocity * dt;
    state.rotation += state.angular_velocity * dt;
    state.rotation.x = state
        .rotation
        .x
        .clamp(-spec.max_pitch_angle, spec.max_pitch_angle);

    let hit = enforce_bounds(world, state);

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.controls = state.controls;
        d.battery_live = battery_live;
        d.net_thrust = net;
        d.differential = differential;
        d.forward = forward;
        d.thrust_delta = thrust_delta;
        d.yaw_from_differential = yaw_from_differential;
        d.yaw_from_rudder = yaw_from_rudder;
        d.pitch_from_elevator = pitch_from_elevator;
        d.pitch_from_vertical = pitch_from_vertical;
        d.roll_decay_factor = decay;
        d.roll_restoring = restoring;
        d.roll_emergency = emergency;
        d.roll_anti_turn = anti_turn;
        d.linear_drag_factor = lin;
        d.angular_drag_factor = ang;
        d.roll_drag_factor = roll_f;
        d.boundary_hit = hit;
    }
}
