use super::util::wrap_degrees;
use crate::{VehicleSpec, VehicleState, WorldSpec};

/// Recompute navigation and depth telemetry from kinematic state. Touches
/// only the derived fields.
pub fn update_navigation(spec: &VehicleSpec, world: &WorldSpec, state: &mut VehicleState) {
    let to_target = state.navigation.target_position - state.position;

    let distance = to_target.length();
    state.navigation.distance_to_target = (distance / world.max_distance * 100.0).min(100.0);

    // Horizontal-plane bearing with 0° along -Z
    let bearing = to_target.x.atan2(-to_target.z).to_degrees();
    state.navigation.heading_to_target = wrap_degrees(bearing);

    state.navigation.compass_heading = wrap_degrees(state.rotation.y);

    state.navigation.current_speed = state.velocity.length() / spec.max_speed * 100.0;

    // Linear remap against the surface line; capped at the gauge ceiling,
    // not floored at zero.
    state.status.depth = world.max_depth.min(world.surface_y - state.position.y);
}
