use bevy_math::Vec3;

use crate::{VehicleState, WorldSpec};

/// Fraction of the horizontal half-extent treated as the warning margin.
const HORIZONTAL_MARGIN_FRAC: f32 = 0.1;
/// Vertical warning margin in world units from seabed or surface.
const VERTICAL_MARGIN: f32 = 5.0;

/// Clamp the vehicle back inside the world volume. Each axis is corrected
/// independently; any violation is a hard stop (linear and angular velocity
/// and both throttles zeroed, idempotent under repeated hits). Returns
/// whether a correction was applied. The warning lamp is refreshed either
/// way.
pub fn enforce_bounds(world: &WorldSpec, state: &mut VehicleState) -> bool {
    let mut hit = false;

    if state.position.x.abs() > world.boundary {
        state.position.x = state.position.x.signum() * (world.boundary - 0.5);
        hit = true;
    }
    if state.position.y < world.seabed_y {
        state.position.y = world.seabed_y + 10.0;
        hit = true;
    }
    if state.position.y > world.surface_y {
        state.position.y = world.surface_y - 10.0;
        hit = true;
    }
    if state.position.z.abs() > world.boundary {
        state.position.z = state.position.z.signum() * (world.boundary - 10.0);
        hit = true;
    }

    if hit {
        state.velocity = Vec3::ZERO;
        state.angular_velocity = Vec3::ZERO;
        state.controls.throttle_left = 0.0;
        state.controls.throttle_right = 0.0;
    }

    state.status.boundary_warning = near_boundary(world, state.position);
    hit
}

/// Proximity check feeding the warning lamp, independent of an actual hit:
/// within 10% of the horizontal extent or 5 units of seabed/surface.
pub fn near_boundary(world: &WorldSpec, pos: Vec3) -> bool {
    let horizontal_margin = world.boundary * HORIZONTAL_MARGIN_FRAC;
    pos.x.abs() > world.boundary - horizontal_margin
        || pos.z.abs() > world.boundary - horizontal_margin
        || pos.y < world.seabed_y + VERTICAL_MARGIN
        || pos.y > world.surface_y - VERTICAL_MARGIN
}
