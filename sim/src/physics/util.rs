use bevy_math::{EulerRot, Quat, Vec3};

// Basis: right-handed, +Y up, nose along -Z at zero rotation
pub(super) const BODY_FWD: Vec3 = Vec3::NEG_Z;

/// Orientation quaternion from Euler degrees (x = pitch, y = yaw, z = roll),
/// applied in pitch, yaw, roll axis order.
#[inline]
pub(super) fn orientation_quat(rotation_deg: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rotation_deg.x.to_radians(),
        rotation_deg.y.to_radians(),
        rotation_deg.z.to_radians(),
    )
}

/// Wrap an angle in degrees to [0, 360).
#[inline]
pub(super) fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
