//! The live camera pose and its angle bookkeeping.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::asset::CameraSettings;

/// Round to 2 decimal places.
///
/// Stored angles always pass through this before being written, so repeated
/// read-modify-write cycles from continuous drag input cannot accumulate
/// floating jitter.
#[must_use]
pub fn round_hundredths(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Component-wise [`round_hundredths`] for Euler angles.
#[must_use]
pub fn round_angles(v: Vec3) -> Vec3 {
    Vec3::new(
        round_hundredths(v.x),
        round_hundredths(v.y),
        round_hundredths(v.z),
    )
}

/// XYZ Euler rotation (degrees) of a camera at `position` looking at
/// `target` with Y up, rounded for storage.
///
/// This is the only place rotation is derived from position+target; manual
/// rotation edits are independent overrides and never go through here.
/// Returns zero when the two points coincide.
#[must_use]
pub fn look_rotation_degrees(position: Vec3, target: Vec3) -> Vec3 {
    let forward = target - position;
    if forward.length_squared() < f32::EPSILON {
        return Vec3::ZERO;
    }
    let dir = forward.normalize();
    // A straight-up or straight-down view is parallel to the Y up hint and
    // collapses the look-at basis; hint along Z instead, signed so the
    // derived roll stays zero.
    let up = if dir.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::new(0.0, 0.0, dir.y.signum())
    } else {
        Vec3::Y
    };
    let view = Mat4::look_at_rh(position, target, up);
    // The view matrix rotates world into camera space; the camera's world
    // orientation is its inverse.
    let orientation = Quat::from_mat4(&view).inverse();
    let (x, y, z) = orientation.to_euler(EulerRot::XYZ);
    round_angles(Vec3::new(
        x.to_degrees(),
        y.to_degrees(),
        z.to_degrees(),
    ))
}

/// The single live camera pose, mutated by exactly one writer at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at point. Trustworthy only while orbit authority is active:
    /// a manual rotation write leaves it stale by design.
    pub target: Vec3,
    /// XYZ Euler angles in degrees, rounded to 2 decimals.
    pub rotation: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Projection zoom factor.
    pub zoom: f32,
}

impl CameraPose {
    /// Build the initial pose from inspected scene settings, deriving
    /// rotation from the look-at direction.
    #[must_use]
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            position: settings.position,
            target: settings.target,
            rotation: look_rotation_degrees(
                settings.position,
                settings.target,
            ),
            fovy: settings.fovy,
            znear: settings.znear,
            zfar: settings.zfar,
            zoom: settings.zoom,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            rotation: Vec3::ZERO,
            fovy: crate::framing::DEFAULT_FOVY_DEG,
            znear: 0.1,
            zfar: 1000.0,
            zoom: 1.0,
        }
    }
}
