//! Camera framing for assets without an authored camera.
//!
//! Pure math, no state: given the scene's axis-aligned bounding volume,
//! compute a pose that places the whole volume comfortably in frame at a
//! fixed default viewing angle.

use glam::Vec3;

use crate::asset::BoundingVolume;

/// Default vertical field of view in degrees.
pub const DEFAULT_FOVY_DEG: f32 = 50.0;

/// Margin multiplier applied to the exact fit distance (20% breathing room).
pub const FRAMING_MARGIN: f32 = 1.2;

/// Distance used when the bounding volume is degenerate (a point, an empty
/// scene, or non-finite extents). Fails closed: strictly positive, never NaN.
pub const FALLBACK_DISTANCE: f32 = 10.0;

/// Elevation of the default viewing angle, degrees above the horizontal.
pub const ELEVATION_DEG: f32 = 30.0;

/// Azimuth of the default viewing angle, degrees.
pub const AZIMUTH_DEG: f32 = 135.0;

/// A computed framing result.
///
/// `target` is always the origin: the caller translates the scene root by
/// `-center` (see [`frame_bounds`]) so the volume's center coincides with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramedPose {
    /// Camera eye position in world space.
    pub position: Vec3,
    /// Look-at target (always the origin).
    pub target: Vec3,
    /// Distance from eye to target.
    pub distance: f32,
}

/// Distance at which a volume with the given half-extents fits a `fovy_deg`
/// vertical field of view, with [`FRAMING_MARGIN`] applied.
///
/// Degenerate or non-finite extents yield [`FALLBACK_DISTANCE`].
#[must_use]
pub fn framing_distance(bounds: &BoundingVolume, fovy_deg: f32) -> f32 {
    let max_dim = bounds.max_extent();
    if !max_dim.is_finite() || max_dim <= 0.0 {
        return FALLBACK_DISTANCE;
    }

    let half_fov = (fovy_deg / 2.0).to_radians();
    let base = max_dim / (2.0 * half_fov.tan());
    base * FRAMING_MARGIN
}

/// Compute a pose framing the given bounding volume.
///
/// The eye sits at [`ELEVATION_DEG`] above the horizontal and [`AZIMUTH_DEG`]
/// around the vertical axis, looking at the origin. The scene root must be
/// translated by `-bounds.center` for the fixed origin target to be valid
/// (reported as `root_offset` on the emitted scene settings).
#[must_use]
pub fn frame_bounds(bounds: &BoundingVolume, fovy_deg: f32) -> FramedPose {
    let distance = framing_distance(bounds, fovy_deg);
    FramedPose {
        position: orbit_position(Vec3::ZERO, distance),
        target: Vec3::ZERO,
        distance,
    }
}

/// Eye position at `distance` from `target` along the fixed default viewing
/// angle. Shared by initial framing and the reset-to-frame operation.
#[must_use]
pub fn orbit_position(target: Vec3, distance: f32) -> Vec3 {
    let elevation = ELEVATION_DEG.to_radians();
    let azimuth = AZIMUTH_DEG.to_radians();
    target
        + distance
            * Vec3::new(
                elevation.cos() * azimuth.cos(),
                elevation.sin(),
                elevation.cos() * azimuth.sin(),
            )
}
