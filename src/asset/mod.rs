//! Contracts consumed from the external asset loader.
//!
//! The loader decodes the container into a node graph; this crate only sees
//! that graph through [`AssetGraph`]: zero-or-one authored camera nodes,
//! zero-or-more lights, zero-or-more animation clips, and a computable
//! bounding volume over all mesh geometry.

mod inspect;

pub use inspect::{AssetId, CameraSettings, SceneInspector, SceneSettings};

use glam::{Quat, Vec3};

/// Axis-aligned bounding volume over the asset's visible geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    /// Center of the box in the asset's native coordinates.
    pub center: Vec3,
    /// Half-extents along each axis.
    pub half_extents: Vec3,
}

impl BoundingVolume {
    /// Full extent along the largest axis (`2 * max(sx, sy, sz)`).
    ///
    /// NaN when any half-extent is non-finite (`f32::max` alone would drop
    /// a NaN axis and report a finite extent).
    #[must_use]
    pub fn max_extent(&self) -> f32 {
        if !self.half_extents.is_finite() {
            return f32::NAN;
        }
        2.0 * self
            .half_extents
            .x
            .max(self.half_extents.y)
            .max(self.half_extents.z)
    }

    /// Whether the volume carries no usable extent (a point, an empty scene,
    /// or non-finite data).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let m = self.max_extent();
        !m.is_finite() || m <= 0.0
    }
}

/// A camera node authored into the asset. Takes precedence over computed
/// framing when present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthoredCamera {
    /// World-space position of the camera node.
    pub position: Vec3,
    /// World orientation quaternion.
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Projection zoom factor.
    pub zoom: f32,
}

/// Kind of a scene-graph light node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Uniform non-directional fill.
    Ambient,
    /// Parallel rays from an infinitely distant source.
    Directional,
    /// Omnidirectional point source with falloff.
    Point,
    /// Cone-shaped source with falloff.
    Spot,
}

/// Read-only light descriptor, passed through to the renderer unmodified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightInfo {
    /// Light kind.
    pub kind: LightKind,
    /// Emission intensity.
    pub intensity: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// World-space position (meaningless for ambient/directional kinds).
    pub position: Vec3,
    /// Falloff cutoff distance (0 = unbounded).
    pub distance: f32,
    /// Falloff decay exponent.
    pub decay: f32,
}

/// Metadata for an embedded animation clip.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipInfo {
    /// Authored clip name, if any. Unnamed clips are assigned a stable
    /// placeholder during inspection.
    pub name: Option<String>,
    /// Clip duration in seconds.
    pub duration: f32,
}

/// The node-graph surface exposed by the external loader.
///
/// Collection order is traversal order; it is significant only for display,
/// never for semantics.
pub trait AssetGraph {
    /// The first authored camera node, if the asset has one.
    fn authored_camera(&self) -> Option<AuthoredCamera>;

    /// All light nodes in traversal order.
    fn lights(&self) -> Vec<LightInfo>;

    /// All animation clips, ordered as authored.
    fn clips(&self) -> Vec<ClipInfo>;

    /// Bounding volume over all mesh geometry.
    fn bounding_volume(&self) -> BoundingVolume;
}
