//! Single-writer mediation between orbit interaction and manual pose edits.
//!
//! Two writers exist for the camera pose: the interactive orbit collaborator
//! (continuous drag input) and discrete manual field edits from the control
//! panel. They must never race within an update cycle, so exactly one holds
//! authority at a time, and switching away from orbit disables the orbit
//! controls *at the source* - a drag gesture already in progress cannot land
//! a stale write out of band.

use glam::Vec3;

use super::pose::{look_rotation_degrees, round_angles, CameraPose};
use crate::asset::CameraSettings;
use crate::framing;

/// Which writer currently holds exclusive permission to mutate the pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityMode {
    /// Free interactive orbiting (rotate/pan/zoom).
    Orbit,
    /// Discrete manual pose edits (position/rotation/target fields).
    Manual,
}

/// Enable flags for the interactive orbit collaborator.
///
/// The renderer-side orbit controls read these every cycle; a disabled flag
/// means the corresponding gesture is not even generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitControls {
    /// Orbit rotation enabled.
    pub rotate: bool,
    /// Panning enabled.
    pub pan: bool,
    /// Zooming enabled.
    pub zoom: bool,
}

impl OrbitControls {
    const DISABLED: Self = Self {
        rotate: false,
        pan: false,
        zoom: false,
    };
}

/// Owns the camera pose and arbitrates between its two writers.
#[derive(Debug)]
pub struct CameraAuthority {
    pose: CameraPose,
    mode: AuthorityMode,
    controls: OrbitControls,
    /// Kiosk deployments keep pan/zoom but never allow orbit rotation.
    kiosk: bool,
}

impl CameraAuthority {
    /// New controller in orbit mode with a default pose.
    #[must_use]
    pub fn new(kiosk: bool) -> Self {
        let mut authority = Self {
            pose: CameraPose::default(),
            mode: AuthorityMode::Orbit,
            controls: OrbitControls::DISABLED,
            kiosk,
        };
        authority.enter(AuthorityMode::Orbit);
        authority
    }

    /// The current pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// The currently active writer.
    #[must_use]
    pub fn mode(&self) -> AuthorityMode {
        self.mode
    }

    /// Current orbit-control enable flags, for the interactive collaborator.
    #[must_use]
    pub fn controls(&self) -> OrbitControls {
        self.controls
    }

    /// Write the initial pose from inspected scene settings and hand
    /// authority to orbit.
    ///
    /// Idempotent: committing identical settings twice leaves the pose
    /// unchanged.
    pub fn commit_initial_pose(&mut self, settings: &CameraSettings) {
        self.pose = CameraPose::from_settings(settings);
        self.enter(AuthorityMode::Orbit);
        log::debug!(
            "initial pose committed: eye {:?}, target {:?}",
            self.pose.position,
            self.pose.target
        );
    }

    /// Apply a pose update from the interactive orbit collaborator.
    ///
    /// Only applied while orbit holds authority; returns whether the write
    /// landed. Rotation is rounded per the storage rule, position and target
    /// are written through verbatim.
    pub fn on_orbit_change(
        &mut self,
        position: Vec3,
        target: Vec3,
        rotation_deg: Vec3,
    ) -> bool {
        if self.mode != AuthorityMode::Orbit {
            return false;
        }
        self.pose.position = position;
        self.pose.target = target;
        self.pose.rotation = round_angles(rotation_deg);
        true
    }

    /// Manually set the eye position. Takes authority away from orbit and
    /// writes only this field.
    pub fn set_manual_position(&mut self, position: Vec3) {
        self.enter(AuthorityMode::Manual);
        self.pose.position = position;
    }

    /// Manually set the Euler rotation (degrees). Takes authority away from
    /// orbit and writes only this field; `target` is deliberately *not*
    /// recomputed and becomes stale until authority returns to orbit.
    pub fn set_manual_rotation(&mut self, rotation_deg: Vec3) {
        self.enter(AuthorityMode::Manual);
        self.pose.rotation = round_angles(rotation_deg);
    }

    /// Manually set the look-at target. Takes authority away from orbit and
    /// writes only this field; rotation is not recomputed.
    pub fn set_manual_target(&mut self, target: Vec3) {
        self.enter(AuthorityMode::Manual);
        self.pose.target = target;
    }

    /// Re-frame: place the eye at `distance` from `target` along the fixed
    /// default viewing angle, return orbit authority, and derive rotation
    /// from the resulting look-at.
    ///
    /// This is the one operation that derives rotation from position+target;
    /// the rounded degrees are returned for mirroring into UI fields.
    pub fn reset_to_frame(&mut self, target: Vec3, distance: f32) -> Vec3 {
        let position = framing::orbit_position(target, distance);
        self.pose.position = position;
        self.pose.target = target;
        self.pose.rotation = look_rotation_degrees(position, target);
        self.enter(AuthorityMode::Orbit);
        self.pose.rotation
    }

    /// Flip between orbit and manual authority.
    pub fn toggle_authority(&mut self) {
        let next = match self.mode {
            AuthorityMode::Orbit => AuthorityMode::Manual,
            AuthorityMode::Manual => AuthorityMode::Orbit,
        };
        self.enter(next);
    }

    /// Switch modes and update the source-level control gates atomically.
    fn enter(&mut self, mode: AuthorityMode) {
        self.mode = mode;
        self.controls = match mode {
            AuthorityMode::Orbit => OrbitControls {
                rotate: !self.kiosk,
                pan: true,
                zoom: true,
            },
            AuthorityMode::Manual => OrbitControls::DISABLED,
        };
        log::debug!("camera authority -> {mode:?}");
    }
}

impl Default for CameraAuthority {
    fn default() -> Self {
        Self::new(false)
    }
}
