//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing mutation - whether triggered by an orbit drag, a form
//! field, a timeline widget, or a programmatic call - is represented as a
//! `ViewerCommand` and passed to
//! [`ViewerSession::execute`](crate::session::ViewerSession::execute). The
//! session never cares *how* a command was triggered.

use glam::Vec3;

use crate::playback::PlaybackStatus;

/// A discrete or parameterized operation the viewer session can perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Pose update from the interactive orbit collaborator. Applied only
    /// while orbit holds authority.
    OrbitChanged {
        /// New eye position.
        position: Vec3,
        /// New look-at target.
        target: Vec3,
        /// New Euler rotation in degrees.
        rotation: Vec3,
    },

    /// Manually set the eye position (switches to manual authority).
    SetManualPosition {
        /// New eye position.
        position: Vec3,
    },

    /// Manually set the Euler rotation in degrees (switches to manual
    /// authority; the target becomes stale by design).
    SetManualRotation {
        /// New Euler rotation in degrees.
        rotation: Vec3,
    },

    /// Manually set the look-at target (switches to manual authority).
    SetManualTarget {
        /// New look-at target.
        target: Vec3,
    },

    /// Re-frame at the given distance along the default viewing angle and
    /// return authority to orbit.
    ResetToFrame {
        /// Point to look at.
        target: Vec3,
        /// Eye distance from the target.
        distance: f32,
    },

    /// Flip between orbit and manual authority.
    ToggleAuthority,

    // ── Playback ────────────────────────────────────────────────────
    /// Switch the active animation clip (`None` deselects).
    SelectClip {
        /// Clip name, or `None` for no animation.
        name: Option<String>,
    },

    /// Apply a play/pause/stop transition to the active clip.
    SetPlayback {
        /// Requested status.
        status: PlaybackStatus,
    },

    /// Seek the active clip to a fraction of its duration.
    Scrub {
        /// Position in `[0, 1]`.
        progress: f32,
    },
}
