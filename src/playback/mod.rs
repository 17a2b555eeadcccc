//! Embedded-animation playback state machine.

mod action;
mod controller;

pub use action::{ClipAction, ScrubHandle};
pub use controller::{AnimationState, PlaybackController, PlaybackStatus};
