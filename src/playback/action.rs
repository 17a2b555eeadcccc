//! Renderer-side playback handles.

/// The runtime handle driving one clip's playback, supplied by the external
/// renderer (one per discovered clip).
///
/// Semantics the renderer must honor:
/// - [`play`](Self::play) starts looped playback from the current time and
///   clears the paused flag.
/// - [`stop`](Self::stop) halts playback and resets time to zero.
/// - A paused action holds its time frozen; writing time into a frozen
///   action is *not* guaranteed to be re-evaluated until the paused flag is
///   cycled (the controller's scrub path does exactly that).
pub trait ClipAction {
    /// Begin looped playback from the current time.
    fn play(&mut self);

    /// Halt playback and reset time to zero.
    fn stop(&mut self);

    /// Freeze or unfreeze the action at its current time.
    fn set_paused(&mut self, paused: bool);

    /// Whether the action is frozen.
    fn paused(&self) -> bool;

    /// Whether the action is scheduled (playing or paused mid-clip).
    fn running(&self) -> bool;

    /// Seek to an absolute time in seconds.
    fn set_time(&mut self, seconds: f32);

    /// Current playback time in seconds.
    fn time(&self) -> f32;

    /// Clip duration in seconds.
    fn duration(&self) -> f32;
}

/// The narrow contract the scrub UI needs: seek by fraction, read duration.
///
/// Passed by reference to the timeline widget instead of handing it the
/// whole playback controller.
pub trait ScrubHandle {
    /// Seek the active clip to `progress * duration`. Errors if no action
    /// is resolvable for the active clip.
    fn scrub(&mut self, progress: f32) -> Result<(), crate::ViewerError>;

    /// Duration of the active clip in seconds, if one is active.
    fn duration(&self) -> Option<f32>;
}
