//! The clip playback state machine.
//!
//! Governs which clip is active, its play/pause/stop status, and scrub
//! position, driving one renderer-supplied action per clip. Single-writer by
//! construction: every transition is an explicit, ordered call on one
//! logical thread.

use super::action::{ClipAction, ScrubHandle};
use crate::error::ViewerError;

/// Play state of the active clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Advancing, looped.
    Playing,
    /// Time frozen at its current value.
    Paused,
    /// Not advancing, time reset to zero.
    #[default]
    Stopped,
}

/// Observable playback state, replaced wholesale on asset swap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationState {
    /// Active clip name; `None` when no animation is selected.
    pub active_clip: Option<String>,
    /// Current play state.
    pub status: PlaybackStatus,
    /// Fractional position within the active clip's duration, in `[0, 1]`.
    pub progress: f32,
}

/// Drives one [`ClipAction`] per clip discovered in the asset.
#[derive(Debug)]
pub struct PlaybackController<A: ClipAction> {
    /// Clip name → action, in discovery order.
    actions: Vec<(String, A)>,
    state: AnimationState,
}

impl<A: ClipAction> PlaybackController<A> {
    /// Empty controller: no clips, nothing playing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            state: AnimationState::default(),
        }
    }

    /// Current observable state.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Names of all loaded clips, in discovery order.
    pub fn clip_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|(name, _)| name.as_str())
    }

    /// Replace the clip set for a freshly loaded asset.
    ///
    /// Tears down any previous actions first, then seeds the first clip:
    /// `Playing` when `autoplay` is set, otherwise selected but `Stopped`.
    /// Runs exactly once per asset.
    pub fn load_clips(&mut self, clips: Vec<(String, A)>, autoplay: bool) {
        self.teardown();
        self.actions = clips;

        let Some((first, action)) = self.actions.first_mut() else {
            return;
        };
        self.state.active_clip = Some(first.clone());
        if autoplay {
            action.play();
            self.state.status = PlaybackStatus::Playing;
            log::info!("playback seeded: {first:?} playing");
        }
    }

    /// Switch the active clip.
    ///
    /// The new clip's action is resolved *before* anything is torn down: a
    /// missing action makes the whole transition a no-op and surfaces
    /// [`ViewerError::ClipUnavailable`]. Otherwise the previous action is
    /// stopped and reset before the next one starts - two actions never run
    /// concurrently on the same graph.
    pub fn select_clip(
        &mut self,
        name: Option<&str>,
    ) -> Result<(), ViewerError> {
        if let Some(name) = name {
            if !self.actions.iter().any(|(n, _)| n == name) {
                return Err(ViewerError::ClipUnavailable(name.to_owned()));
            }
        }

        self.stop_active();

        self.state.progress = 0.0;
        match name {
            Some(name) => {
                if let Some((_, action)) =
                    self.actions.iter_mut().find(|(n, _)| n == name)
                {
                    action.play();
                }
                self.state.active_clip = Some(name.to_owned());
                self.state.status = PlaybackStatus::Playing;
            }
            None => {
                self.state.active_clip = None;
                self.state.status = PlaybackStatus::Stopped;
            }
        }
        Ok(())
    }

    /// Apply a play/pause/stop transition to the active clip.
    ///
    /// `Playing` resumes a paused action or starts a stopped one fresh;
    /// `Paused` freezes time without resetting; `Stopped` halts and resets
    /// time to zero. If the active clip's action cannot be resolved the
    /// status is not advanced and the failure is surfaced.
    pub fn set_status(
        &mut self,
        status: PlaybackStatus,
    ) -> Result<(), ViewerError> {
        let previous = self.state.status;
        let action = Self::resolve_mut(
            &mut self.actions,
            self.state.active_clip.as_deref(),
        )?;

        match status {
            PlaybackStatus::Playing => {
                if previous == PlaybackStatus::Paused {
                    action.set_paused(false);
                } else {
                    action.play();
                }
            }
            PlaybackStatus::Paused => action.set_paused(true),
            PlaybackStatus::Stopped => {
                action.stop();
                self.state.progress = 0.0;
            }
        }
        self.state.status = status;
        Ok(())
    }

    /// Duration of the active clip, if one is active and resolvable.
    #[must_use]
    pub fn active_duration(&self) -> Option<f32> {
        let name = self.state.active_clip.as_deref()?;
        self.actions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, action)| action.duration())
    }

    /// Refresh `progress` from the active action's clock (frame tick).
    pub fn sync_progress(&mut self) {
        let Some(name) = self.state.active_clip.as_deref() else {
            return;
        };
        if let Some((_, action)) =
            self.actions.iter().find(|(n, _)| n == name)
        {
            let duration = action.duration();
            if duration > 0.0 {
                self.state.progress =
                    (action.time() / duration).clamp(0.0, 1.0);
            }
        }
    }

    /// Stop, reset, and pause every action before discarding the set.
    ///
    /// Called on asset replacement so no dangling action keeps mutating a
    /// disposed node graph.
    pub fn teardown(&mut self) {
        for (name, action) in &mut self.actions {
            action.stop();
            action.set_paused(true);
            log::debug!("playback action {name:?} torn down");
        }
        self.actions.clear();
        self.state = AnimationState::default();
    }

    /// Stop and reset the currently active action, if any.
    fn stop_active(&mut self) {
        if let Some(name) = self.state.active_clip.clone() {
            if let Some((_, action)) =
                self.actions.iter_mut().find(|(n, _)| *n == name)
            {
                action.stop();
            }
        }
    }

    /// Resolve the active clip's action or surface the failure.
    fn resolve_mut<'a>(
        actions: &'a mut [(String, A)],
        active: Option<&str>,
    ) -> Result<&'a mut A, ViewerError> {
        let name = active.ok_or_else(|| {
            ViewerError::ClipUnavailable("<no clip selected>".to_owned())
        })?;
        actions
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, action)| action)
            .ok_or_else(|| ViewerError::ClipUnavailable(name.to_owned()))
    }
}

impl<A: ClipAction> ScrubHandle for PlaybackController<A> {
    /// Seek the active clip to `progress * duration`.
    ///
    /// A paused action is momentarily unpaused around the time write and
    /// repaused, forcing the renderer to evaluate the pose at the new time -
    /// a pure time write into a frozen action is not re-evaluated. The play
    /// state is unchanged by a scrub.
    fn scrub(&mut self, progress: f32) -> Result<(), ViewerError> {
        let action = Self::resolve_mut(
            &mut self.actions,
            self.state.active_clip.as_deref(),
        )?;

        let progress = progress.clamp(0.0, 1.0);
        let seconds = progress * action.duration();

        if action.paused() {
            action.set_paused(false);
            action.set_time(seconds);
            action.set_paused(true);
        } else {
            action.set_time(seconds);
        }
        self.state.progress = progress;
        Ok(())
    }

    fn duration(&self) -> Option<f32> {
        self.active_duration()
    }
}

impl<A: ClipAction> Default for PlaybackController<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type EventLog = Rc<RefCell<Vec<String>>>;

    /// Scripted action that records every call it receives.
    struct MockAction {
        name: &'static str,
        duration: f32,
        time: f32,
        paused: bool,
        running: bool,
        log: EventLog,
    }

    impl MockAction {
        fn new(name: &'static str, duration: f32, log: &EventLog) -> Self {
            Self {
                name,
                duration,
                time: 0.0,
                paused: false,
                running: false,
                log: Rc::clone(log),
            }
        }

        fn record(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{event}", self.name));
        }
    }

    impl ClipAction for MockAction {
        fn play(&mut self) {
            self.running = true;
            self.paused = false;
            self.record("play");
        }
        fn stop(&mut self) {
            self.running = false;
            self.time = 0.0;
            self.record("stop");
        }
        fn set_paused(&mut self, paused: bool) {
            self.paused = paused;
            self.record(if paused { "pause" } else { "unpause" });
        }
        fn paused(&self) -> bool {
            self.paused
        }
        fn running(&self) -> bool {
            self.running
        }
        fn set_time(&mut self, seconds: f32) {
            self.time = seconds;
            self.record("set_time");
        }
        fn time(&self) -> f32 {
            self.time
        }
        fn duration(&self) -> f32 {
            self.duration
        }
    }

    fn controller_with(
        clips: &[(&'static str, f32)],
        log: &EventLog,
    ) -> PlaybackController<MockAction> {
        let mut controller = PlaybackController::new();
        controller.load_clips(
            clips
                .iter()
                .map(|&(name, duration)| {
                    (name.to_owned(), MockAction::new(name, duration, log))
                })
                .collect(),
            true,
        );
        controller
    }

    #[test]
    fn load_seeds_first_clip_playing() {
        let log = EventLog::default();
        let controller = controller_with(&[("A", 2.0), ("B", 4.0)], &log);

        let state = controller.state();
        assert_eq!(state.active_clip.as_deref(), Some("A"));
        assert_eq!(state.status, PlaybackStatus::Playing);
        assert_eq!(log.borrow().last().map(String::as_str), Some("A:play"));
    }

    #[test]
    fn load_without_autoplay_stays_stopped() {
        let log = EventLog::default();
        let mut controller = PlaybackController::new();
        controller.load_clips(
            vec![("A".to_owned(), MockAction::new("A", 2.0, &log))],
            false,
        );
        assert_eq!(controller.state().status, PlaybackStatus::Stopped);
        assert_eq!(controller.state().active_clip.as_deref(), Some("A"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clip_switch_stops_previous_before_starting_next() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 2.0), ("B", 4.0)], &log);
        log.borrow_mut().clear();

        controller.select_clip(Some("B")).unwrap();

        let events = log.borrow().clone();
        assert_eq!(events, vec!["A:stop".to_owned(), "B:play".to_owned()]);
        assert_eq!(controller.state().active_clip.as_deref(), Some("B"));
        assert_eq!(controller.state().status, PlaybackStatus::Playing);
        assert_eq!(controller.state().progress, 0.0);

        // The displaced action is fully reset, not merely deprioritized.
        let (_, a) = controller
            .actions
            .iter()
            .find(|(n, _)| n == "A")
            .unwrap();
        assert_eq!(a.time(), 0.0);
        assert!(!a.running());
    }

    #[test]
    fn selecting_missing_clip_is_a_reported_noop() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 2.0)], &log);
        log.borrow_mut().clear();

        let err = controller.select_clip(Some("Ghost")).unwrap_err();
        assert!(matches!(err, ViewerError::ClipUnavailable(name) if name == "Ghost"));
        // Nothing advanced, nothing torn down.
        assert_eq!(controller.state().active_clip.as_deref(), Some("A"));
        assert_eq!(controller.state().status, PlaybackStatus::Playing);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn selecting_none_stops_playback() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 2.0)], &log);

        controller.select_clip(None).unwrap();
        assert_eq!(controller.state().active_clip, None);
        assert_eq!(controller.state().status, PlaybackStatus::Stopped);
        assert_eq!(
            log.borrow().last().map(String::as_str),
            Some("A:stop")
        );
    }

    #[test]
    fn pause_freezes_and_resume_unpauses() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 4.0)], &log);

        controller.set_status(PlaybackStatus::Paused).unwrap();
        assert_eq!(controller.state().status, PlaybackStatus::Paused);

        controller.set_status(PlaybackStatus::Playing).unwrap();
        assert_eq!(controller.state().status, PlaybackStatus::Playing);
        assert_eq!(
            log.borrow().last().map(String::as_str),
            Some("A:unpause")
        );
    }

    #[test]
    fn stop_resets_progress() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 4.0)], &log);
        controller.scrub(0.75).unwrap();
        assert_eq!(controller.state().progress, 0.75);

        controller.set_status(PlaybackStatus::Stopped).unwrap();
        assert_eq!(controller.state().status, PlaybackStatus::Stopped);
        assert_eq!(controller.state().progress, 0.0);
    }

    #[test]
    fn scrub_sets_exact_time() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 4.0)], &log);

        controller.scrub(0.5).unwrap();
        // duration 4.0s, scrub(0.5) → 2.0s exactly.
        let time = controller
            .actions
            .iter()
            .find(|(n, _)| n == "A")
            .map(|(_, a)| a.time())
            .unwrap();
        assert_eq!(time, 2.0);
    }

    #[test]
    fn scrub_while_paused_cycles_pause_but_keeps_status() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 4.0)], &log);
        controller.set_status(PlaybackStatus::Paused).unwrap();
        log.borrow_mut().clear();

        controller.scrub(0.25).unwrap();

        // Mandatory unpause→write→repause cycle for frozen actions.
        let events = log.borrow().clone();
        assert_eq!(
            events,
            vec![
                "A:unpause".to_owned(),
                "A:set_time".to_owned(),
                "A:pause".to_owned()
            ]
        );
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
        assert_eq!(controller.state().progress, 0.25);
    }

    #[test]
    fn scrub_clamps_progress() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 4.0)], &log);

        controller.scrub(2.5).unwrap();
        assert_eq!(controller.state().progress, 1.0);
        controller.scrub(-1.0).unwrap();
        assert_eq!(controller.state().progress, 0.0);
    }

    #[test]
    fn status_without_active_clip_is_an_error() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 2.0)], &log);
        controller.select_clip(None).unwrap();

        assert!(controller.set_status(PlaybackStatus::Playing).is_err());
        assert_eq!(controller.state().status, PlaybackStatus::Stopped);
    }

    #[test]
    fn teardown_stops_resets_and_pauses_everything() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 2.0), ("B", 4.0)], &log);
        log.borrow_mut().clear();

        controller.teardown();

        let events = log.borrow().clone();
        assert_eq!(
            events,
            vec![
                "A:stop".to_owned(),
                "A:pause".to_owned(),
                "B:stop".to_owned(),
                "B:pause".to_owned()
            ]
        );
        assert_eq!(controller.state(), &AnimationState::default());
        assert_eq!(controller.clip_names().count(), 0);
    }

    #[test]
    fn scrub_handle_exposes_duration() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 4.0)], &log);

        let handle: &mut dyn ScrubHandle = &mut controller;
        assert_eq!(handle.duration(), Some(4.0));
        handle.scrub(0.5).unwrap();

        controller.select_clip(None).unwrap();
        assert_eq!(ScrubHandle::duration(&controller), None);
    }

    #[test]
    fn sync_progress_follows_action_clock() {
        let log = EventLog::default();
        let mut controller = controller_with(&[("A", 4.0)], &log);

        if let Some((_, action)) = controller.actions.first_mut() {
            action.time = 1.0;
        }
        controller.sync_progress();
        assert_eq!(controller.state().progress, 0.25);
    }
}
