//! Per-asset orchestration: load sequencing, visibility gating, command
//! dispatch.
//!
//! The load sequence is order-sensitive: metadata extraction completes and
//! the initial pose is committed *before* the model is released for display,
//! and the actual reveal is deferred to the frame after the commit - so a
//! default pose is never visible, not even for one frame.

use crate::asset::{AssetGraph, AssetId, SceneInspector, SceneSettings};
use crate::camera::CameraAuthority;
use crate::command::ViewerCommand;
use crate::error::ViewerError;
use crate::options::Options;
use crate::playback::{ClipAction, PlaybackController, ScrubHandle};

/// Display state of the loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// No committed pose yet; the model must not be drawn.
    #[default]
    Hidden,
    /// Pose committed; reveal on the next frame tick.
    PendingReveal,
    /// Released for display.
    Visible,
}

/// Defers showing the model until the first camera pose is committed,
/// preventing a visible pop from a default to a computed pose.
#[derive(Debug, Default)]
pub struct VisibilityGate {
    state: Visibility,
}

impl VisibilityGate {
    /// Re-arm to hidden (asset replaced).
    pub fn reset(&mut self) {
        self.state = Visibility::Hidden;
    }

    /// The initial pose has been committed; arm the deferred reveal.
    ///
    /// Only the first commit per load arms the gate - a repeated commit
    /// cannot re-hide or re-arm.
    pub fn pose_committed(&mut self) {
        if self.state == Visibility::Hidden {
            self.state = Visibility::PendingReveal;
        }
    }

    /// Frame tick: flip an armed gate to visible.
    pub fn frame_tick(&mut self) {
        if self.state == Visibility::PendingReveal {
            self.state = Visibility::Visible;
        }
    }

    /// Current display state.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.state
    }
}

/// The viewer session: owns all per-asset state and replaces it wholesale on
/// every load.
///
/// Generic over the renderer's [`ClipAction`] handle type. All methods run
/// on the single logical thread of event dispatch.
#[derive(Debug)]
pub struct ViewerSession<A: ClipAction> {
    options: Options,
    inspector: SceneInspector,
    camera: CameraAuthority,
    playback: PlaybackController<A>,
    gate: VisibilityGate,
    settings: Option<SceneSettings>,
    /// Monotonic load generation; identifies the asset whose extraction
    /// results are still welcome.
    generation: u64,
}

impl<A: ClipAction> ViewerSession<A> {
    /// New session with no asset loaded.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let kiosk = options.camera.kiosk;
        Self {
            options,
            inspector: SceneInspector::new(),
            camera: CameraAuthority::new(kiosk),
            playback: PlaybackController::new(),
            gate: VisibilityGate::default(),
            settings: None,
            generation: 0,
        }
    }

    /// Begin loading a new asset.
    ///
    /// Cancels everything belonging to the previous asset: playback actions
    /// are stopped/reset/paused, the visibility gate re-arms to hidden, and
    /// the settings are cleared. Returns the id token that
    /// [`finish_load`](Self::finish_load) must present.
    pub fn begin_load(&mut self) -> AssetId {
        self.generation += 1;
        self.playback.teardown();
        self.gate.reset();
        self.settings = None;
        self.inspector.reset();
        log::info!("load {} armed, previous asset torn down", self.generation);
        AssetId(self.generation)
    }

    /// Complete a load: inspect the graph, commit the initial pose, arm the
    /// reveal, and hand the clip actions to playback.
    ///
    /// Returns `false` (discarding all results) when `id` is stale - i.e.
    /// another `begin_load` happened while this asset was being decoded.
    pub fn finish_load<G: AssetGraph>(
        &mut self,
        id: AssetId,
        graph: &G,
        actions: Vec<(String, A)>,
    ) -> bool {
        if id.0 != self.generation {
            log::warn!(
                "discarding stale load {} (current is {})",
                id.0,
                self.generation
            );
            return false;
        }

        let Some(settings) =
            self.inspector.inspect(id, graph, &self.options.camera)
        else {
            return false;
        };

        // Pose commit strictly precedes the gate arming; the reveal itself
        // waits for the next frame tick.
        self.camera.commit_initial_pose(&settings.camera);
        self.gate.pose_committed();

        self.playback
            .load_clips(actions, self.options.playback.autoplay);

        self.settings = Some(settings);
        true
    }

    /// Render-frame tick: advance the deferred reveal and refresh playback
    /// progress.
    pub fn frame_tick(&mut self) {
        self.gate.frame_tick();
        self.playback.sync_progress();
    }

    /// Dispatch an interactive command to the owning controller.
    ///
    /// Camera degeneracies never error (they are recovered locally); only
    /// playback resolution failures propagate, for the host UI to present.
    pub fn execute(&mut self, cmd: ViewerCommand) -> Result<(), ViewerError> {
        match cmd {
            ViewerCommand::OrbitChanged {
                position,
                target,
                rotation,
            } => {
                let _ = self.camera.on_orbit_change(position, target, rotation);
                Ok(())
            }
            ViewerCommand::SetManualPosition { position } => {
                self.camera.set_manual_position(position);
                Ok(())
            }
            ViewerCommand::SetManualRotation { rotation } => {
                self.camera.set_manual_rotation(rotation);
                Ok(())
            }
            ViewerCommand::SetManualTarget { target } => {
                self.camera.set_manual_target(target);
                Ok(())
            }
            ViewerCommand::ResetToFrame { target, distance } => {
                let _ = self.camera.reset_to_frame(target, distance);
                Ok(())
            }
            ViewerCommand::ToggleAuthority => {
                self.camera.toggle_authority();
                Ok(())
            }
            ViewerCommand::SelectClip { name } => {
                self.playback.select_clip(name.as_deref())
            }
            ViewerCommand::SetPlayback { status } => {
                self.playback.set_status(status)
            }
            ViewerCommand::Scrub { progress } => self.playback.scrub(progress),
        }
    }

    /// The camera authority controller.
    #[must_use]
    pub fn camera(&self) -> &CameraAuthority {
        &self.camera
    }

    /// The playback controller.
    #[must_use]
    pub fn playback(&self) -> &PlaybackController<A> {
        &self.playback
    }

    /// The scrub contract object for the timeline widget.
    pub fn scrub_handle(&mut self) -> &mut dyn ScrubHandle {
        &mut self.playback
    }

    /// Settings extracted from the current asset, if a load completed.
    #[must_use]
    pub fn settings(&self) -> Option<&SceneSettings> {
        self.settings.as_ref()
    }

    /// Current display state of the model.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.gate.visibility()
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::asset::{
        AssetGraph, AuthoredCamera, BoundingVolume, ClipInfo, LightInfo,
    };
    use crate::camera::AuthorityMode;
    use crate::playback::{ClipAction, PlaybackStatus};

    /// Inert action; session tests only care about orchestration.
    #[derive(Debug, Default)]
    struct NullAction {
        duration: f32,
        time: f32,
        paused: bool,
        running: bool,
    }

    impl NullAction {
        fn new(duration: f32) -> Self {
            Self {
                duration,
                ..Self::default()
            }
        }
    }

    impl ClipAction for NullAction {
        fn play(&mut self) {
            self.running = true;
            self.paused = false;
        }
        fn stop(&mut self) {
            self.running = false;
            self.time = 0.0;
        }
        fn set_paused(&mut self, paused: bool) {
            self.paused = paused;
        }
        fn paused(&self) -> bool {
            self.paused
        }
        fn running(&self) -> bool {
            self.running
        }
        fn set_time(&mut self, seconds: f32) {
            self.time = seconds;
        }
        fn time(&self) -> f32 {
            self.time
        }
        fn duration(&self) -> f32 {
            self.duration
        }
    }

    struct CubeAsset;

    impl AssetGraph for CubeAsset {
        fn authored_camera(&self) -> Option<AuthoredCamera> {
            None
        }
        fn lights(&self) -> Vec<LightInfo> {
            Vec::new()
        }
        fn clips(&self) -> Vec<ClipInfo> {
            vec![ClipInfo {
                name: Some("Spin".into()),
                duration: 4.0,
            }]
        }
        fn bounding_volume(&self) -> BoundingVolume {
            BoundingVolume {
                center: Vec3::ZERO,
                half_extents: Vec3::ONE,
            }
        }
    }

    /// Authored camera hovering over the scene, aimed straight down.
    struct TopDownAsset;

    impl AssetGraph for TopDownAsset {
        fn authored_camera(&self) -> Option<AuthoredCamera> {
            Some(AuthoredCamera {
                position: Vec3::new(0.0, 5.0, 0.0),
                orientation: Quat::from_rotation_x(
                    -std::f32::consts::FRAC_PI_2,
                ),
                fovy: 45.0,
                znear: 0.1,
                zfar: 100.0,
                zoom: 1.0,
            })
        }
        fn lights(&self) -> Vec<LightInfo> {
            Vec::new()
        }
        fn clips(&self) -> Vec<ClipInfo> {
            Vec::new()
        }
        fn bounding_volume(&self) -> BoundingVolume {
            BoundingVolume {
                center: Vec3::ZERO,
                half_extents: Vec3::ONE,
            }
        }
    }

    fn loaded_session() -> ViewerSession<NullAction> {
        let mut session = ViewerSession::new(Options::default());
        let id = session.begin_load();
        assert!(session.finish_load(
            id,
            &CubeAsset,
            vec![("Spin".to_owned(), NullAction::new(4.0))]
        ));
        session
    }

    #[test]
    fn model_hidden_until_frame_after_commit() {
        let mut session = ViewerSession::<NullAction>::new(Options::default());
        assert_eq!(session.visibility(), Visibility::Hidden);

        let id = session.begin_load();
        assert_eq!(session.visibility(), Visibility::Hidden);

        assert!(session.finish_load(
            id,
            &CubeAsset,
            vec![("Spin".to_owned(), NullAction::new(4.0))]
        ));
        // Pose is committed, but the reveal waits one frame.
        assert_eq!(session.visibility(), Visibility::PendingReveal);

        session.frame_tick();
        assert_eq!(session.visibility(), Visibility::Visible);
    }

    #[test]
    fn stale_load_results_are_discarded() {
        let mut session = ViewerSession::<NullAction>::new(Options::default());
        let stale = session.begin_load();
        // A second load starts before the first finishes decoding.
        let current = session.begin_load();

        assert!(!session.finish_load(stale, &CubeAsset, Vec::new()));
        assert_eq!(session.visibility(), Visibility::Hidden);
        assert!(session.settings().is_none());

        assert!(session.finish_load(
            current,
            &CubeAsset,
            vec![("Spin".to_owned(), NullAction::new(4.0))]
        ));
        assert!(session.settings().is_some());
    }

    #[test]
    fn reload_tears_down_and_rehides() {
        let mut session = loaded_session();
        session.frame_tick();
        assert_eq!(session.visibility(), Visibility::Visible);
        assert_eq!(
            session.playback().state().status,
            PlaybackStatus::Playing
        );

        let _id = session.begin_load();
        assert_eq!(session.visibility(), Visibility::Hidden);
        assert_eq!(session.playback().state().active_clip, None);
        assert!(session.settings().is_none());
    }

    #[test]
    fn load_seeds_default_clip_playing() {
        let session = loaded_session();
        let state = session.playback().state();
        assert_eq!(state.active_clip.as_deref(), Some("Spin"));
        assert_eq!(state.status, PlaybackStatus::Playing);
    }

    #[test]
    fn top_down_authored_camera_commits_finite_rotation() {
        let mut session = ViewerSession::<NullAction>::new(Options::default());
        let id = session.begin_load();
        assert!(session.finish_load(id, &TopDownAsset, Vec::new()));

        let rot = session.camera().pose().rotation;
        assert!(
            rot.x.is_finite() && rot.y.is_finite() && rot.z.is_finite(),
            "committed rotation was {rot}"
        );
        assert!((rot.x - (-90.0)).abs() < 0.05, "pitch was {}", rot.x);
    }

    #[test]
    fn commands_route_to_camera_authority() {
        let mut session = loaded_session();
        session
            .execute(ViewerCommand::SetManualPosition {
                position: Vec3::new(1.0, 2.0, 3.0),
            })
            .unwrap();
        assert_eq!(session.camera().mode(), AuthorityMode::Manual);

        // Orbit writes bounce off manual authority without erroring.
        session
            .execute(ViewerCommand::OrbitChanged {
                position: Vec3::ZERO,
                target: Vec3::ZERO,
                rotation: Vec3::ZERO,
            })
            .unwrap();
        assert_eq!(
            session.camera().pose().position,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn playback_errors_propagate_to_caller() {
        let mut session = loaded_session();
        let err = session
            .execute(ViewerCommand::SelectClip {
                name: Some("Ghost".to_owned()),
            })
            .unwrap_err();
        assert!(matches!(err, ViewerError::ClipUnavailable(_)));
    }

    #[test]
    fn scrub_handle_contract() {
        let mut session = loaded_session();
        let handle = session.scrub_handle();
        assert_eq!(handle.duration(), Some(4.0));
        handle.scrub(0.5).unwrap();
        assert_eq!(session.playback().state().progress, 0.5);
    }
}
