// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the rotation, zoom and fullscreen controllers and the
//! pointer mapper, and enforces the rules that span them:
//! - a rotation drag cancels auto-rotation (inside [`RotationState`])
//! - any frame change resets zoom and pan
//! - any fullscreen change resets zoom and switches zoom limits
//! - zoom-in and panning are only reachable from a still view

use crate::application::port::{FullscreenError, FullscreenPort, Scheduler, TimerHandle};
use crate::diagnostics::{
    DiagnosticsHandle, UserAction, ViewerStateEvent, WarningEvent, WarningType,
};
use crate::domain::frame::{FrameCount, FrameIndex, FrameSet, ObjectId};
use crate::domain::ui::ZoomLimits;
use crate::i18n::fluent::I18n;
use crate::ui::state::{
    FullscreenCoordinator, FullscreenRequest, RotationMode, RotationSettings, RotationState,
    ZoomState,
};
use crate::ui::viewer::pointer::{self, PointerAction, PointerInput, PointerMapper};
use crate::ui::viewer::{controls, pane};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Column, Id};
use iced::{Element, Length, Point, Size, Task, Vector};

/// Identifier used for the frame pane scrollable widget.
pub const SCROLLABLE_ID: &str = "turntable-frame-scrollable";

/// Caller-supplied configuration of one viewer instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerProps {
    /// Object whose frames are shown.
    pub object_id: ObjectId,
    /// Number of frames (default 36).
    pub frame_count: FrameCount,
    /// Start auto-rotating on mount.
    pub auto_rotate: bool,
    /// First frame shown, clamped into `[1, N]` (default 1).
    pub start_index: i64,
    /// Expose the fullscreen control (default true).
    pub allow_fullscreen: bool,
}

impl ViewerProps {
    /// Props with default values for the given object.
    #[must_use]
    pub fn new(object_id: ObjectId) -> Self {
        Self {
            object_id,
            frame_count: FrameCount::default(),
            auto_rotate: false,
            start_index: 1,
            allow_fullscreen: true,
        }
    }
}

/// Tuning values shared by all viewer instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    /// Drag threshold and auto-rotate period.
    pub rotation: RotationSettings,
    /// Zoom limits while windowed.
    pub windowed_zoom: ZoomLimits,
    /// Zoom limits while fullscreen.
    pub fullscreen_zoom: ZoomLimits,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            rotation: RotationSettings::default(),
            windowed_zoom: ZoomLimits::TURNTABLE,
            fullscreen_zoom: ZoomLimits::GALLERY,
        }
    }
}

/// Messages emitted by viewer-related widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Pointer(PointerInput),
    ToggleAutoRotate,
    /// Jump to a 1-based position (wrapped).
    SetIndex(i64),
    /// Relative move by a signed number of frames (wrapped).
    Step(i64),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleFullscreen,
    ExitFullscreen,
    /// Platform notification: the window is (or is no longer) fullscreen.
    FullscreenChanged(bool),
    AutoRotateTick(TimerHandle),
    /// Size of the frame pane changed (window resize).
    ViewportResized(Size),
    /// The frame pane scrollable moved (wheel, keys or a programmatic snap).
    Scrolled {
        viewport: Size,
        relative: Vector,
    },
}

impl From<controls::Message> for Message {
    fn from(message: controls::Message) -> Self {
        match message {
            controls::Message::Previous => Message::Step(-1),
            controls::Message::Next => Message::Step(1),
            controls::Message::Seek(position) => Message::SetIndex(i64::from(position)),
            controls::Message::ToggleAutoRotate => Message::ToggleAutoRotate,
            controls::Message::ZoomIn => Message::ZoomIn,
            controls::Message::ZoomOut => Message::ZoomOut,
            controls::Message::ResetZoom => Message::ResetZoom,
            controls::Message::ToggleFullscreen => Message::ToggleFullscreen,
        }
    }
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A different frame is now displayed.
    FrameChanged(FrameIndex),
    /// A fullscreen request or exit was accepted by the port.
    FullscreenRequested,
    /// The platform rejected a fullscreen request; nothing changed.
    FullscreenRejected(FullscreenError),
}

/// What the pane shows for the current frame.
#[derive(Debug, Clone)]
pub enum FrameContent {
    /// The image is still being fetched.
    Loading,
    /// The image is ready to draw.
    Ready(iced::widget::image::Handle),
    /// The image could not be fetched; carries the i18n key of the reason.
    Unavailable(&'static str),
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub frame: FrameContent,
    /// Transient message shown in the control bar (already translated).
    pub notice: Option<String>,
}

/// Complete viewer component state.
pub struct State<S: Scheduler, F: FullscreenPort> {
    frames: FrameSet,
    rotation: RotationState<S>,
    zoom: ZoomState,
    fullscreen: FullscreenCoordinator<F>,
    pointer: PointerMapper,
    settings: ViewerSettings,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Scheduler, F: FullscreenPort> State<S, F> {
    /// Mounts a viewer: clamps the start frame, registers the fullscreen
    /// listener and starts auto-rotation when requested.
    pub fn mount(
        props: ViewerProps,
        settings: ViewerSettings,
        scheduler: S,
        fullscreen_port: F,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> Self {
        let frames = FrameSet::new(props.object_id, props.frame_count);
        let mut state = Self {
            rotation: RotationState::new(
                frames.count(),
                props.start_index,
                settings.rotation,
                scheduler,
            ),
            frames,
            zoom: ZoomState::new(settings.windowed_zoom),
            fullscreen: FullscreenCoordinator::new(fullscreen_port, props.allow_fullscreen),
            pointer: PointerMapper::default(),
            settings,
            diagnostics,
        };

        state.log_state(ViewerStateEvent::Mounted {
            object_id: state.frames.object_id().to_string(),
            frame_count: state.frames.count().get(),
        });
        if props.auto_rotate {
            state.rotation.toggle_auto_rotate();
            state.log_mode();
        }
        state
    }

    /// Returns the frame currently displayed.
    #[must_use]
    pub fn current(&self) -> FrameIndex {
        self.rotation.current()
    }

    /// Returns the frame set being viewed.
    #[must_use]
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Returns the active rotation mode.
    #[must_use]
    pub fn mode(&self) -> &RotationMode {
        self.rotation.mode()
    }

    /// Returns the zoom and pan state.
    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Returns the authoritative fullscreen flag.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    /// Returns the scheduler (the application turns its timer into a subscription).
    #[must_use]
    pub fn scheduler(&self) -> &S {
        self.rotation.scheduler()
    }

    /// Returns the fullscreen port (the application queries the window mode).
    #[must_use]
    pub fn fullscreen_port(&self) -> &F {
        self.fullscreen.port()
    }

    /// Returns the fullscreen port (the application flushes pending window commands).
    pub fn fullscreen_port_mut(&mut self) -> &mut F {
        self.fullscreen.port_mut()
    }

    /// Returns the settings the viewer was mounted with.
    #[must_use]
    pub fn settings(&self) -> ViewerSettings {
        self.settings
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Pointer(input) => match self.pointer.map(input) {
                Some(action) => self.handle_pointer_action(action),
                None => (Effect::None, Task::none()),
            },
            Message::ToggleAutoRotate => {
                let running = self.rotation.toggle_auto_rotate();
                if running {
                    self.zoom.end_pan();
                }
                self.log_action(UserAction::ToggleAutoRotate { running });
                self.log_mode();
                (Effect::None, Task::none())
            }
            Message::SetIndex(position) => {
                self.log_action(UserAction::SetFrame { position });
                let changed = self.rotation.set_index(position);
                (self.frame_changed(changed), Task::none())
            }
            Message::Step(steps) => {
                self.log_action(UserAction::StepFrame { steps });
                let changed = self.rotation.step(steps);
                (self.frame_changed(changed), Task::none())
            }
            Message::ZoomIn => {
                // Zooming is for inspecting a still frame
                if self.rotation.mode().is_idle() && self.zoom.zoom_in() {
                    self.log_action(UserAction::ZoomIn);
                    return (Effect::None, self.snap_to_pan());
                }
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                if self.zoom.zoom_out() {
                    self.log_action(UserAction::ZoomOut);
                    return (Effect::None, self.snap_to_pan());
                }
                (Effect::None, Task::none())
            }
            Message::ResetZoom => {
                if self.zoom.reset() {
                    self.log_action(UserAction::ResetZoom);
                }
                (Effect::None, Task::none())
            }
            Message::ToggleFullscreen => {
                self.log_action(UserAction::ToggleFullscreen);
                let outcome = self.fullscreen.toggle();
                (self.fullscreen_outcome(outcome), Task::none())
            }
            Message::ExitFullscreen => {
                let outcome = self.fullscreen.exit();
                if outcome != FullscreenRequest::Skipped {
                    self.log_action(UserAction::ExitFullscreen);
                }
                (self.fullscreen_outcome(outcome), Task::none())
            }
            Message::FullscreenChanged(active) => {
                if self.fullscreen.on_platform_change(active) {
                    let limits = if active {
                        self.settings.fullscreen_zoom
                    } else {
                        self.settings.windowed_zoom
                    };
                    self.zoom.set_limits(limits);
                    self.log_state(ViewerStateEvent::FullscreenChanged { active });
                }
                (Effect::None, Task::none())
            }
            Message::AutoRotateTick(handle) => {
                let changed = self.rotation.tick(handle);
                (self.frame_changed(changed), Task::none())
            }
            Message::ViewportResized(size) => {
                self.zoom.set_viewport(size);
                (Effect::None, Task::none())
            }
            Message::Scrolled { viewport, relative } => {
                self.zoom.set_viewport(viewport);
                self.zoom.sync_scroll_position(relative);
                (Effect::None, Task::none())
            }
        }
    }

    fn handle_pointer_action(&mut self, action: PointerAction) -> (Effect, Task<Message>) {
        match action {
            PointerAction::Press(position) => {
                if self.zoom.is_zoomed() && self.rotation.mode().is_idle() {
                    self.zoom.start_pan(position);
                } else {
                    self.rotation.start_drag(position.x);
                    self.log_action(UserAction::StartDrag);
                    self.log_mode();
                }
                (Effect::None, Task::none())
            }
            PointerAction::Move(position) => self.handle_pointer_moved(position),
            PointerAction::Release => {
                if self.zoom.is_panning() {
                    self.zoom.end_pan();
                } else if self.rotation.mode().is_dragging() {
                    self.rotation.end_drag();
                    self.log_action(UserAction::EndDrag);
                    self.log_mode();
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn handle_pointer_moved(&mut self, position: Point) -> (Effect, Task<Message>) {
        if self.zoom.is_panning() {
            let task = if self.zoom.pan_to(position) {
                self.snap_to_pan()
            } else {
                Task::none()
            };
            return (Effect::None, task);
        }
        let changed = self.rotation.drag_to(position.x);
        (self.frame_changed(changed), Task::none())
    }

    fn frame_changed(&mut self, changed: Option<FrameIndex>) -> Effect {
        match changed {
            Some(index) => {
                self.zoom.reset();
                Effect::FrameChanged(index)
            }
            None => Effect::None,
        }
    }

    fn fullscreen_outcome(&mut self, outcome: FullscreenRequest) -> Effect {
        match outcome {
            FullscreenRequest::Skipped => Effect::None,
            FullscreenRequest::Sent => Effect::FullscreenRequested,
            FullscreenRequest::Rejected(error) => {
                eprintln!("[WARN] Fullscreen request rejected: {error}");
                if let Some(diagnostics) = &self.diagnostics {
                    diagnostics.log_warning(WarningEvent::new(
                        WarningType::FullscreenRejected,
                        error.to_string(),
                    ));
                }
                Effect::FullscreenRejected(error)
            }
        }
    }

    fn snap_to_pan(&self) -> Task<Message> {
        let position = self.zoom.scroll_position();
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: position.x,
                y: position.y,
            },
        )
    }

    fn log_action(&self, action: UserAction) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_action(action);
        }
    }

    fn log_state(&self, state: ViewerStateEvent) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_state(state);
        }
    }

    fn log_mode(&self) {
        self.log_state(ViewerStateEvent::ModeChanged {
            mode: self.rotation.mode().name().to_string(),
        });
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let pane_view = pane::view(pane::ViewModel {
            frame: env.frame,
            zoom_level: self.zoom.level().value(),
            cursor: pointer::cursor_interaction(self.rotation.mode(), self.zoom.is_panning()),
            scrollable_id: SCROLLABLE_ID,
            i18n: env.i18n,
        });

        let controls_view = controls::view(
            controls::ViewContext { i18n: env.i18n },
            controls::ViewModel {
                current: self.current(),
                count: self.frames.count(),
                auto_rotating: self.rotation.mode().is_auto_rotating(),
                zoom: &self.zoom,
                zoom_in_enabled: self.rotation.mode().is_idle() && !self.zoom.is_max(),
                fullscreen: self.fullscreen.is_active(),
                fullscreen_allowed: self.fullscreen.is_allowed(),
                notice: env.notice,
            },
        )
        .map(Message::from);

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(pane_view)
            .push(controls_view)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::test_utils::{FakeFullscreen, ManualScheduler};

    type TestViewer = State<ManualScheduler, FakeFullscreen>;

    fn mount_with(props: ViewerProps) -> (TestViewer, ManualScheduler, FakeFullscreen) {
        let scheduler = ManualScheduler::default();
        let port = FakeFullscreen::default();
        let viewer = State::mount(
            props,
            ViewerSettings::default(),
            scheduler.clone(),
            port.clone(),
            None,
        );
        (viewer, scheduler, port)
    }

    fn mount() -> (TestViewer, ManualScheduler, FakeFullscreen) {
        mount_with(ViewerProps::new(ObjectId::new("car-42")))
    }

    fn pointer(viewer: &mut TestViewer, input: PointerInput) -> Effect {
        viewer.handle_message(Message::Pointer(input)).0
    }

    fn drag(viewer: &mut TestViewer, from: f32, to: f32) -> Effect {
        pointer(viewer, PointerInput::MouseMoved(Point::new(from, 0.0)));
        pointer(viewer, PointerInput::MousePressed);
        let effect = pointer(viewer, PointerInput::MouseMoved(Point::new(to, 0.0)));
        pointer(viewer, PointerInput::MouseReleased);
        effect
    }

    #[test]
    fn mount_uses_default_props() {
        let (viewer, scheduler, port) = mount();
        assert_eq!(viewer.current(), FrameIndex::FIRST);
        assert_eq!(viewer.frames().count().get(), 36);
        assert!(viewer.mode().is_idle());
        assert!(scheduler.active_handles().is_empty());
        assert_eq!(port.listener_count(), 1);
    }

    #[test]
    fn mount_with_auto_rotate_starts_timer() {
        let props = ViewerProps {
            auto_rotate: true,
            start_index: 99,
            ..ViewerProps::new(ObjectId::new("car"))
        };
        let (viewer, scheduler, _port) = mount_with(props);
        assert!(viewer.mode().is_auto_rotating());
        assert_eq!(viewer.current().value(), 36);
        assert!(scheduler.single_active().is_some());
    }

    #[test]
    fn pointer_drag_rotates_and_returns_to_idle() {
        let (mut viewer, _scheduler, _port) = mount();
        let effect = drag(&mut viewer, 100.0, 131.0);
        assert_eq!(effect, Effect::FrameChanged(FrameIndex::FIRST.offset(3, FrameCount::new(36))));
        assert_eq!(viewer.current().value(), 4);
        assert!(viewer.mode().is_idle());
    }

    #[test]
    fn frame_change_resets_zoom() {
        let (mut viewer, _scheduler, _port) = mount();
        for _ in 0..5 {
            viewer.handle_message(Message::ZoomIn);
        }
        assert_eq!(viewer.zoom().level().value(), 2.0);

        viewer.handle_message(Message::Step(1));
        assert!(!viewer.zoom().is_zoomed());
    }

    #[test]
    fn zoom_in_refused_while_auto_rotating() {
        let (mut viewer, _scheduler, _port) = mount();
        viewer.handle_message(Message::ToggleAutoRotate);
        viewer.handle_message(Message::ZoomIn);
        assert!(!viewer.zoom().is_zoomed());
    }

    #[test]
    fn auto_rotate_ends_pan_gesture() {
        let (mut viewer, _scheduler, _port) = mount();
        viewer.handle_message(Message::ViewportResized(Size::new(400.0, 300.0)));
        viewer.handle_message(Message::ZoomIn);
        pointer(&mut viewer, PointerInput::MouseMoved(Point::new(100.0, 100.0)));
        pointer(&mut viewer, PointerInput::MousePressed);
        assert!(viewer.zoom().is_panning());

        viewer.handle_message(Message::ToggleAutoRotate);
        assert!(viewer.mode().is_auto_rotating());
        assert!(!viewer.zoom().is_panning());
    }

    #[test]
    fn press_while_zoomed_pans_instead_of_rotating() {
        let (mut viewer, _scheduler, _port) = mount();
        viewer.handle_message(Message::ViewportResized(Size::new(400.0, 300.0)));
        viewer.handle_message(Message::ZoomIn);

        let effect = drag(&mut viewer, 100.0, 140.0);
        assert_eq!(effect, Effect::None);
        assert_eq!(viewer.current(), FrameIndex::FIRST);
        assert!(viewer.zoom().pan().x > 0.0);
        assert!(viewer.mode().is_idle());
        assert!(!viewer.zoom().is_panning());
    }

    #[test]
    fn stale_tick_after_drag_is_ignored() {
        let (mut viewer, scheduler, _port) = mount();
        viewer.handle_message(Message::ToggleAutoRotate);
        let handle = scheduler.single_active().expect("timer running");

        pointer(&mut viewer, PointerInput::MouseMoved(Point::new(10.0, 0.0)));
        pointer(&mut viewer, PointerInput::MousePressed);
        assert!(viewer.mode().is_dragging());
        assert!(scheduler.active_handles().is_empty());

        let (effect, _) = viewer.handle_message(Message::AutoRotateTick(handle));
        assert_eq!(effect, Effect::None);
        assert_eq!(viewer.current(), FrameIndex::FIRST);
    }

    #[test]
    fn fullscreen_flag_follows_notifications_only() {
        let (mut viewer, _scheduler, port) = mount();
        let (effect, _) = viewer.handle_message(Message::ToggleFullscreen);
        assert_eq!(effect, Effect::FullscreenRequested);
        assert_eq!(port.enter_requests(), 1);
        assert!(!viewer.is_fullscreen());

        viewer.handle_message(Message::FullscreenChanged(true));
        assert!(viewer.is_fullscreen());
        assert_eq!(viewer.zoom().limits(), ZoomLimits::GALLERY);
    }

    #[test]
    fn fullscreen_change_resets_zoom() {
        let (mut viewer, _scheduler, _port) = mount();
        viewer.handle_message(Message::ZoomIn);
        viewer.handle_message(Message::FullscreenChanged(true));
        assert!(!viewer.zoom().is_zoomed());

        viewer.handle_message(Message::ZoomIn);
        viewer.handle_message(Message::FullscreenChanged(false));
        assert!(!viewer.zoom().is_zoomed());
        assert_eq!(viewer.zoom().limits(), ZoomLimits::TURNTABLE);
    }

    #[test]
    fn rejected_fullscreen_is_reported_and_logged() {
        let mut collector = DiagnosticsCollector::default();
        let port = FakeFullscreen::rejecting(FullscreenError::NoSurface);
        let mut viewer = State::mount(
            ViewerProps::new(ObjectId::new("car")),
            ViewerSettings::default(),
            ManualScheduler::default(),
            port,
            Some(collector.handle()),
        );

        let (effect, _) = viewer.handle_message(Message::ToggleFullscreen);
        assert_eq!(effect, Effect::FullscreenRejected(FullscreenError::NoSurface));
        assert!(!viewer.is_fullscreen());

        collector.process_pending();
        assert!(collector
            .iter()
            .any(|event| matches!(event.kind, DiagnosticEventKind::Warning { .. })));
    }

    #[test]
    fn escape_exit_is_noop_when_windowed() {
        let (mut viewer, _scheduler, port) = mount();
        let (effect, _) = viewer.handle_message(Message::ExitFullscreen);
        assert_eq!(effect, Effect::None);
        assert_eq!(port.exit_requests(), 0);
    }

    #[test]
    fn disallowed_fullscreen_is_skipped() {
        let props = ViewerProps {
            allow_fullscreen: false,
            ..ViewerProps::new(ObjectId::new("car"))
        };
        let (mut viewer, _scheduler, port) = mount_with(props);
        let (effect, _) = viewer.handle_message(Message::ToggleFullscreen);
        assert_eq!(effect, Effect::None);
        assert_eq!(port.enter_requests(), 0);
    }

    #[test]
    fn unmount_cancels_timer_and_listener() {
        let (mut viewer, scheduler, port) = mount();
        viewer.handle_message(Message::ToggleAutoRotate);
        assert_eq!(scheduler.active_handles().len(), 1);

        drop(viewer);
        assert!(scheduler.active_handles().is_empty());
        assert_eq!(port.listener_count(), 0);
    }

    #[test]
    fn control_messages_map_to_viewer_messages() {
        assert!(matches!(
            Message::from(controls::Message::Previous),
            Message::Step(-1)
        ));
        assert!(matches!(
            Message::from(controls::Message::Seek(12)),
            Message::SetIndex(12)
        ));
    }
}
