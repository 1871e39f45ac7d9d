// SPDX-License-Identifier: MPL-2.0
//! Rotation state machine
//!
//! Owns the current frame index and the single interaction mode that
//! drives it. Dragging and auto-rotation are variants of one enum, so they
//! can never be active together, and the auto-rotate timer handle only
//! exists inside the `AutoRotating` variant.
//!
//! ```text
//! Idle ──start_drag──▶ Dragging ──end_drag──▶ Idle
//! Idle ──toggle──────▶ AutoRotating ──toggle──▶ Idle
//! AutoRotating ──start_drag (timer cancelled)──▶ Dragging
//! ```

use super::drag::DragSession;
use crate::application::port::{Scheduler, TimerHandle};
use crate::domain::frame::{FrameCount, FrameIndex};
use crate::domain::ui::{AutoRotatePeriod, DragStepThreshold};

/// Active interaction mode of the rotation viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationMode {
    /// No motion source is active.
    Idle,
    /// A pointer/touch drag is in progress.
    Dragging(DragSession),
    /// The repeating timer advances one frame per tick.
    AutoRotating(TimerHandle),
}

impl RotationMode {
    /// Returns true when no motion source is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, RotationMode::Idle)
    }

    /// Returns true while dragging.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, RotationMode::Dragging(_))
    }

    /// Returns true while auto-rotating.
    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        matches!(self, RotationMode::AutoRotating(_))
    }

    /// Stable name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RotationMode::Idle => "idle",
            RotationMode::Dragging(_) => "dragging",
            RotationMode::AutoRotating(_) => "auto_rotating",
        }
    }
}

/// Tuning values of the rotation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationSettings {
    /// Pointer distance per frame step.
    pub drag_threshold: DragStepThreshold,
    /// Auto-rotate tick period.
    pub auto_rotate_period: AutoRotatePeriod,
}

/// Frame index and interaction mode, driven through a [`Scheduler`].
///
/// Dropping the state cancels a running auto-rotate timer.
#[derive(Debug)]
pub struct RotationState<S: Scheduler> {
    count: FrameCount,
    current: FrameIndex,
    mode: RotationMode,
    settings: RotationSettings,
    scheduler: S,
}

impl<S: Scheduler> RotationState<S> {
    /// Creates an idle state at `start` (clamped into `[1, N]`).
    pub fn new(count: FrameCount, start: i64, settings: RotationSettings, scheduler: S) -> Self {
        Self {
            count,
            current: count.clamp(start),
            mode: RotationMode::Idle,
            settings,
            scheduler,
        }
    }

    /// Returns the frame currently displayed.
    #[must_use]
    pub fn current(&self) -> FrameIndex {
        self.current
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn count(&self) -> FrameCount {
        self.count
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> &RotationMode {
        &self.mode
    }

    /// Returns the tuning values.
    #[must_use]
    pub fn settings(&self) -> RotationSettings {
        self.settings
    }

    /// Returns the scheduler (for runtime adapters that expose timers).
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Starts (or re-anchors) a drag, cancelling auto-rotation first.
    pub fn start_drag(&mut self, pointer_x: f32) {
        self.stop_timer();
        self.mode = RotationMode::Dragging(DragSession::new(pointer_x));
    }

    /// Feeds pointer motion to the drag session.
    ///
    /// Returns the new frame when the motion produced at least one step.
    pub fn drag_to(&mut self, pointer_x: f32) -> Option<FrameIndex> {
        let RotationMode::Dragging(session) = &mut self.mode else {
            return None;
        };
        let steps = session.advance(pointer_x, self.settings.drag_threshold);
        if steps == 0 {
            return None;
        }
        self.move_to(self.current.offset(steps, self.count))
    }

    /// Ends the drag session. Safe to call in any mode.
    pub fn end_drag(&mut self) {
        if self.mode.is_dragging() {
            self.mode = RotationMode::Idle;
        }
    }

    /// Switches auto-rotation on or off.
    ///
    /// Returns true when auto-rotation is running afterwards.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        if self.mode.is_auto_rotating() {
            self.stop_timer();
            false
        } else {
            let handle = self
                .scheduler
                .start_repeating(self.settings.auto_rotate_period.as_duration());
            self.mode = RotationMode::AutoRotating(handle);
            true
        }
    }

    /// Advances one frame if `handle` is the running auto-rotate timer.
    ///
    /// Ticks from a cancelled timer are ignored.
    pub fn tick(&mut self, handle: TimerHandle) -> Option<FrameIndex> {
        match self.mode {
            RotationMode::AutoRotating(active) if active == handle => {
                self.move_to(self.current.offset(1, self.count))
            }
            _ => None,
        }
    }

    /// Jumps to `position`, wrapping into `[1, N]`. Mode is unchanged.
    pub fn set_index(&mut self, position: i64) -> Option<FrameIndex> {
        self.move_to(self.count.wrap(position))
    }

    /// Moves by `steps` frames, wrapping. Mode is unchanged.
    pub fn step(&mut self, steps: i64) -> Option<FrameIndex> {
        self.move_to(self.current.offset(steps, self.count))
    }

    fn move_to(&mut self, target: FrameIndex) -> Option<FrameIndex> {
        if target == self.current {
            return None;
        }
        self.current = target;
        Some(target)
    }

    fn stop_timer(&mut self) {
        if let RotationMode::AutoRotating(handle) = self.mode {
            self.scheduler.cancel(handle);
            self.mode = RotationMode::Idle;
        }
    }
}

impl<S: Scheduler> Drop for RotationState<S> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ManualScheduler;

    fn state_at(start: i64, scheduler: &ManualScheduler) -> RotationState<ManualScheduler> {
        RotationState::new(
            FrameCount::new(36),
            start,
            RotationSettings::default(),
            scheduler.clone(),
        )
    }

    #[test]
    fn start_index_is_clamped() {
        let scheduler = ManualScheduler::default();
        assert_eq!(state_at(0, &scheduler).current().value(), 1);
        assert_eq!(state_at(99, &scheduler).current().value(), 36);
        assert_eq!(state_at(7, &scheduler).current().value(), 7);
    }

    #[test]
    fn three_step_drag_right_from_first_frame() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        state.start_drag(100.0);
        assert_eq!(state.drag_to(130.0).map(FrameIndex::value), Some(4));
        state.end_drag();
        assert!(state.mode().is_idle());
    }

    #[test]
    fn drag_left_wraps_below_first_frame() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        state.start_drag(100.0);
        assert_eq!(state.drag_to(85.0).map(FrameIndex::value), Some(36));
    }

    #[test]
    fn drag_to_without_session_is_noop() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(5, &scheduler);
        assert_eq!(state.drag_to(500.0), None);
        assert_eq!(state.current().value(), 5);
    }

    #[test]
    fn start_drag_twice_reanchors() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        state.start_drag(0.0);
        state.start_drag(200.0);
        assert_eq!(state.drag_to(205.0), None);
        assert_eq!(state.current().value(), 1);
    }

    #[test]
    fn toggle_auto_rotate_starts_and_cancels_timer() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);

        assert!(state.toggle_auto_rotate());
        let handle = scheduler.single_active().expect("timer running");
        assert_eq!(state.tick(handle).map(FrameIndex::value), Some(2));

        assert!(!state.toggle_auto_rotate());
        assert!(scheduler.active_handles().is_empty());
        assert!(state.mode().is_idle());
    }

    #[test]
    fn start_drag_cancels_auto_rotate() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        state.toggle_auto_rotate();
        let handle = scheduler.single_active().expect("timer running");

        state.start_drag(10.0);

        assert!(state.mode().is_dragging());
        assert!(scheduler.active_handles().is_empty());
        // A tick already in flight for the cancelled timer changes nothing
        assert_eq!(state.tick(handle), None);
        assert_eq!(state.current().value(), 1);
    }

    #[test]
    fn toggle_while_dragging_closes_session() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        state.start_drag(0.0);
        assert!(state.toggle_auto_rotate());
        assert!(state.mode().is_auto_rotating());
        assert_eq!(state.drag_to(100.0), None);
    }

    #[test]
    fn tick_wraps_past_last_frame() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(36, &scheduler);
        state.toggle_auto_rotate();
        let handle = scheduler.single_active().expect("timer running");
        assert_eq!(state.tick(handle).map(FrameIndex::value), Some(1));
    }

    #[test]
    fn set_index_wraps_and_keeps_mode() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        state.toggle_auto_rotate();
        assert_eq!(state.set_index(37).map(FrameIndex::value), None);
        assert_eq!(state.set_index(0).map(FrameIndex::value), Some(36));
        assert!(state.mode().is_auto_rotating());
    }

    #[test]
    fn extreme_requests_wrap_instead_of_panicking() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        assert_eq!(state.set_index(i64::MIN).map(FrameIndex::value), Some(28));
        assert_eq!(state.step(i64::MAX).map(FrameIndex::value), Some(35));

        state.set_index(1);
        state.start_drag(0.0);
        assert_eq!(state.drag_to(f32::MAX).map(FrameIndex::value), Some(8));
        assert!(state.mode().is_dragging());
    }

    #[test]
    fn drop_cancels_running_timer() {
        let scheduler = ManualScheduler::default();
        let mut state = state_at(1, &scheduler);
        state.toggle_auto_rotate();
        assert_eq!(scheduler.active_handles().len(), 1);

        drop(state);
        assert!(scheduler.active_handles().is_empty());
    }

    #[test]
    fn uses_configured_period() {
        let scheduler = ManualScheduler::default();
        let settings = RotationSettings {
            auto_rotate_period: AutoRotatePeriod::new(250),
            ..RotationSettings::default()
        };
        let mut state = RotationState::new(FrameCount::new(12), 1, settings, scheduler.clone());
        state.toggle_auto_rotate();
        assert_eq!(
            scheduler.active_periods(),
            vec![std::time::Duration::from_millis(250)]
        );
    }
}
