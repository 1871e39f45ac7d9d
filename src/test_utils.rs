// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and in-memory port doubles.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! It also provides [`ManualScheduler`] and [`FakeFullscreen`], which record
//! every port call so tests can drive timers and platform notifications by hand.

use crate::application::port::{
    FullscreenError, FullscreenPort, ListenerId, Scheduler, TimerHandle,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

// Re-export approx macros for convenient use in tests
#[cfg(test)]
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

// =============================================================================
// ManualScheduler
// =============================================================================

#[derive(Debug, Default)]
struct SchedulerLog {
    next_id: u64,
    active: Vec<(TimerHandle, Duration)>,
    cancelled: Vec<TimerHandle>,
}

/// Scheduler whose timers never fire on their own.
///
/// Clones share the same log, so a test keeps one clone and hands the other
/// to the state under test.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    log: Rc<RefCell<SchedulerLog>>,
}

impl ManualScheduler {
    /// Returns the running timer when exactly one is active.
    #[must_use]
    pub fn single_active(&self) -> Option<TimerHandle> {
        match self.log.borrow().active.as_slice() {
            [(handle, _)] => Some(*handle),
            _ => None,
        }
    }

    /// Returns every running timer.
    #[must_use]
    pub fn active_handles(&self) -> Vec<TimerHandle> {
        self.log.borrow().active.iter().map(|(h, _)| *h).collect()
    }

    /// Returns the period of every running timer.
    #[must_use]
    pub fn active_periods(&self) -> Vec<Duration> {
        self.log.borrow().active.iter().map(|(_, p)| *p).collect()
    }

    /// Returns every handle cancelled so far, in order.
    #[must_use]
    pub fn cancelled(&self) -> Vec<TimerHandle> {
        self.log.borrow().cancelled.clone()
    }
}

impl Scheduler for ManualScheduler {
    fn start_repeating(&mut self, period: Duration) -> TimerHandle {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        let handle = TimerHandle::new(log.next_id);
        log.active.push((handle, period));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let mut log = self.log.borrow_mut();
        let before = log.active.len();
        log.active.retain(|(h, _)| *h != handle);
        if log.active.len() != before {
            log.cancelled.push(handle);
        }
    }
}

// =============================================================================
// FakeFullscreen
// =============================================================================

#[derive(Debug, Default)]
struct FullscreenLog {
    next_listener: u64,
    listeners: Vec<ListenerId>,
    enter_requests: usize,
    exit_requests: usize,
    rejection: Option<FullscreenError>,
}

/// Fullscreen port that records requests and never changes mode by itself.
///
/// Tests play the platform by feeding notifications to the coordinator.
#[derive(Debug, Clone, Default)]
pub struct FakeFullscreen {
    log: Rc<RefCell<FullscreenLog>>,
}

impl FakeFullscreen {
    /// Creates a port that rejects every request with `error`.
    #[must_use]
    pub fn rejecting(error: FullscreenError) -> Self {
        let port = Self::default();
        port.log.borrow_mut().rejection = Some(error);
        port
    }

    /// Number of accepted or rejected enter requests.
    #[must_use]
    pub fn enter_requests(&self) -> usize {
        self.log.borrow().enter_requests
    }

    /// Number of accepted or rejected exit requests.
    #[must_use]
    pub fn exit_requests(&self) -> usize {
        self.log.borrow().exit_requests
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.log.borrow().listeners.len()
    }

    fn outcome(&self) -> Result<(), FullscreenError> {
        match &self.log.borrow().rejection {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl FullscreenPort for FakeFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.log.borrow_mut().enter_requests += 1;
        self.outcome()
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.log.borrow_mut().exit_requests += 1;
        self.outcome()
    }

    fn subscribe(&mut self) -> ListenerId {
        let mut log = self.log.borrow_mut();
        log.next_listener += 1;
        let id = ListenerId::new(log.next_listener);
        log.listeners.push(id);
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.log.borrow_mut().listeners.retain(|id| *id != listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_hands_out_unique_handles() {
        let mut scheduler = ManualScheduler::default();
        let a = scheduler.start_repeating(Duration::from_millis(10));
        let b = scheduler.start_repeating(Duration::from_millis(10));
        assert_ne!(a, b);

        scheduler.cancel(a);
        scheduler.cancel(a);
        assert_eq!(scheduler.active_handles(), vec![b]);
        assert_eq!(scheduler.cancelled(), vec![a]);
    }
}
