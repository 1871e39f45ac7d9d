// SPDX-License-Identifier: MPL-2.0
//! [`Scheduler`] adapter backed by an Iced time subscription.
//!
//! The adapter only keeps track of which timer is running. The application
//! reads [`SubscriptionScheduler::active`] in its `subscription()` function
//! and turns it into `iced::time::every(period)`; ticks come back tagged
//! with the handle so a stale subscription can never advance the viewer.

use crate::application::port::{Scheduler, TimerHandle};
use std::time::Duration;

/// Repeating timer bookkeeping for the Iced runtime.
#[derive(Debug, Default)]
pub struct SubscriptionScheduler {
    next_id: u64,
    active: Option<(TimerHandle, Duration)>,
}

impl SubscriptionScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the running timer and its period, if any.
    #[must_use]
    pub fn active(&self) -> Option<(TimerHandle, Duration)> {
        self.active
    }
}

impl Scheduler for SubscriptionScheduler {
    fn start_repeating(&mut self, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        // One timer at a time; starting a new one replaces the subscription
        self.active = Some((handle, period));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if matches!(self.active, Some((active, _)) if active == handle) {
            self.active = None;
        }
    }
}
