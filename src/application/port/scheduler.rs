// SPDX-License-Identifier: MPL-2.0
//! Periodic timer port definition.
//!
//! This module defines the [`Scheduler`] trait used by the rotation state
//! machine to drive auto-rotation. The state machine never touches a clock
//! itself; it asks the scheduler for a repeating timer and receives ticks
//! tagged with the [`TimerHandle`] it was given.
//!
//! # Design Notes
//!
//! - Ticks are delivered as messages by the UI runtime, not as callbacks
//! - A tick carrying a cancelled handle must be ignored by the receiver
//! - Handles are never reused by a scheduler instance

use std::time::Duration;

// =============================================================================
// TimerHandle
// =============================================================================

/// Identifies one repeating timer started by a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Creates a handle from a raw identifier.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Scheduler Trait
// =============================================================================

/// Port for fixed-period repeating timers.
///
/// # Lifecycle
///
/// 1. `start_repeating()` returns a fresh handle; ticks for it begin after one period
/// 2. Every tick reaches the owner as a message carrying the handle
/// 3. `cancel()` stops ticks for that handle; cancelling twice is a no-op
pub trait Scheduler {
    /// Starts a repeating timer with the given period.
    fn start_repeating(&mut self, period: Duration) -> TimerHandle;

    /// Cancels a running timer.
    fn cancel(&mut self, handle: TimerHandle);
}
