// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the viewer state machine remains
//! independent of the UI runtime.
//!
//! # Available Ports
//!
//! - [`frames`]: Frame URL resolution
//! - [`fullscreen`]: Platform fullscreen presentation
//! - [`scheduler`]: Repeating timers for auto-rotation
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - No `async fn` - asynchronous results come back as messages
//!
//! # Example
//!
//! ```ignore
//! use iced_turntable::application::port::{Scheduler, TimerHandle};
//! use std::time::Duration;
//!
//! fn start(scheduler: &mut impl Scheduler) -> TimerHandle {
//!     scheduler.start_repeating(Duration::from_millis(100))
//! }
//! ```

pub mod frames;
pub mod fullscreen;
pub mod scheduler;

// Re-export main types for convenience
pub use frames::{FrameUrl, FrameUrlResolver};
pub use fullscreen::{FullscreenError, FullscreenPort, ListenerId};
pub use scheduler::{Scheduler, TimerHandle};
