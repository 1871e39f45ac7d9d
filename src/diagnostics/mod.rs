// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting viewer activity reports.
//!
//! Events are captured during use, stored in a memory-bounded circular
//! buffer and exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped user actions, state changes and warnings
//! - [`DiagnosticsHandle`]: Non-blocking sender handed to the viewer

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, UserAction, ViewerStateEvent, WarningEvent, WarningType,
};
