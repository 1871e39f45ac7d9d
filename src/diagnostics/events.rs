// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while the viewer is in use.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated viewer actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A rotation drag started.
    StartDrag,

    /// A rotation drag ended.
    EndDrag,

    /// Auto-rotation was switched on or off.
    ToggleAutoRotate {
        /// Whether auto-rotation is running afterwards.
        running: bool,
    },

    /// Jump to a specific frame (slider, direct input).
    SetFrame {
        /// Requested 1-based position before wrapping.
        position: i64,
    },

    /// Step one or more frames (keyboard, prev/next buttons).
    StepFrame {
        /// Signed number of frames.
        steps: i64,
    },

    /// Zoom in on the current frame.
    ZoomIn,

    /// Zoom out on the current frame.
    ZoomOut,

    /// Reset zoom to 1.0.
    ResetZoom,

    /// Toggle fullscreen mode.
    ToggleFullscreen,

    /// Exit fullscreen mode.
    ExitFullscreen,
}

/// Categories of non-fatal problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The platform rejected a fullscreen request.
    FullscreenRejected,
    /// A frame image could not be fetched or decoded.
    FrameUnavailable,
    /// A configuration issue was detected.
    ConfigurationIssue,
    /// Other warning type not covered by specific categories.
    Other,
}

/// A non-fatal problem with its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    /// Warning category.
    pub category: WarningType,
    /// Human-readable description.
    pub message: String,
}

impl WarningEvent {
    /// Creates a warning event.
    #[must_use]
    pub fn new(category: WarningType, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Viewer state transitions worth correlating with user actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewerStateEvent {
    /// A viewer was mounted for an object.
    Mounted {
        /// Object identifier.
        object_id: String,
        /// Number of frames.
        frame_count: u32,
    },
    /// The rotation mode changed.
    ModeChanged {
        /// New mode name (`idle`, `dragging`, `auto_rotating`).
        mode: String,
    },
    /// The platform reported a fullscreen change.
    FullscreenChanged {
        /// New fullscreen flag.
        active: bool,
    },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        /// The specific action performed.
        action: UserAction,
    },

    /// Viewer state change.
    ViewerState {
        /// The transition.
        state: ViewerStateEvent,
    },

    /// Non-critical warning.
    Warning {
        /// Category and message.
        event: WarningEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::StepFrame { steps: -1 },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"step_frame\""));
        assert!(json.contains("\"steps\":-1"));
    }

    #[test]
    fn warning_deserializes_from_json() {
        let json = r#"{"type":"warning","event":{"category":"fullscreen_rejected","message":"denied"}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            DiagnosticEventKind::Warning {
                event: WarningEvent::new(WarningType::FullscreenRejected, "denied"),
            }
        );
    }
}
