// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer's state machines, kept free of widget code
//! so they can be driven directly from tests.

pub mod drag;
pub mod fullscreen;
pub mod rotation;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragSession;
pub use fullscreen::{FullscreenCoordinator, Request as FullscreenRequest};
pub use rotation::{RotationMode, RotationSettings, RotationState};
pub use zoom::ZoomState;
