// SPDX-License-Identifier: MPL-2.0
//! Fullscreen presentation port definition.
//!
//! This module defines the [`FullscreenPort`] trait wrapping the platform's
//! fullscreen API for the viewer's container.
//!
//! # Design Notes
//!
//! - Requests are fire-and-forget: success of `request_fullscreen()` only
//!   means the platform accepted the request, not that the mode changed
//! - The actual mode is reported asynchronously through change notifications
//!   delivered to registered listeners
//! - The platform may leave fullscreen on its own (e.g. Escape), so the
//!   notification stream is the only authoritative source

use std::fmt;

// =============================================================================
// FullscreenError
// =============================================================================

/// Reasons the platform can reject a fullscreen request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    /// No presentation surface is available yet (window not known).
    NoSurface,

    /// A previous mode change has not been acknowledged yet.
    TransitionPending,

    /// The platform refused the request (device or policy restriction).
    Denied(String),
}

impl FullscreenError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FullscreenError::NoSurface => "error-fullscreen-no-surface",
            FullscreenError::TransitionPending => "error-fullscreen-pending",
            FullscreenError::Denied(_) => "error-fullscreen-denied",
        }
    }
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullscreenError::NoSurface => write!(f, "No surface available for fullscreen"),
            FullscreenError::TransitionPending => {
                write!(f, "A fullscreen transition is already pending")
            }
            FullscreenError::Denied(reason) => write!(f, "Fullscreen denied: {reason}"),
        }
    }
}

impl std::error::Error for FullscreenError {}

// =============================================================================
// ListenerId
// =============================================================================

/// Registration token for fullscreen change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Creates a listener id from a raw identifier.
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
// FullscreenPort Trait
// =============================================================================

/// Port for the platform fullscreen presentation API.
pub trait FullscreenPort {
    /// Asks the platform to present the viewer container fullscreen.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform rejects the request outright.
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Asks the platform to leave fullscreen.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform rejects the request outright.
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Registers for fullscreen change notifications.
    fn subscribe(&mut self) -> ListenerId;

    /// Deregisters a listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, listener: ListenerId);
}
