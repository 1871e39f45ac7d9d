// SPDX-License-Identifier: MPL-2.0
//! Fullscreen coordination
//!
//! Wraps a [`FullscreenPort`] and keeps the local fullscreen flag in sync
//! with platform notifications. The flag is never written from a request
//! call: a request that silently fails would otherwise leave the viewer
//! believing it is fullscreen.

use crate::application::port::{FullscreenError, FullscreenPort, ListenerId};

/// Outcome of a fullscreen command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Nothing was asked of the platform.
    Skipped,
    /// The platform accepted the request; a notification will follow.
    Sent,
    /// The platform rejected the request; state is unchanged.
    Rejected(FullscreenError),
}

/// Keeps `fullscreen` authoritative for the lifetime of one viewer.
///
/// Registers a change listener on creation and removes it on drop.
#[derive(Debug)]
pub struct FullscreenCoordinator<F: FullscreenPort> {
    port: F,
    listener: Option<ListenerId>,
    active: bool,
    allowed: bool,
}

impl<F: FullscreenPort> FullscreenCoordinator<F> {
    /// Subscribes to platform notifications.
    pub fn new(mut port: F, allowed: bool) -> Self {
        let listener = Some(port.subscribe());
        Self {
            port,
            listener,
            active: false,
            allowed,
        }
    }

    /// Returns the authoritative fullscreen flag.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether the fullscreen control is exposed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Returns the port (for runtime adapters that flush commands).
    #[must_use]
    pub fn port(&self) -> &F {
        &self.port
    }

    /// Returns the port mutably.
    pub fn port_mut(&mut self) -> &mut F {
        &mut self.port
    }

    /// Requests fullscreen when windowed, exit when fullscreen.
    pub fn toggle(&mut self) -> Request {
        if !self.allowed {
            return Request::Skipped;
        }
        let result = if self.active {
            self.port.exit_fullscreen()
        } else {
            self.port.request_fullscreen()
        };
        match result {
            Ok(()) => Request::Sent,
            Err(error) => Request::Rejected(error),
        }
    }

    /// Requests exit; does nothing when already windowed.
    pub fn exit(&mut self) -> Request {
        if !self.active {
            return Request::Skipped;
        }
        match self.port.exit_fullscreen() {
            Ok(()) => Request::Sent,
            Err(error) => Request::Rejected(error),
        }
    }

    /// Applies a platform notification.
    ///
    /// Returns true when the flag changed. Notifications arriving after the
    /// listener was removed are ignored.
    pub fn on_platform_change(&mut self, active: bool) -> bool {
        if self.listener.is_none() || self.active == active {
            return false;
        }
        self.active = active;
        true
    }
}

impl<F: FullscreenPort> Drop for FullscreenCoordinator<F> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.port.unsubscribe(listener);
        }
    }
}
