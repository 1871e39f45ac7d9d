// SPDX-License-Identifier: MPL-2.0
//! [`FullscreenPort`] adapter for an Iced window.
//!
//! Iced changes window modes through tasks, so a request only records the
//! desired mode. The application drains it with [`WindowFullscreen::take_task`]
//! after every update; the returned task switches the window and then reads
//! the mode back from the window, so the notification carries what the
//! platform applied rather than what was asked. Until that notification is
//! acknowledged further requests are rejected with
//! [`FullscreenError::TransitionPending`].
//!
//! Changes made by the window manager are picked up by
//! [`WindowFullscreen::query_task`], issued on every resize.

use crate::application::port::{FullscreenError, FullscreenPort, ListenerId};
use iced::window;
use iced::Task;

#[derive(Debug, Default)]
pub struct WindowFullscreen {
    window: Option<window::Id>,
    pending: Option<bool>,
    in_flight: bool,
    next_listener: u64,
    listeners: Vec<ListenerId>,
}

impl WindowFullscreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the window that fullscreen requests apply to.
    pub fn set_window(&mut self, id: window::Id) {
        self.window = Some(id);
    }

    #[must_use]
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Returns true while a mode change is queued or not yet acknowledged.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some() || self.in_flight
    }

    /// Marks the last mode change as applied.
    pub fn acknowledge(&mut self) {
        self.in_flight = false;
    }

    /// Turns a queued request into a window task followed by a mode query
    /// reported through `on_change`.
    ///
    /// Returns `Task::none()` when nothing is queued or nobody listens.
    pub fn take_task<M: Send + 'static>(&mut self, on_change: fn(bool) -> M) -> Task<M> {
        let (Some(fullscreen), Some(id)) = (self.pending.take(), self.window) else {
            return Task::none();
        };
        if !self.has_listeners() {
            return Task::none();
        }
        self.in_flight = true;
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(id, mode).chain(read_mode(id, on_change))
    }

    /// Reads the current window mode and reports it through `on_change`.
    ///
    /// Returns `Task::none()` without a window or listeners.
    pub fn query_task<M: Send + 'static>(&self, on_change: fn(bool) -> M) -> Task<M> {
        match self.window {
            Some(id) if self.has_listeners() => read_mode(id, on_change),
            _ => Task::none(),
        }
    }

    fn queue(&mut self, fullscreen: bool) -> Result<(), FullscreenError> {
        if self.window.is_none() {
            return Err(FullscreenError::NoSurface);
        }
        if self.is_transitioning() {
            return Err(FullscreenError::TransitionPending);
        }
        self.pending = Some(fullscreen);
        Ok(())
    }
}

fn read_mode<M: Send + 'static>(id: window::Id, on_change: fn(bool) -> M) -> Task<M> {
    window::mode(id).map(move |mode| on_change(mode == window::Mode::Fullscreen))
}

impl FullscreenPort for WindowFullscreen {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.queue(true)
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.queue(false)
    }

    fn subscribe(&mut self) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId::new(self.next_listener);
        self.listeners.push(id);
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.listeners.retain(|id| *id != listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> WindowFullscreen {
        let mut port = WindowFullscreen::new();
        port.set_window(window::Id::unique());
        port.subscribe();
        port
    }

    #[test]
    fn request_without_window_is_rejected() {
        let mut port = WindowFullscreen::new();
        assert_eq!(port.request_fullscreen(), Err(FullscreenError::NoSurface));
    }

    #[test]
    fn second_request_while_queued_is_rejected() {
        let mut port = attached();
        assert!(port.request_fullscreen().is_ok());
        assert_eq!(
            port.exit_fullscreen(),
            Err(FullscreenError::TransitionPending)
        );
    }

    #[test]
    fn in_flight_change_blocks_until_acknowledged() {
        let mut port = attached();
        port.request_fullscreen().expect("request should be queued");
        let _task: Task<bool> = port.take_task(|active| active);
        assert!(port.is_transitioning());
        assert_eq!(
            port.exit_fullscreen(),
            Err(FullscreenError::TransitionPending)
        );

        port.acknowledge();
        assert!(port.exit_fullscreen().is_ok());
    }

    #[test]
    fn take_task_without_request_is_noop() {
        let mut port = attached();
        let _task: Task<bool> = port.take_task(|active| active);
        assert!(!port.is_transitioning());
    }

    #[test]
    fn query_requires_window_and_listener() {
        let mut port = WindowFullscreen::new();
        let _task: Task<bool> = port.query_task(|active| active);
        port.set_window(window::Id::unique());
        let _task: Task<bool> = port.query_task(|active| active);
        // Queries never block requests
        port.subscribe();
        let _task: Task<bool> = port.query_task(|active| active);
        assert!(!port.is_transitioning());
        assert!(port.request_fullscreen().is_ok());
    }

    #[test]
    fn unsubscribe_removes_listener() {
        let mut port = WindowFullscreen::new();
        let listener = port.subscribe();
        assert!(port.has_listeners());
        port.unsubscribe(listener);
        port.unsubscribe(listener);
        assert!(!port.has_listeners());
    }
}
