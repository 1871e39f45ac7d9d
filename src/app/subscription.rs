// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, touch, window) and the
//! auto-rotate timer to the viewer.

use super::Message;
use crate::infrastructure::SubscriptionScheduler;
use crate::ui::viewer::component;
use crate::ui::viewer::pointer::PointerInput;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Keyboard, touch and window events.
///
/// Mouse input is not routed here: the frame pane reports it through its
/// `mouse_area` so positions are local to the pane.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            id: window_id,
            size,
        }),
        event::Event::Touch(touch) => Some(Message::Viewer(component::Message::Pointer(
            PointerInput::Touch(touch),
        ))),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => shortcut(&key, modifiers),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Maps a key press to the action it triggers.
///
/// - `←` / `→`: previous / next frame
/// - `Space`: toggle auto-rotation
/// - `+` / `-` / `0`: zoom in / out / reset
/// - `F` / `F11`: toggle fullscreen, `Escape`: leave fullscreen
/// - `Ctrl+D`: export diagnostics
pub fn shortcut(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    let viewer = |message| Some(Message::Viewer(message));
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => viewer(component::Message::Step(-1)),
        Key::Named(Named::ArrowRight) => viewer(component::Message::Step(1)),
        Key::Named(Named::Space) => viewer(component::Message::ToggleAutoRotate),
        Key::Named(Named::F11) => viewer(component::Message::ToggleFullscreen),
        Key::Named(Named::Escape) => viewer(component::Message::ExitFullscreen),
        Key::Character(c) if modifiers.command() => match c {
            "d" | "D" => Some(Message::ExportDiagnostics),
            _ => None,
        },
        Key::Character(c) if !modifiers.alt() => match c {
            "+" | "=" => viewer(component::Message::ZoomIn),
            "-" => viewer(component::Message::ZoomOut),
            "0" => viewer(component::Message::ResetZoom),
            "f" | "F" => viewer(component::Message::ToggleFullscreen),
            _ => None,
        },
        _ => None,
    }
}

/// Auto-rotate ticks while the viewer's timer runs.
///
/// The subscription is keyed by the timer handle, so cancelling and
/// restarting auto-rotation never reuses a stale stream.
pub fn create_rotation_subscription(scheduler: &SubscriptionScheduler) -> Subscription<Message> {
    match scheduler.active() {
        Some((handle, period)) => time::every(period)
            .with(handle)
            .map(|(handle, _)| Message::Viewer(component::Message::AutoRotateTick(handle))),
        None => Subscription::none(),
    }
}

/// Periodic tick for notice auto-dismiss.
pub fn create_tick_subscription(has_notice: bool) -> Subscription<Message> {
    if has_notice {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::Modifiers;

    fn viewer_message(key: Key, modifiers: Modifiers) -> Option<component::Message> {
        match shortcut(&key, modifiers) {
            Some(Message::Viewer(message)) => Some(message),
            _ => None,
        }
    }

    #[test]
    fn arrows_step_frames() {
        assert!(matches!(
            viewer_message(Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(component::Message::Step(-1))
        ));
        assert!(matches!(
            viewer_message(Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(component::Message::Step(1))
        ));
    }

    #[test]
    fn characters_map_to_zoom_and_fullscreen() {
        let key = |c: &str| Key::Character(c.into());
        assert!(matches!(
            viewer_message(key("+"), Modifiers::SHIFT),
            Some(component::Message::ZoomIn)
        ));
        assert!(matches!(
            viewer_message(key("-"), Modifiers::empty()),
            Some(component::Message::ZoomOut)
        ));
        assert!(matches!(
            viewer_message(key("0"), Modifiers::empty()),
            Some(component::Message::ResetZoom)
        ));
        assert!(matches!(
            viewer_message(key("f"), Modifiers::empty()),
            Some(component::Message::ToggleFullscreen)
        ));
    }

    #[test]
    fn escape_only_exits_fullscreen() {
        assert!(matches!(
            viewer_message(Key::Named(Named::Escape), Modifiers::empty()),
            Some(component::Message::ExitFullscreen)
        ));
    }

    #[test]
    fn command_d_exports_diagnostics() {
        assert!(matches!(
            shortcut(&Key::Character("d".into()), Modifiers::COMMAND),
            Some(Message::ExportDiagnostics)
        ));
        assert!(shortcut(&Key::Character("f".into()), Modifiers::COMMAND).is_none());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert!(shortcut(&Key::Character("q".into()), Modifiers::empty()).is_none());
        assert!(shortcut(&Key::Named(Named::Tab), Modifiers::empty()).is_none());
    }
}
