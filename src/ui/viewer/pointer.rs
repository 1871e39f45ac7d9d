// SPDX-License-Identifier: MPL-2.0
//! Pointer and touch input mapping for the frame pane.
//!
//! Mouse input comes from the pane's `mouse_area` (positions are local to
//! the pane); touch input comes from the window event stream. Both are
//! reduced to three actions consumed by the viewer component.

use crate::ui::state::RotationMode;
use iced::{mouse, touch, Point};

/// Raw pointer input reaching the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Cursor moved over the pane.
    MouseMoved(Point),
    /// Primary button pressed over the pane.
    MousePressed,
    /// Primary button released over the pane.
    MouseReleased,
    /// Cursor left the pane.
    MouseLeft,
    /// Any touch event from the window.
    Touch(touch::Event),
}

/// Pointer gesture step understood by the rotation and pan controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// A gesture starts (or re-anchors) at this position.
    Press(Point),
    /// The active gesture moved to this position.
    Move(Point),
    /// The active gesture ended, normally or not.
    Release,
}

/// Reduces [`PointerInput`] to [`PointerAction`]s.
///
/// Mouse button events carry no coordinates, so the mapper remembers the
/// last known cursor position. A press that arrives before any position is
/// known is deferred to the next motion.
#[derive(Debug, Clone, Default)]
pub struct PointerMapper {
    last_position: Option<Point>,
    pressed: bool,
    awaiting_position: bool,
}

impl PointerMapper {
    /// Returns true while a gesture is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Maps one input to at most one action.
    pub fn map(&mut self, input: PointerInput) -> Option<PointerAction> {
        match input {
            PointerInput::MouseMoved(position) => self.moved(position),
            PointerInput::MousePressed => {
                if self.pressed {
                    return None;
                }
                self.pressed = true;
                match self.last_position {
                    Some(position) => Some(PointerAction::Press(position)),
                    None => {
                        self.awaiting_position = true;
                        None
                    }
                }
            }
            PointerInput::MouseReleased | PointerInput::MouseLeft => self.released(),
            PointerInput::Touch(event) => self.touch(event),
        }
    }

    fn touch(&mut self, event: touch::Event) -> Option<PointerAction> {
        match event {
            // Only the pane's mouse area decides that a touch started a
            // gesture; here the finger position just re-anchors it.
            touch::Event::FingerPressed { position, .. } => {
                self.last_position = Some(position);
                if self.pressed {
                    self.awaiting_position = false;
                    Some(PointerAction::Press(position))
                } else {
                    None
                }
            }
            touch::Event::FingerMoved { position, .. } => self.moved(position),
            touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. } => {
                self.released()
            }
        }
    }

    fn moved(&mut self, position: Point) -> Option<PointerAction> {
        self.last_position = Some(position);
        if self.awaiting_position {
            self.awaiting_position = false;
            return Some(PointerAction::Press(position));
        }
        self.pressed.then_some(PointerAction::Move(position))
    }

    fn released(&mut self) -> Option<PointerAction> {
        self.awaiting_position = false;
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(PointerAction::Release)
    }
}

/// Cursor shown over the frame pane.
#[must_use]
pub fn cursor_interaction(mode: &RotationMode, panning: bool) -> mouse::Interaction {
    if mode.is_dragging() || panning {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    }
}
