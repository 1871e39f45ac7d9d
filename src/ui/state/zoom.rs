// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state management
//!
//! This module handles the zoom level of the frame on screen and, while
//! zoomed, the pan offset accumulated from pointer drags:
//! - Stepped zoom in/out clamped to the active [`ZoomLimits`]
//! - Pan sessions that only exist while zoomed
//! - Reset to 1.0 and origin whenever the frame or presentation changes

use crate::domain::ui::{ZoomLevel, ZoomLimits};
use iced::{Point, Size, Vector};

/// Anchor of an in-progress pan gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PanSession {
    last_position: Point,
}

/// Manages all zoom and pan state for the frame pane.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    level: ZoomLevel,
    limits: ZoomLimits,
    pan: Vector,
    pan_session: Option<PanSession>,
    viewport: Option<Size>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ZoomState {
    /// Creates an unzoomed state with the given limits.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            level: ZoomLevel::UNZOOMED,
            limits,
            pan: Vector::ZERO,
            pan_session: None,
            viewport: None,
        }
    }

    /// Returns the current zoom level.
    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    /// Returns the active limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns true above 1.0.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.level.is_unzoomed()
    }

    /// Returns true at the maximum of the active limits.
    #[must_use]
    pub fn is_max(&self) -> bool {
        self.level.is_max(self.limits)
    }

    /// Returns the pan offset (always zero when unzoomed).
    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    /// Returns true while a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_session.is_some()
    }

    /// Zooms in by one step. Returns false at the maximum.
    pub fn zoom_in(&mut self) -> bool {
        self.apply(self.level.zoom_in(self.limits))
    }

    /// Zooms out by one step. Returns false at 1.0.
    pub fn zoom_out(&mut self) -> bool {
        self.apply(self.level.zoom_out(self.limits))
    }

    /// Resets zoom to 1.0 and pan to origin. Returns true if anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.is_zoomed() || self.pan != Vector::ZERO;
        self.level = ZoomLevel::UNZOOMED;
        self.pan = Vector::ZERO;
        self.pan_session = None;
        changed
    }

    /// Switches to other limits (turntable vs gallery) and resets.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.reset();
    }

    /// Records the size of the area the frame is drawn in.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = Some(viewport);
        self.pan = self.clamp_pan(self.pan);
    }

    /// Starts a pan gesture. Ignored when unzoomed.
    pub fn start_pan(&mut self, position: Point) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.pan_session = Some(PanSession {
            last_position: position,
        });
        true
    }

    /// Moves the pan gesture to `position`. Returns true if the offset changed.
    pub fn pan_to(&mut self, position: Point) -> bool {
        let Some(session) = self.pan_session.as_mut() else {
            return false;
        };
        let delta = position - session.last_position;
        session.last_position = position;

        let next = self.clamp_pan(self.pan + delta);
        if next == self.pan {
            return false;
        }
        self.pan = next;
        true
    }

    /// Ends the pan gesture, keeping the offset.
    pub fn end_pan(&mut self) {
        self.pan_session = None;
    }

    /// Largest pan offset on each axis for the current zoom and viewport.
    #[must_use]
    pub fn max_pan(&self) -> Option<Vector> {
        let viewport = self.viewport?;
        let overflow = self.level.value() - 1.0;
        Some(Vector::new(
            (viewport.width * overflow / 2.0).max(0.0),
            (viewport.height * overflow / 2.0).max(0.0),
        ))
    }

    /// Relative scroll position (0.0..=1.0 per axis) that shows the pan.
    ///
    /// The frame is drawn `level` times larger than the viewport inside a
    /// scrollable; a centred frame is scroll position 0.5.
    #[must_use]
    pub fn scroll_position(&self) -> Vector {
        let Some(max) = self.max_pan() else {
            return Vector::new(0.5, 0.5);
        };
        let axis = |pan: f32, max: f32| {
            if max > 0.0 {
                ((max - pan) / (2.0 * max)).clamp(0.0, 1.0)
            } else {
                0.5
            }
        };
        Vector::new(axis(self.pan.x, max.x), axis(self.pan.y, max.y))
    }

    /// Adopts a scroll position reported by the scrollable (wheel, keys).
    ///
    /// Ignored while unzoomed or during a pan gesture. Returns true if the
    /// offset changed.
    pub fn sync_scroll_position(&mut self, relative: Vector) -> bool {
        if !self.is_zoomed() || self.is_panning() {
            return false;
        }
        let Some(max) = self.max_pan() else {
            return false;
        };
        let next = self.clamp_pan(Vector::new(
            max.x - relative.x * 2.0 * max.x,
            max.y - relative.y * 2.0 * max.y,
        ));
        if next == self.pan {
            return false;
        }
        self.pan = next;
        true
    }

    fn apply(&mut self, next: ZoomLevel) -> bool {
        if next == self.level {
            return false;
        }
        self.level = next;
        if self.level.is_unzoomed() {
            self.pan = Vector::ZERO;
            self.pan_session = None;
        } else {
            self.pan = self.clamp_pan(self.pan);
        }
        true
    }

    fn clamp_pan(&self, pan: Vector) -> Vector {
        if !self.is_zoomed() {
            return Vector::ZERO;
        }
        match self.max_pan() {
            Some(max) => Vector::new(pan.x.clamp(-max.x, max.x), pan.y.clamp(-max.y, max.y)),
            None => pan,
        }
    }
}
