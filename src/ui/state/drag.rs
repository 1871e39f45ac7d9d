// SPDX-License-Identifier: MPL-2.0
//! Drag session management
//!
//! Converts horizontal pointer motion into discrete frame steps while a
//! rotation drag is in progress.

use crate::domain::ui::DragStepThreshold;

/// One continuous pointer/touch rotation gesture.
///
/// Holds the last sampled pointer X used to compute incremental deltas.
/// Lives only inside [`RotationMode::Dragging`](super::rotation::RotationMode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    anchor_x: f32,
}

impl DragSession {
    /// Opens a session anchored at the given pointer X.
    #[must_use]
    pub fn new(anchor_x: f32) -> Self {
        Self { anchor_x }
    }

    /// Returns the current anchor.
    #[must_use]
    pub fn anchor_x(&self) -> f32 {
        self.anchor_x
    }

    /// Consumes pointer motion and returns the signed number of frame steps.
    ///
    /// When at least one step is produced the anchor jumps to `pointer_x`,
    /// discarding the sub-threshold remainder. Motion below the threshold
    /// keeps the old anchor so slow drags still add up.
    pub fn advance(&mut self, pointer_x: f32, threshold: DragStepThreshold) -> i64 {
        let steps = steps_for_delta(pointer_x - self.anchor_x, threshold);
        if steps != 0 {
            self.anchor_x = pointer_x;
        }
        steps
    }
}

/// Number of whole frame steps in a horizontal delta.
///
/// Rightward motion (positive delta) yields positive steps. A delta must
/// strictly exceed the threshold to produce a step.
#[must_use]
pub fn steps_for_delta(delta: f32, threshold: DragStepThreshold) -> i64 {
    let distance = delta.abs();
    if distance.is_nan() || distance <= threshold.value() {
        return 0;
    }
    // Float-to-int casts saturate, so huge deltas cannot overflow
    #[allow(clippy::cast_possible_truncation)]
    let steps = (distance / threshold.value()).floor() as i64;
    if delta.is_sign_negative() {
        -steps
    } else {
        steps
    }
}
