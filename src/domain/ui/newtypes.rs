// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for viewer values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom factor bounds.
pub mod zoom_bounds {
    /// Unzoomed level; also the minimum.
    pub const MIN_LEVEL: f32 = 1.0;
    /// Maximum zoom factor for the turntable view.
    pub const TURNTABLE_MAX: f32 = 2.5;
    /// Zoom step for the turntable view.
    pub const TURNTABLE_STEP: f32 = 0.2;
    /// Maximum zoom factor for the fullscreen gallery view.
    pub const GALLERY_MAX: f32 = 3.0;
    /// Zoom step for the fullscreen gallery view.
    pub const GALLERY_STEP: f32 = 0.5;
    /// Smallest accepted zoom step.
    pub const MIN_STEP: f32 = 0.05;
    /// Largest accepted zoom step.
    pub const MAX_STEP: f32 = 1.0;
}

/// Zoom levels are kept on a 1/100 grid so repeated steps never drift.
fn snap(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Zoom increment applied per zoom-in/zoom-out command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    ///
    /// Non-finite values fall back to the default step.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if !step.is_finite() {
            return Self::default();
        }
        Self(snap(step.clamp(zoom_bounds::MIN_STEP, zoom_bounds::MAX_STEP)))
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(zoom_bounds::TURNTABLE_STEP)
    }
}

// =============================================================================
// ZoomLimits
// =============================================================================

/// Upper bound and step of a zoom context.
///
/// The turntable view and the fullscreen gallery use different limits;
/// the lower bound is always [`zoom_bounds::MIN_LEVEL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    max: f32,
    step: ZoomStep,
}

impl ZoomLimits {
    /// Limits of the windowed turntable view (max 2.5×, step 0.2).
    pub const TURNTABLE: Self = Self {
        max: zoom_bounds::TURNTABLE_MAX,
        step: ZoomStep(zoom_bounds::TURNTABLE_STEP),
    };

    /// Limits of the fullscreen gallery view (max 3.0×, step 0.5).
    pub const GALLERY: Self = Self {
        max: zoom_bounds::GALLERY_MAX,
        step: ZoomStep(zoom_bounds::GALLERY_STEP),
    };

    /// Creates custom limits. A maximum below 1.0 (or not finite) is raised to 1.0.
    #[must_use]
    pub fn new(max: f32, step: ZoomStep) -> Self {
        let max = if max.is_finite() { max } else { zoom_bounds::MIN_LEVEL };
        Self {
            max: snap(max.max(zoom_bounds::MIN_LEVEL)),
            step,
        }
    }

    /// Returns the same limits with another step.
    #[must_use]
    pub fn with_step(self, step: ZoomStep) -> Self {
        Self { step, ..self }
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Returns the zoom step.
    #[must_use]
    pub fn step(self) -> ZoomStep {
        self.step
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::TURNTABLE
    }
}

// =============================================================================
// ZoomLevel
// =============================================================================

/// Zoom factor, guaranteed to lie in `[1.0, limits.max()]`.
///
/// # Example
///
/// ```
/// use iced_turntable::domain::ui::newtypes::{ZoomLevel, ZoomLimits};
///
/// let limits = ZoomLimits::TURNTABLE;
/// let level = ZoomLevel::default().zoom_in(limits);
/// assert_eq!(level.value(), 1.2);
///
/// // Zooming out below 1.0 is clamped
/// assert!(level.zoom_out(limits).zoom_out(limits).is_unzoomed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// The unzoomed level.
    pub const UNZOOMED: Self = Self(zoom_bounds::MIN_LEVEL);

    /// Creates a zoom level, clamping into `[1.0, limits.max()]`.
    #[must_use]
    pub fn new(level: f32, limits: ZoomLimits) -> Self {
        if level.is_nan() {
            return Self::UNZOOMED;
        }
        Self(snap(level.clamp(zoom_bounds::MIN_LEVEL, limits.max())))
    }

    /// Returns the raw zoom factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true at 1.0.
    #[must_use]
    pub fn is_unzoomed(self) -> bool {
        self.0 <= zoom_bounds::MIN_LEVEL
    }

    /// Returns true at the maximum of the given limits.
    #[must_use]
    pub fn is_max(self, limits: ZoomLimits) -> bool {
        self.0 >= limits.max()
    }

    /// Increases zoom by one step of the given limits.
    #[must_use]
    pub fn zoom_in(self, limits: ZoomLimits) -> Self {
        Self::new(self.0 + limits.step().value(), limits)
    }

    /// Decreases zoom by one step of the given limits.
    #[must_use]
    pub fn zoom_out(self, limits: ZoomLimits) -> Self {
        Self::new(self.0 - limits.step().value(), limits)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::UNZOOMED
    }
}

// =============================================================================
// DragStepThreshold
// =============================================================================

/// Drag threshold bounds (pixels per frame step).
pub mod drag_threshold_bounds {
    /// Minimum pixel distance per frame step.
    pub const MIN: f32 = 1.0;
    /// Maximum pixel distance per frame step.
    pub const MAX: f32 = 200.0;
    /// Default pixel distance per frame step.
    pub const DEFAULT: f32 = 10.0;
}

/// Horizontal pointer distance (in logical pixels) that equals one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStepThreshold(f32);

impl DragStepThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    ///
    /// Non-finite values fall back to the default threshold.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if !pixels.is_finite() {
            return Self::default();
        }
        Self(pixels.clamp(drag_threshold_bounds::MIN, drag_threshold_bounds::MAX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DragStepThreshold {
    fn default() -> Self {
        Self(drag_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// AutoRotatePeriod
// =============================================================================

/// Auto-rotate period bounds (milliseconds).
pub mod auto_rotate_bounds {
    /// Fastest accepted tick period.
    pub const MIN_MS: u64 = 16;
    /// Slowest accepted tick period.
    pub const MAX_MS: u64 = 2000;
    /// Default tick period.
    pub const DEFAULT_MS: u64 = 100;
}

/// Interval between two auto-rotate frame advances.
///
/// # Example
///
/// ```
/// use iced_turntable::domain::ui::newtypes::AutoRotatePeriod;
/// use std::time::Duration;
///
/// assert_eq!(AutoRotatePeriod::default().as_duration(), Duration::from_millis(100));
/// assert_eq!(AutoRotatePeriod::new(1).millis(), 16); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoRotatePeriod(u64);

impl AutoRotatePeriod {
    /// Creates a new period, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(auto_rotate_bounds::MIN_MS, auto_rotate_bounds::MAX_MS))
    }

    /// Returns the period in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the period as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoRotatePeriod {
    fn default() -> Self {
        Self(auto_rotate_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// FrameCacheCapacity
// =============================================================================

/// Frame cache capacity bounds (number of decoded frames).
pub mod frame_cache_bounds {
    /// Minimum number of cached frames.
    pub const MIN: usize = 8;
    /// Maximum number of cached frames.
    pub const MAX: usize = 720;
    /// Default number of cached frames.
    pub const DEFAULT: usize = 72;
}

/// Number of frame images the loader keeps in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCacheCapacity(usize);

impl FrameCacheCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(frames: usize) -> Self {
        Self(frames.clamp(frame_cache_bounds::MIN, frame_cache_bounds::MAX))
    }

    /// Returns the capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for FrameCacheCapacity {
    fn default() -> Self {
        Self(frame_cache_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_level_clamps_to_limits() {
        let limits = ZoomLimits::TURNTABLE;
        assert_eq!(ZoomLevel::new(0.2, limits).value(), 1.0);
        assert_eq!(ZoomLevel::new(9.0, limits).value(), 2.5);
        assert_eq!(ZoomLevel::new(9.0, ZoomLimits::GALLERY).value(), 3.0);
    }

    #[test]
    fn repeated_steps_land_on_grid() {
        let limits = ZoomLimits::TURNTABLE;
        let mut level = ZoomLevel::default();
        for _ in 0..5 {
            level = level.zoom_in(limits);
        }
        assert_eq!(level.value(), 2.0);
    }

    #[test]
    fn zoom_in_stops_at_max() {
        let limits = ZoomLimits::TURNTABLE;
        let mut level = ZoomLevel::default();
        for _ in 0..50 {
            level = level.zoom_in(limits);
            assert!(level.value() <= limits.max());
        }
        assert!(level.is_max(limits));
    }

    #[test]
    fn non_finite_inputs_fall_back_to_defaults() {
        assert_eq!(ZoomStep::new(f32::NAN), ZoomStep::default());
        assert_eq!(ZoomStep::new(f32::INFINITY), ZoomStep::default());
        assert_eq!(DragStepThreshold::new(f32::NAN), DragStepThreshold::default());
        assert_eq!(
            DragStepThreshold::new(f32::NEG_INFINITY),
            DragStepThreshold::default()
        );
        assert_eq!(ZoomLimits::new(f32::NAN, ZoomStep::default()).max(), 1.0);
        assert!(ZoomLevel::new(f32::NAN, ZoomLimits::TURNTABLE).is_unzoomed());
    }

    #[test]
    fn custom_limits_never_go_below_unzoomed() {
        let limits = ZoomLimits::new(0.5, ZoomStep::new(0.2));
        assert_eq!(limits.max(), 1.0);
        assert!(ZoomLevel::default().zoom_in(limits).is_unzoomed());
    }

    #[test]
    fn zoom_step_clamps() {
        assert_eq!(ZoomStep::new(0.0).value(), zoom_bounds::MIN_STEP);
        assert_eq!(ZoomStep::new(5.0).value(), zoom_bounds::MAX_STEP);
    }

    #[test]
    fn drag_threshold_clamps() {
        assert_eq!(DragStepThreshold::new(0.0).value(), drag_threshold_bounds::MIN);
        assert_eq!(DragStepThreshold::new(1000.0).value(), drag_threshold_bounds::MAX);
        assert_eq!(DragStepThreshold::default().value(), 10.0);
    }

    #[test]
    fn auto_rotate_period_clamps() {
        assert_eq!(AutoRotatePeriod::new(0).millis(), auto_rotate_bounds::MIN_MS);
        assert_eq!(AutoRotatePeriod::new(60_000).millis(), auto_rotate_bounds::MAX_MS);
    }

    #[test]
    fn frame_cache_capacity_clamps() {
        assert_eq!(FrameCacheCapacity::new(0).value(), frame_cache_bounds::MIN);
        assert_eq!(FrameCacheCapacity::new(100_000).value(), frame_cache_bounds::MAX);
    }
}
