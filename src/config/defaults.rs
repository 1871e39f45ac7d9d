// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Values are validated at compile time.
//!
//! # Categories
//!
//! - **Rotation**: Frame count, drag threshold, auto-rotate period
//! - **Zoom**: Steps for the windowed and fullscreen views
//! - **Frames**: URL template and cache size

use crate::domain::ui::newtypes::{
    auto_rotate_bounds, drag_threshold_bounds, frame_cache_bounds, zoom_bounds,
};

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Number of frames when neither CLI nor config gives one.
pub const DEFAULT_FRAME_COUNT: u32 = 36;

/// Pixels of horizontal drag per frame step.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = drag_threshold_bounds::DEFAULT;

/// Milliseconds between auto-rotate steps.
pub const DEFAULT_AUTO_ROTATE_PERIOD_MS: u64 = auto_rotate_bounds::DEFAULT_MS;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom step of the windowed turntable view.
pub const DEFAULT_ZOOM_STEP: f32 = zoom_bounds::TURNTABLE_STEP;

/// Zoom step of the fullscreen gallery view.
pub const DEFAULT_GALLERY_ZOOM_STEP: f32 = zoom_bounds::GALLERY_STEP;

// ==========================================================================
// Frame Loading Defaults
// ==========================================================================

/// Frame location template; `{object}` and `{index:02}` are substituted.
pub const DEFAULT_URL_TEMPLATE: &str = "frames/{object}/{index:02}.jpg";

/// Decoded frames kept in memory.
pub const DEFAULT_FRAME_CACHE_CAPACITY: usize = frame_cache_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FRAME_COUNT >= 1);
    assert!(DEFAULT_DRAG_THRESHOLD_PX >= drag_threshold_bounds::MIN);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= drag_threshold_bounds::MAX);
    assert!(DEFAULT_AUTO_ROTATE_PERIOD_MS >= auto_rotate_bounds::MIN_MS);
    assert!(DEFAULT_AUTO_ROTATE_PERIOD_MS <= auto_rotate_bounds::MAX_MS);
    assert!(DEFAULT_ZOOM_STEP >= zoom_bounds::MIN_STEP);
    assert!(DEFAULT_ZOOM_STEP <= zoom_bounds::MAX_STEP);
    assert!(DEFAULT_GALLERY_ZOOM_STEP >= zoom_bounds::MIN_STEP);
    assert!(DEFAULT_GALLERY_ZOOM_STEP <= zoom_bounds::MAX_STEP);
    assert!(zoom_bounds::TURNTABLE_MAX > zoom_bounds::MIN_LEVEL);
    assert!(zoom_bounds::GALLERY_MAX >= zoom_bounds::TURNTABLE_MAX);
    assert!(DEFAULT_FRAME_CACHE_CAPACITY >= frame_cache_bounds::MIN);
    assert!(DEFAULT_FRAME_CACHE_CAPACITY <= frame_cache_bounds::MAX);
};
