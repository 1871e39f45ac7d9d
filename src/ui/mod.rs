// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Turntable viewer: frame pane, control bar, pointer mapping
//! - [`state`] - Framework-independent controllers (rotation, zoom, fullscreen, drag)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod state;
pub mod viewer;
