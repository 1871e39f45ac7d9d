// SPDX-License-Identifier: MPL-2.0
//! `iced_turntable` is a 360° frame-sequence viewer built with the Iced GUI framework.
//!
//! An object is photographed at `N` equally spaced angles; dragging the
//! pointer horizontally, the auto-rotate timer or the control bar step
//! through those frames cyclically. The viewer also zooms and pans a still
//! frame and can switch the window to fullscreen.
//!
//! The rotation, zoom and fullscreen controllers in [`ui::state`] are
//! independent of the Iced runtime; timers and the platform fullscreen API
//! are injected through the ports in [`application::port`].

#![doc(html_root_url = "https://docs.rs/iced_turntable/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod test_utils;
pub mod ui;
