// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::FrameUrl;
use crate::infrastructure::FetchResult;
use crate::ui::viewer::component;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// A frame fetch finished.
    FrameLoaded(FrameUrl, FetchResult),
    /// The window was opened or resized; `size` is the full window size.
    WindowResized { id: window::Id, size: Size },
    /// Write the diagnostics report next to the settings file.
    ExportDiagnostics,
    Tick(Instant), // Periodic tick for notice auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Every value left at `None` falls back to `settings.toml`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Object whose frames are shown.
    pub object: Option<String>,
    /// Number of frames of the object.
    pub frames: Option<u32>,
    /// First frame shown (1-based, clamped).
    pub start: Option<i64>,
    /// Frame URL template.
    pub template: Option<String>,
    /// Start auto-rotating immediately.
    pub auto_rotate: bool,
    /// Hide the fullscreen control.
    pub no_fullscreen: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TURNTABLE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
