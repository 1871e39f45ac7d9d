// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the turntable views.
//!
//! - **Palette**: Base colors
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Fixed component sizes
//! - **Typography**: Font size scale

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of the control bar under the frame pane.
    ///
    /// Fixed so the pane size can be derived from the window size.
    pub const CONTROL_BAR_HEIGHT: f32 = 56.0;

    /// Width of the frame progress slider.
    pub const PROGRESS_SLIDER_WIDTH: f32 = 240.0;

    /// Width reserved for the frame counter and zoom readouts.
    pub const READOUT_WIDTH: f32 = 72.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - placeholder headings
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - labels and readouts
    pub const BODY: f32 = 14.0;

    /// Caption - transient notices
    pub const CAPTION: f32 = 12.0;
}
