// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`frame`]: Frame set types ([`FrameCount`](frame::FrameCount),
//!   [`FrameIndex`](frame::FrameIndex), [`FrameSet`](frame::FrameSet))
//! - [`ui`]: UI value objects ([`ZoomLevel`](ui::newtypes::ZoomLevel),
//!   [`DragStepThreshold`](ui::newtypes::DragStepThreshold),
//!   [`AutoRotatePeriod`](ui::newtypes::AutoRotatePeriod))

pub mod frame;
pub mod ui;
