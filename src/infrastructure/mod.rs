// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, wrapping the Iced runtime and system I/O.
//!
//! # Available Adapters
//!
//! - [`scheduler`]: Auto-rotate timers as Iced subscriptions (implements [`Scheduler`])
//! - [`fullscreen`]: Window mode changes as Iced tasks (implements [`FullscreenPort`])
//! - [`frame_resolver`]: URL templates (implements [`FrameUrlResolver`])
//! - [`frame_loader`]: Frame fetching and LRU caching
//!
//! [`Scheduler`]: crate::application::port::Scheduler
//! [`FullscreenPort`]: crate::application::port::FullscreenPort
//! [`FrameUrlResolver`]: crate::application::port::FrameUrlResolver

pub mod frame_loader;
pub mod frame_resolver;
pub mod fullscreen;
pub mod scheduler;

// Re-export main types for convenience
pub use frame_loader::{FetchResult, FrameCache, FrameImage};
pub use frame_resolver::TemplateResolver;
pub use fullscreen::WindowFullscreen;
pub use scheduler::SubscriptionScheduler;
