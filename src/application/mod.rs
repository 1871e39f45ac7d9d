// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the viewer and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui`) is generic over the ports
//!
//! # Example
//!
//! ```ignore
//! use iced_turntable::application::port::FrameUrlResolver;
//! use iced_turntable::infrastructure::frame_resolver::TemplateResolver;
//!
//! // Infrastructure implements the port trait
//! let resolver = TemplateResolver::new("frames/{object}/{index:02}.jpg");
//! ```

pub mod port;
