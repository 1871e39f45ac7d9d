// SPDX-License-Identifier: MPL-2.0
//! Frame URL resolution port definition.
//!
//! The viewer never loads images itself. It only asks a [`FrameUrlResolver`]
//! where the image for a given frame lives; fetching, caching, retries and
//! preloading order belong to the image loading collaborator.

use crate::domain::frame::{FrameIndex, ObjectId};
use std::fmt;

// =============================================================================
// FrameUrl
// =============================================================================

/// Location of one frame image (local path or `http(s)` URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameUrl(String);

impl FrameUrl {
    /// Creates a frame URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `http://` and `https://` locations.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for FrameUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// FrameUrlResolver Trait
// =============================================================================

/// Read-only mapping from `(object, frame)` to an image location.
pub trait FrameUrlResolver {
    /// Returns the image location of `index` for `object_id`.
    fn resolve(&self, object_id: &ObjectId, index: FrameIndex) -> FrameUrl;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_detection() {
        assert!(FrameUrl::new("https://cdn.example.com/a/01.jpg").is_remote());
        assert!(FrameUrl::new("http://localhost/01.jpg").is_remote());
        assert!(!FrameUrl::new("/var/frames/01.jpg").is_remote());
    }
}
