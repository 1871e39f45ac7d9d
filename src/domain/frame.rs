// SPDX-License-Identifier: MPL-2.0
//! Frame sequence types for turntable rotation.
//!
//! A frame set is a cyclic sequence of `N` still images taken at equally
//! spaced rotation angles. Frame indices are 1-based and every arithmetic
//! operation wraps modulo `N`, so the first and last frames are adjacent.

use std::fmt;
use std::num::NonZeroU32;

// =============================================================================
// FrameCount
// =============================================================================

/// Number of frames in a frame set, guaranteed to be at least 1.
///
/// # Example
///
/// ```
/// use iced_turntable::domain::frame::FrameCount;
///
/// assert_eq!(FrameCount::new(36).get(), 36);
///
/// // A frame set can never be empty
/// assert_eq!(FrameCount::new(0).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCount(NonZeroU32);

impl FrameCount {
    /// Frame count used when the caller does not supply one.
    pub const DEFAULT: Self = Self(NonZeroU32::MIN.saturating_add(35));

    /// Creates a frame count, raising zero to one.
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self(NonZeroU32::new(count).unwrap_or(NonZeroU32::MIN))
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Wraps an arbitrary 1-based position into `[1, N]`.
    ///
    /// Position 0 maps to `N` and position `N + 1` maps to 1.
    #[must_use]
    pub fn wrap(self, position: i64) -> FrameIndex {
        let n = i64::from(self.get());
        // Reduce first so no input can overflow; remainder 0 is frame N
        let wrapped = match position.rem_euclid(n) {
            0 => n,
            rem => rem,
        };
        FrameIndex(u32::try_from(wrapped).unwrap_or(1))
    }

    /// Pins an arbitrary position into `[1, N]` without wrapping.
    #[must_use]
    pub fn clamp(self, position: i64) -> FrameIndex {
        let clamped = position.clamp(1, i64::from(self.get()));
        FrameIndex(u32::try_from(clamped).unwrap_or(1))
    }

    /// Returns the last frame of the set.
    #[must_use]
    pub fn last(self) -> FrameIndex {
        FrameIndex(self.get())
    }

}

impl Default for FrameCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// FrameIndex
// =============================================================================

/// 1-based index of a frame inside a frame set.
///
/// Values are only produced through [`FrameCount`], which keeps them inside
/// `[1, N]` for the set they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameIndex(u32);

impl FrameIndex {
    /// The first frame.
    pub const FIRST: Self = Self(1);

    /// Returns the 1-based value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the 0-based position, for slices and progress ratios.
    #[must_use]
    pub fn zero_based(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Moves by `steps` frames (negative steps rotate backwards), wrapping.
    ///
    /// # Example
    ///
    /// ```
    /// use iced_turntable::domain::frame::{FrameCount, FrameIndex};
    ///
    /// let count = FrameCount::new(36);
    /// let last = count.last();
    /// assert_eq!(last.offset(1, count), FrameIndex::FIRST);
    /// assert_eq!(FrameIndex::FIRST.offset(-1, count), last);
    /// ```
    #[must_use]
    pub fn offset(self, steps: i64, count: FrameCount) -> Self {
        count.wrap(i64::from(self.0) + steps.rem_euclid(i64::from(count.get())))
    }

    /// Returns the position of this frame as a fraction of a full turn.
    #[must_use]
    pub fn progress(self, count: FrameCount) -> f32 {
        self.zero_based() as f32 / count.get() as f32
    }
}

impl Default for FrameIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ObjectId / FrameSet
// =============================================================================

/// Opaque key identifying the inspected object (e.g. one vehicle).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Creates a new object identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The cyclic sequence of frames of one object instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    object_id: ObjectId,
    count: FrameCount,
}

impl FrameSet {
    /// Creates a frame set for the given object.
    #[must_use]
    pub fn new(object_id: ObjectId, count: FrameCount) -> Self {
        Self { object_id, count }
    }

    /// Returns the object this frame set depicts.
    #[must_use]
    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn count(&self) -> FrameCount {
        self.count
    }
}
