//! Floor region selection.
//!
//! The floor is a fixed band at the bottom of the frame: everything from
//! 60% of the image height down to the last row, across the full width.
//! There is no content analysis involved.
//!
//! # Coordinate System
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────────┐
//!   │   │              │  untouched
//!   │   ├──────────────┤  start_y = floor(height * 0.6)
//!   │   │    floor     │  t = 1.0 at start_y ... 0.0 towards end_y
//!   │   └──────────────┘  end_y = height (exclusive)
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use epoxy_core::FloorRegion;
//!
//! let region = FloorRegion::detect(10, 10);
//! assert_eq!(region.start_y, 6);
//! assert_eq!(region.end_y, 10);
//! assert_eq!(region.rows().count(), 4);
//! ```

use std::ops::Range;

/// Numerator of the floor start fraction (`3/5 = 0.6`).
pub const FLOOR_START_NUMERATOR: u64 = 3;

/// Denominator of the floor start fraction.
pub const FLOOR_START_DENOMINATOR: u64 = 5;

/// Half-open band of rows `[start_y, end_y)` treated as floor.
///
/// # Invariants
///
/// - `start_y <= end_y`
/// - `start_y < end_y` whenever the source height is at least 1
/// - An empty region (`start_y == end_y`) transforms no pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRegion {
    /// First floor row (inclusive)
    pub start_y: u32,
    /// One past the last floor row (exclusive)
    pub end_y: u32,
}

impl FloorRegion {
    /// Selects the floor band for an image of the given size.
    ///
    /// `start_y = floor(height * 0.6)`, computed exactly in integer math.
    /// The width does not influence the band; the region always spans
    /// every column.
    ///
    /// ```rust
    /// use epoxy_core::FloorRegion;
    ///
    /// assert_eq!(FloorRegion::detect(640, 480).start_y, 288);
    /// assert!(FloorRegion::detect(1, 0).is_empty());
    /// ```
    pub fn detect(_width: u32, height: u32) -> Self {
        let start_y = (height as u64 * FLOOR_START_NUMERATOR / FLOOR_START_DENOMINATOR) as u32;
        Self {
            start_y,
            end_y: height,
        }
    }

    /// Creates a region from explicit bounds, normalizing swapped values.
    pub fn new(start_y: u32, end_y: u32) -> Self {
        if start_y <= end_y {
            Self { start_y, end_y }
        } else {
            Self {
                start_y: end_y,
                end_y: start_y,
            }
        }
    }

    /// Number of rows in the band.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.end_y.saturating_sub(self.start_y)
    }

    /// Returns `true` if the band contains no rows.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_y >= self.end_y
    }

    /// Row indices covered by the band.
    #[inline]
    pub fn rows(&self) -> Range<u32> {
        self.start_y..self.end_y
    }

    /// Returns `true` if row `y` lies inside the band.
    #[inline]
    pub const fn contains_row(&self, y: u32) -> bool {
        y >= self.start_y && y < self.end_y
    }

    /// Returns `true` if the band fits inside an image of `height` rows.
    #[inline]
    pub const fn fits(&self, height: u32) -> bool {
        self.start_y <= self.end_y && self.end_y <= height
    }

    /// Reflection gradient position for row `y`.
    ///
    /// `1.0` at `start_y`, falling linearly towards `0.0` at `end_y`.
    /// Empty bands return `0.0` instead of dividing by zero.
    #[inline]
    pub fn gradient(&self, y: u32) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let offset = y.saturating_sub(self.start_y) as f32;
        1.0 - offset / self.height() as f32
    }
}
