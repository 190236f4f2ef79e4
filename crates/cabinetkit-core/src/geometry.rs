//! Plain geometry value types
//!
//! Coordinates use a top-left origin with y growing downwards, matching the
//! cabinet face and the SVG coordinate frame.

use crate::units::deserialize_length;
use serde::{Deserialize, Serialize};

/// Overall outside dimensions of a cabinet, in inches.
///
/// Zero is accepted and yields degenerate (zero-area) geometry. Negative
/// values are a caller precondition violation; nothing clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(deserialize_with = "deserialize_length")]
    pub width: f64,
    #[serde(deserialize_with = "deserialize_length")]
    pub height: f64,
    #[serde(deserialize_with = "deserialize_length")]
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(24.0, 30.0, 12.0)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow both axes by the same amount
    pub fn inflate(&self, amount: f64) -> Self {
        Self::new(self.width + amount, self.height + amount)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Multiply position and size by a uniform factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// True when `other` lies entirely within this rectangle (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
