//! Screen geometry types.

use serde::{Deserialize, Serialize};

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangular screen area defined by origin and size.
///
/// Immutable once established; produced by the external region selector and
/// consumed read-only here. Serde field names match the selector's on-disk
/// format (`x`, `y`, `w`, `h`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Center point of the region.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + (self.width / 2) as i32,
            y: self.y + (self.height / 2) as i32,
        }
    }

    /// Whether a point lies inside the region.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && p.x < self.x + self.width as i32
            && p.y < self.y + self.height as i32
    }

    /// A zero-area region cannot be sampled or clicked meaningfully.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The four screen regions the automaton operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonRegions {
    /// Where the video renders; polled for frame-to-frame change.
    pub video: Region,
    /// The "next lesson" control.
    pub next: Region,
    /// The quiz popup answer area.
    pub quiz: Region,
    /// The popup close control; compared against a baseline snapshot.
    pub close: Region,
}
