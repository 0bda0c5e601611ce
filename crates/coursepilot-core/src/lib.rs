//! Shared types for coursepilot.
//!
//! Leaf crate with no heavy dependencies: screen geometry (`Point`,
//! `Region`, `LessonRegions`) and the cooperative `CancelToken` checked at
//! automaton loop boundaries.

mod cancel;
mod region;

pub use cancel::CancelToken;
pub use region::{LessonRegions, Point, Region};
