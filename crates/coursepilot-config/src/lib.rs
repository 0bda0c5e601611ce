//! Region-file loading for coursepilot.
//!
//! The interactive region selector is an external collaborator; it persists
//! the four chosen screen regions as JSON. This crate parses that file and
//! validates it into a [`LessonRegions`] value. A missing or unusable region
//! is a fatal configuration error, reported before the automation loop
//! starts.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::RegionLoader;
pub use schema::RegionFile;
