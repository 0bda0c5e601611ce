//! Screen sampling and frame-difference scoring for coursepilot.
//!
//! - [`Frame`] - a grayscale intensity grid captured from a screen region
//! - [`FrameSampler`] / [`ScreenSampler`] - live pixel capture
//! - [`mean_squared_error`] - scalar dissimilarity between two frames

mod diff;
mod frame;
mod sampler;

pub use diff::mean_squared_error;
pub use frame::Frame;
pub use sampler::{CaptureError, FrameSampler, ScreenSampler};
