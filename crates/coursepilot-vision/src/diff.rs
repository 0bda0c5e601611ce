//! Frame dissimilarity scoring.

use tracing::debug;

use crate::frame::Frame;

/// Mean squared per-pixel intensity difference between two frames.
///
/// Frames of differing shapes are cropped to their shared top-left rectangle
/// of minimal common dimensions before comparison, so transient capture-size
/// jitter never fails a poll. An empty overlap scores 0.0 by convention
/// ("no change") - note this can mask real change if the shapes are fully
/// disjoint, which is why it is logged.
pub fn mean_squared_error(a: &Frame, b: &Frame) -> f64 {
    let width = a.width().min(b.width());
    let height = a.height().min(b.height());

    if width == 0 || height == 0 {
        debug!("empty frame overlap, scoring 0.0");
        return 0.0;
    }

    let mut sum = 0.0;
    for y in 0..height {
        for x in 0..width {
            let d = f64::from(a.get(x, y)) - f64::from(b.get(x, y));
            sum += d * d;
        }
    }
    sum / f64::from(width * height)
}
