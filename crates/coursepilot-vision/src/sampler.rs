//! Live screen capture.

use screenshots::image::DynamicImage;
use screenshots::Screen;
use thiserror::Error;
use tracing::trace;

use coursepilot_core::Region;

use crate::frame::Frame;

/// Capture errors.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("No monitor found")]
    NoMonitor,
}

/// Captures a pixel region of the screen and reduces it to a grayscale
/// [`Frame`].
///
/// Every call re-captures live pixels; nothing is cached. The backend clips
/// the requested region to screen bounds, so the returned frame may be
/// smaller than the region near screen edges.
pub trait FrameSampler {
    fn capture(&mut self, region: Region) -> Result<Frame, CaptureError>;
}

/// [`FrameSampler`] backed by the primary monitor.
pub struct ScreenSampler {
    screen: Screen,
}

impl ScreenSampler {
    /// Bind to the primary monitor, falling back to the first one found.
    pub fn new() -> Result<Self, CaptureError> {
        let screens = Screen::all().map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;
        let screen = screens
            .into_iter()
            .find(|s| s.display_info.is_primary)
            .or_else(|| Screen::all().ok()?.into_iter().next())
            .ok_or(CaptureError::NoMonitor)?;
        Ok(Self { screen })
    }
}

impl FrameSampler for ScreenSampler {
    fn capture(&mut self, region: Region) -> Result<Frame, CaptureError> {
        let image = self
            .screen
            .capture_area(region.x, region.y, region.width, region.height)
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        let gray = DynamicImage::ImageRgba8(image).to_luma8();
        let (width, height) = gray.dimensions();
        trace!(
            "captured {}x{} frame from region at ({}, {})",
            width,
            height,
            region.x,
            region.y
        );
        Ok(Frame::from_luma(width, height, gray.into_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_error_display() {
        let err = CaptureError::CaptureFailed("backend gone".to_string());
        assert_eq!(err.to_string(), "Capture failed: backend gone");
        assert_eq!(CaptureError::NoMonitor.to_string(), "No monitor found");
    }

    // Integration tests that require actual screen access
    #[test]
    #[ignore] // Requires actual display
    fn test_screen_sampler_captures_region() {
        let mut sampler = ScreenSampler::new().unwrap();
        let frame = sampler.capture(Region::new(0, 0, 64, 48)).unwrap();
        assert!(frame.width() <= 64);
        assert!(frame.height() <= 48);
        assert!(!frame.is_empty());
    }
}
