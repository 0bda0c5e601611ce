//! Captured frame representation.

/// A grid of grayscale pixel intensities sampled from a screen region at one
/// instant.
///
/// Frames are ephemeral: recomputed on every poll, compared, then dropped.
/// They carry no identity beyond their contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Build a frame from row-major grayscale pixels.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn from_luma(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A frame filled with a single intensity, handy in tests.
    pub fn filled(width: u32, height: u32, intensity: u8) -> Self {
        Self::from_luma(width, height, vec![intensity; (width as usize) * (height as usize)])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intensity at (x, y). Caller must stay in bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
