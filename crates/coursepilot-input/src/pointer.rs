//! Pointer device abstraction.

use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};
use thiserror::Error;

use coursepilot_core::Point;

/// Pointer input errors.
#[derive(Debug, Error)]
pub enum PointerError {
    #[error("Pointer input failed: {0}")]
    Failed(String),
}

/// A pointing device: position query, absolute moves, left-button press and
/// release. The seam between motion synthesis and the OS.
pub trait Pointer {
    fn position(&mut self) -> Result<Point, PointerError>;
    fn move_to(&mut self, target: Point) -> Result<(), PointerError>;
    fn press(&mut self) -> Result<(), PointerError>;
    fn release(&mut self) -> Result<(), PointerError>;
}

/// [`Pointer`] backed by enigo, driving the real OS cursor.
pub struct EnigoPointer {
    enigo: Enigo,
}

impl EnigoPointer {
    pub fn new() -> Result<Self, PointerError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| PointerError::Failed(e.to_string()))?;
        Ok(Self { enigo })
    }
}

impl Pointer for EnigoPointer {
    fn position(&mut self) -> Result<Point, PointerError> {
        let (x, y) = self
            .enigo
            .location()
            .map_err(|e| PointerError::Failed(e.to_string()))?;
        Ok(Point::new(x, y))
    }

    fn move_to(&mut self, target: Point) -> Result<(), PointerError> {
        self.enigo
            .move_mouse(target.x, target.y, Coordinate::Abs)
            .map_err(|e| PointerError::Failed(e.to_string()))
    }

    fn press(&mut self) -> Result<(), PointerError> {
        self.enigo
            .button(Button::Left, Direction::Press)
            .map_err(|e| PointerError::Failed(e.to_string()))
    }

    fn release(&mut self) -> Result<(), PointerError> {
        self.enigo
            .button(Button::Left, Direction::Release)
            .map_err(|e| PointerError::Failed(e.to_string()))
    }
}
