//! Automation errors.

use thiserror::Error;

use coursepilot_input::PointerError;
use coursepilot_vision::CaptureError;

/// Anything that can go wrong inside the automation loop.
///
/// Everything raised while sampling, comparing or synthesizing input is
/// transient: the supervisor logs it, backs off and resumes. Only
/// setup-time failures (region file validation, baseline capture) abort a
/// run, and those surface before the loop starts.
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Input(#[from] PointerError),
}

impl AutomationError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Capture(_) | Self::Input(_))
    }
}
