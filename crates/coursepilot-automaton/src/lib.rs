//! The lesson-progression automaton.
//!
//! Consumes frame samples and dissimilarity scores, decides between "video
//! playing", "video ended" and "quiz popup", and drives the motion
//! synthesizer accordingly. The whole loop is blocking and single-threaded;
//! cancellation is cooperative via [`coursepilot_core::CancelToken`].

mod automaton;
mod config;
mod error;
mod state;

pub use automaton::{LessonAutomaton, PollOutcome, RunSummary};
pub use config::{AutomationConfig, BackoffPolicy};
pub use error::AutomationError;
pub use state::{Phase, RunState};
