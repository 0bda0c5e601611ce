//! Automaton phases and mutable run state.

/// Where the automaton currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Video assumed to be playing; polling for change.
    Playing,
    /// Enough static polls accumulated; checking the close region.
    ConfirmingCompletion,
    /// Close region unchanged: a quiz popup is blocking playback.
    HandlingQuiz,
    /// Close region changed: video finished, moving to the next lesson.
    AdvancingLesson,
}

/// Counters mutated only by the automaton.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunState {
    consecutive_static: u32,
    lessons_completed: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one poll's dissimilarity score into the static counter.
    ///
    /// Scores below the threshold increment the counter by exactly one;
    /// anything at or above it resets to zero. Returns the updated count.
    pub fn record_score(&mut self, score: f64, threshold: f64) -> u32 {
        if score < threshold {
            self.consecutive_static += 1;
        } else {
            self.consecutive_static = 0;
        }
        self.consecutive_static
    }

    pub fn reset_static(&mut self) {
        self.consecutive_static = 0;
    }

    pub fn consecutive_static(&self) -> u32 {
        self.consecutive_static
    }

    /// Bump the lesson counter, returning the new total.
    pub fn complete_lesson(&mut self) -> u64 {
        self.lessons_completed += 1;
        self.lessons_completed
    }

    pub fn lessons_completed(&self) -> u64 {
        self.lessons_completed
    }
}
