//! The lesson-progression state machine.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use coursepilot_core::{CancelToken, LessonRegions, Point};
use coursepilot_input::{HumanMotion, Pacer, Pointer};
use coursepilot_vision::{mean_squared_error, Frame, FrameSampler};

use crate::config::{AutomationConfig, BackoffPolicy};
use crate::error::AutomationError;
use crate::state::{Phase, RunState};

/// Quiz handling always performs exactly this many dismissal attempts.
const QUIZ_CLICK_ATTEMPTS: u32 = 10;

/// What one poll cycle concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Cancellation was requested; nothing was done.
    Cancelled,
    /// The video is still changing (or not yet static long enough).
    StillPlaying,
    /// The video finished and the next lesson was started.
    LessonAdvanced,
    /// A quiz popup was clicked through and playback resumed.
    QuizDismissed,
}

/// Final tally of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lessons_completed: u64,
}

/// Drives lesson progression from screen samples.
///
/// Sequential and blocking by design: capture, compare and input are
/// strictly serialized per poll cycle, and the pointer is assumed to have no
/// other user during a run. All randomness flows through the injected `Rng`
/// and all sleeps through the injected [`Pacer`].
pub struct LessonAutomaton<S, P, R> {
    sampler: S,
    motion: HumanMotion<P, R>,
    rng: R,
    pacer: Box<dyn Pacer>,
    config: AutomationConfig,
    backoff: BackoffPolicy,
    regions: LessonRegions,
    close_baseline: Frame,
    state: RunState,
    phase: Phase,
    cancel: CancelToken,
}

impl<S: FrameSampler, P: Pointer, R: Rng> LessonAutomaton<S, P, R> {
    /// Set up a run: captures the close-region baseline that later
    /// distinguishes "video ended" from "quiz popup".
    ///
    /// A failure here is fatal; the loop has not started yet.
    pub fn new(
        mut sampler: S,
        motion: HumanMotion<P, R>,
        rng: R,
        pacer: Box<dyn Pacer>,
        config: AutomationConfig,
        regions: LessonRegions,
        cancel: CancelToken,
    ) -> Result<Self, AutomationError> {
        let close_baseline = sampler.capture(regions.close)?;
        info!(
            "close-region baseline captured ({}x{})",
            close_baseline.width(),
            close_baseline.height()
        );
        Ok(Self {
            sampler,
            motion,
            rng,
            pacer,
            config,
            backoff: BackoffPolicy::default(),
            regions,
            close_baseline,
            state: RunState::new(),
            phase: Phase::Playing,
            cancel,
        })
    }

    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Supervisor loop: runs until cancelled.
    ///
    /// Each session iteration either ends with cancellation or fails with a
    /// transient error, in which case the loop logs, waits out the backoff
    /// delay and restarts from the Playing entry.
    pub fn run(&mut self) -> RunSummary {
        info!("automation loop starting");
        while !self.cancel.is_cancelled() {
            if let Err(err) = self.run_session() {
                warn!(
                    "iteration failed: {err}; resuming in {:?}",
                    self.backoff.delay
                );
                self.pacer.pause(self.backoff.delay);
            }
        }
        let summary = RunSummary {
            lessons_completed: self.state.lessons_completed(),
        };
        info!(
            "automation loop stopped after {} completed lesson(s)",
            summary.lessons_completed
        );
        summary
    }

    /// One playback session: enter Playing, then poll until cancelled.
    /// Lesson advances and quiz dismissals are handled inside the polls.
    fn run_session(&mut self) -> Result<(), AutomationError> {
        let mut prev = self.enter_playing(None)?;
        loop {
            if self.poll_once(&mut prev)? == PollOutcome::Cancelled {
                return Ok(());
            }
        }
    }

    /// Playing entry: click the video to (re)start playback and establish
    /// the reference frame. Resets the static counter.
    fn enter_playing(&mut self, carried: Option<Frame>) -> Result<Frame, AutomationError> {
        self.set_phase(Phase::Playing);
        self.motion.click(self.regions.video.center())?;
        debug!("clicked video area to (re)start playback");
        let frame = match carried {
            Some(frame) => frame,
            None => self.sampler.capture(self.regions.video)?,
        };
        self.state.reset_static();
        Ok(frame)
    }

    /// One poll cycle of the Playing loop.
    fn poll_once(&mut self, prev: &mut Frame) -> Result<PollOutcome, AutomationError> {
        if self.cancel.is_cancelled() {
            return Ok(PollOutcome::Cancelled);
        }

        // Randomize the interval so polling has no periodic fingerprint.
        let jitter = self.rng.random_range(-0.5..1.0);
        let sleep = (self.config.poll_interval.as_secs_f64() + jitter).max(0.5);
        self.pacer.pause(Duration::from_secs_f64(sleep));

        self.motion.drift()?;

        let curr = self.sampler.capture(self.regions.video)?;
        let score = mean_squared_error(prev, &curr);
        let static_count = self
            .state
            .record_score(score, self.config.static_frame_threshold);
        debug!("video frame diff mse={score:.3} static_count={static_count}");
        *prev = curr;

        if static_count < self.config.required_static_polls {
            return Ok(PollOutcome::StillPlaying);
        }

        // Video has been static long enough: the close region tells ended
        // apart from quiz-blocked.
        self.set_phase(Phase::ConfirmingCompletion);
        let close_now = self.sampler.capture(self.regions.close)?;
        let close_score = mean_squared_error(&self.close_baseline, &close_now);
        debug!("close region mse={close_score:.3}");

        if close_score > self.config.close_change_threshold {
            self.set_phase(Phase::AdvancingLesson);
            let fresh = self.advance_lesson(prev)?;
            *prev = self.enter_playing(Some(fresh))?;
            Ok(PollOutcome::LessonAdvanced)
        } else {
            self.set_phase(Phase::HandlingQuiz);
            *prev = self.handle_quiz()?;
            self.set_phase(Phase::Playing);
            Ok(PollOutcome::QuizDismissed)
        }
    }

    /// Click through to the next lesson and wait for the page to settle.
    /// Returns the first frame of the new video.
    fn advance_lesson(&mut self, prev: &Frame) -> Result<Frame, AutomationError> {
        self.motion.click(self.regions.next.center())?;
        let total = self.state.complete_lesson();
        info!("lesson finished, {total} completed; waiting for the next page");

        let wait = 7.0 + self.rng.random_range(0.8..3.2);
        self.pacer.pause(Duration::from_secs_f64(wait));

        let fresh = self.sampler.capture(self.regions.video)?;
        if mean_squared_error(prev, &fresh) < self.config.static_frame_threshold {
            debug!("autoplay did not start, clicking video again");
            self.motion.click(self.regions.video.center())?;
        } else {
            debug!("new video playing");
        }
        Ok(fresh)
    }

    /// Try to answer/dismiss a quiz popup, then resume playback.
    ///
    /// Always exactly [`QUIZ_CLICK_ATTEMPTS`] randomized clicks inside the
    /// quiz area, then one close click. Returns a fresh reference frame.
    fn handle_quiz(&mut self) -> Result<Frame, AutomationError> {
        info!("video static but close region unchanged; treating as quiz popup");
        for _ in 0..QUIZ_CLICK_ATTEMPTS {
            let target = self.random_point_in_quiz();
            self.motion.click(target)?;
            let pause = 0.15 + self.rng.random_range(0.0..0.05);
            self.pacer.pause(Duration::from_secs_f64(pause));
        }

        self.motion.click(self.regions.close.center())?;
        debug!("closed quiz popup, waiting before resuming playback");
        let wait = 7.0 + self.rng.random_range(0.6..2.0);
        self.pacer.pause(Duration::from_secs_f64(wait));

        self.motion.click(self.regions.video.center())?;
        self.state.reset_static();
        self.sampler.capture(self.regions.video).map_err(Into::into)
    }

    fn random_point_in_quiz(&mut self) -> Point {
        let quiz = self.regions.quiz;
        Point::new(
            quiz.x + self.rng.random_range(0..quiz.width as i32),
            quiz.y + self.rng.random_range(0..quiz.height as i32),
        )
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;
