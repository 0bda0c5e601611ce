//! Human-plausible pointer motion.
//!
//! Straight constant-speed pointer paths and perfectly periodic timing are
//! what naive bot-detection heuristics key on. Motion here follows a
//! smoothstep ease-in/ease-out curve with small independent jitter on every
//! intermediate sample, clicks land at a randomized offset with a randomized
//! hold time, and an occasional idle drift keeps the cursor from sitting
//! frozen between polls.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use coursepilot_core::Point;

use crate::pacer::Pacer;
use crate::pointer::{Pointer, PointerError};

/// Floor on interpolation steps so even very short moves stay curved.
const MIN_STEPS: usize = 8;

/// Tunables for the synthesizer. Defaults match well-tested values.
#[derive(Debug, Clone)]
pub struct MotionProfile {
    /// Wall-clock time for the approach move of a click.
    pub move_duration: Duration,
    /// Clicks land uniformly within this many pixels of the target, per axis.
    pub click_offset: i32,
    /// Base button hold time; up to 50ms of random extension is added.
    pub hold_time: Duration,
    /// Per-sample positional jitter amplitude in pixels.
    pub step_jitter: f64,
    /// Trajectory sampling rate.
    pub steps_per_second: u32,
    /// Chance of a small relative wiggle right after releasing a click.
    pub post_click_jitter_chance: f64,
    /// Chance that an idle-drift invocation actually moves.
    pub drift_chance: f64,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            move_duration: Duration::from_millis(400),
            click_offset: 4,
            hold_time: Duration::from_millis(50),
            step_jitter: 1.5,
            steps_per_second: 60,
            post_click_jitter_chance: 0.05,
            drift_chance: 0.12,
        }
    }
}

/// Synthesizes human-like pointer trajectories and clicks.
///
/// Generic over the pointer backend and the random source so tests can pin
/// both; the pacer supplies all sleeps.
pub struct HumanMotion<P, R> {
    pointer: P,
    rng: R,
    pacer: Box<dyn Pacer>,
    profile: MotionProfile,
}

impl<P: Pointer, R: Rng> HumanMotion<P, R> {
    pub fn new(pointer: P, rng: R, pacer: Box<dyn Pacer>) -> Self {
        Self::with_profile(pointer, rng, pacer, MotionProfile::default())
    }

    pub fn with_profile(pointer: P, rng: R, pacer: Box<dyn Pacer>, profile: MotionProfile) -> Self {
        Self {
            pointer,
            rng,
            pacer,
            profile,
        }
    }

    /// Trace a smoothstep path from the current position to `target`.
    ///
    /// Samples at `steps_per_second` (never fewer than [`MIN_STEPS`] total)
    /// and adds independent jitter to each intermediate sample on both axes.
    /// A zero-distance move still walks the full step count and terminates.
    pub fn move_to(&mut self, target: Point, duration: Duration) -> Result<(), PointerError> {
        let start = self.pointer.position()?;
        let steps = ((duration.as_secs_f64() * f64::from(self.profile.steps_per_second)) as usize)
            .max(MIN_STEPS);
        let pause = duration / steps as u32;

        let (x1, y1) = (f64::from(start.x), f64::from(start.y));
        let dx = f64::from(target.x) - x1;
        let dy = f64::from(target.y) - y1;
        let jitter = self.profile.step_jitter;

        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            // Cubic Hermite smoothstep: ease in, ease out.
            let s = t * t * (3.0 - 2.0 * t);
            let xi = x1 + dx * s + self.sample_jitter(jitter);
            let yi = y1 + dy * s + self.sample_jitter(jitter);
            self.pointer
                .move_to(Point::new(xi.round() as i32, yi.round() as i32))?;
            self.pacer.pause(pause);
        }
        Ok(())
    }

    /// Relative variant of [`HumanMotion::move_to`].
    pub fn move_by(&mut self, dx: i32, dy: i32, duration: Duration) -> Result<(), PointerError> {
        let pos = self.pointer.position()?;
        self.move_to(Point::new(pos.x + dx, pos.y + dy), duration)
    }

    /// Move to a randomized point near `target`, press, hold, release.
    pub fn click(&mut self, target: Point) -> Result<(), PointerError> {
        let offset = self.profile.click_offset;
        let resolved = Point::new(
            target.x + self.rng.random_range(-offset..=offset),
            target.y + self.rng.random_range(-offset..=offset),
        );
        self.move_to(resolved, self.profile.move_duration)?;

        self.pointer.press()?;
        let extension = Duration::from_secs_f64(self.rng.random_range(0.0..0.05));
        self.pacer.pause(self.profile.hold_time + extension);
        self.pointer.release()?;

        if self.rng.random_bool(self.profile.post_click_jitter_chance) {
            let jx = self.rng.random_range(-4..=4);
            let jy = self.rng.random_range(-4..=4);
            self.move_by(jx, jy, Duration::from_millis(100))?;
        }
        Ok(())
    }

    /// Occasionally wander a little so the cursor never sits frozen.
    ///
    /// Moves with probability `drift_chance` per invocation; otherwise a
    /// no-op. Intended to be called once per poll cycle.
    pub fn drift(&mut self) -> Result<(), PointerError> {
        if !self.rng.random_bool(self.profile.drift_chance) {
            return Ok(());
        }
        let dx = self.rng.random_range(-25..=25);
        let dy = self.rng.random_range(-20..=20);
        let duration = Duration::from_secs_f64(self.rng.random_range(0.2..0.5));
        debug!("idle drift by ({}, {}) over {:?}", dx, dy, duration);
        self.move_by(dx, dy, duration)
    }

    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    fn sample_jitter(&mut self, amplitude: f64) -> f64 {
        if amplitude > 0.0 {
            self.rng.random_range(-amplitude..amplitude)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
#[path = "motion_tests.rs"]
mod tests;
