//! Timing control.

use std::thread;
use std::time::Duration;

/// Controls how wall-clock pauses happen.
///
/// The motion layer and the automaton only ever sleep through a `Pacer`, so
/// tests can swap in [`NoopPacer`] (or a recording fake) and run instantly.
pub trait Pacer: Send {
    fn pause(&mut self, duration: Duration);
}

/// Real wall-clock pacing.
#[derive(Debug, Default)]
pub struct StdPacer;

impl Pacer for StdPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Pacer that never sleeps. For tests and dry runs.
#[derive(Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self, _duration: Duration) {}
}
