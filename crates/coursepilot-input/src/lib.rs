//! Human-like mouse input synthesis for coursepilot.
//!
//! All real side effects go through the [`Pointer`] trait so tests can
//! substitute a recording fake; all randomness comes from an injectable
//! [`rand::Rng`] so trajectories are reproducible under a seeded generator;
//! all timing goes through a [`Pacer`] so tests run instantly.

mod motion;
mod pacer;
mod pointer;

pub use motion::{HumanMotion, MotionProfile};
pub use pacer::{NoopPacer, Pacer, StdPacer};
pub use pointer::{EnigoPointer, Pointer, PointerError};
