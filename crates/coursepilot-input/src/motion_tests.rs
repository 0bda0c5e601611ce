use super::*;
use crate::pacer::NoopPacer;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pointer that records every operation instead of touching the OS.
struct FakePointer {
    pos: Point,
    moves: Vec<Point>,
    presses: usize,
    releases: usize,
}

impl FakePointer {
    fn at(x: i32, y: i32) -> Self {
        Self {
            pos: Point::new(x, y),
            moves: Vec::new(),
            presses: 0,
            releases: 0,
        }
    }
}

impl Pointer for FakePointer {
    fn position(&mut self) -> Result<Point, PointerError> {
        Ok(self.pos)
    }

    fn move_to(&mut self, target: Point) -> Result<(), PointerError> {
        self.pos = target;
        self.moves.push(target);
        Ok(())
    }

    fn press(&mut self) -> Result<(), PointerError> {
        self.presses += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<(), PointerError> {
        self.releases += 1;
        Ok(())
    }
}

struct FailingPointer;

impl Pointer for FailingPointer {
    fn position(&mut self) -> Result<Point, PointerError> {
        Ok(Point::new(0, 0))
    }

    fn move_to(&mut self, _target: Point) -> Result<(), PointerError> {
        Err(PointerError::Failed("injected".to_string()))
    }

    fn press(&mut self) -> Result<(), PointerError> {
        Ok(())
    }

    fn release(&mut self) -> Result<(), PointerError> {
        Ok(())
    }
}

fn motion(pointer: FakePointer, seed: u64) -> HumanMotion<FakePointer, StdRng> {
    HumanMotion::new(pointer, StdRng::seed_from_u64(seed), Box::new(NoopPacer))
}

#[test]
fn test_move_to_samples_at_sixty_per_second() {
    let mut m = motion(FakePointer::at(0, 0), 1);
    m.move_to(Point::new(300, 200), Duration::from_secs(1)).unwrap();
    assert_eq!(m.pointer().moves.len(), 60);
}

#[test]
fn test_move_to_enforces_minimum_steps() {
    let mut m = motion(FakePointer::at(0, 0), 1);
    m.move_to(Point::new(10, 10), Duration::from_millis(10)).unwrap();
    assert_eq!(m.pointer().moves.len(), 8);
}

#[test]
fn test_zero_distance_move_terminates_within_bounded_steps() {
    let mut m = motion(FakePointer::at(100, 100), 2);
    m.move_to(Point::new(100, 100), Duration::from_millis(400)).unwrap();
    let moves = &m.pointer().moves;
    assert_eq!(moves.len(), 24);
    for p in moves {
        // Only jitter moves the pointer; +-1.5 amplitude plus rounding.
        assert!((p.x - 100).abs() <= 2, "x drifted: {:?}", p);
        assert!((p.y - 100).abs() <= 2, "y drifted: {:?}", p);
    }
}

#[test]
fn test_trajectory_stays_within_jitter_of_smoothstep() {
    let (start, target) = (Point::new(0, 0), Point::new(200, 120));
    let duration = Duration::from_millis(500);
    let mut m = motion(FakePointer::at(start.x, start.y), 3);
    m.move_to(target, duration).unwrap();

    let moves = &m.pointer().moves;
    assert_eq!(moves.len(), 30);
    for (i, p) in moves.iter().enumerate() {
        let t = (i + 1) as f64 / moves.len() as f64;
        let s = t * t * (3.0 - 2.0 * t);
        let ideal_x = f64::from(target.x) * s;
        let ideal_y = f64::from(target.y) * s;
        // Jitter amplitude 1.5 plus rounding slack.
        assert!((f64::from(p.x) - ideal_x).abs() <= 2.0, "sample {} off-path: {:?}", i, p);
        assert!((f64::from(p.y) - ideal_y).abs() <= 2.0, "sample {} off-path: {:?}", i, p);
    }
}

#[test]
fn test_move_ends_near_target() {
    let mut m = motion(FakePointer::at(50, 50), 4);
    m.move_to(Point::new(400, 300), Duration::from_millis(400)).unwrap();
    let last = *m.pointer().moves.last().unwrap();
    assert!((last.x - 400).abs() <= 2);
    assert!((last.y - 300).abs() <= 2);
}

#[test]
fn test_click_presses_once_and_lands_near_target() {
    let mut m = motion(FakePointer::at(0, 0), 5);
    m.click(Point::new(120, 80)).unwrap();

    let pointer = m.pointer();
    assert_eq!(pointer.presses, 1);
    assert_eq!(pointer.releases, 1);
    // Landing point: +-4 click offset, +-2 jitter/rounding. The optional
    // post-click wiggle can add another +-4.
    assert!((pointer.pos.x - 120).abs() <= 12, "landed at {:?}", pointer.pos);
    assert!((pointer.pos.y - 80).abs() <= 12, "landed at {:?}", pointer.pos);
}

#[test]
fn test_click_without_post_jitter_moves_exactly_once() {
    let profile = MotionProfile {
        post_click_jitter_chance: 0.0,
        ..MotionProfile::default()
    };
    let mut m = HumanMotion::with_profile(
        FakePointer::at(0, 0),
        StdRng::seed_from_u64(6),
        Box::new(NoopPacer),
        profile,
    );
    m.click(Point::new(60, 60)).unwrap();
    // One approach move of 24 samples, nothing after release.
    assert_eq!(m.pointer().moves.len(), 24);
}

#[test]
fn test_drift_is_noop_when_chance_is_zero() {
    let profile = MotionProfile {
        drift_chance: 0.0,
        ..MotionProfile::default()
    };
    let mut m = HumanMotion::with_profile(
        FakePointer::at(10, 10),
        StdRng::seed_from_u64(7),
        Box::new(NoopPacer),
        profile,
    );
    m.drift().unwrap();
    assert!(m.pointer().moves.is_empty());
}

#[test]
fn test_drift_stays_within_documented_range() {
    let profile = MotionProfile {
        drift_chance: 1.0,
        ..MotionProfile::default()
    };
    let mut m = HumanMotion::with_profile(
        FakePointer::at(500, 500),
        StdRng::seed_from_u64(8),
        Box::new(NoopPacer),
        profile,
    );
    m.drift().unwrap();
    let end = m.pointer().pos;
    assert!((end.x - 500).abs() <= 25 + 2, "drifted to {:?}", end);
    assert!((end.y - 500).abs() <= 20 + 2, "drifted to {:?}", end);
}

#[test]
fn test_pointer_failure_propagates() {
    let mut m = HumanMotion::new(
        FailingPointer,
        StdRng::seed_from_u64(9),
        Box::new(NoopPacer),
    );
    assert!(m.click(Point::new(1, 1)).is_err());
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = |seed| {
        let mut m = motion(FakePointer::at(0, 0), seed);
        m.move_to(Point::new(100, 100), Duration::from_millis(200)).unwrap();
        m.pointer().moves.clone()
    };
    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}
