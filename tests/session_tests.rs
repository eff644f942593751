// Integration tests for the session controller

use std::collections::VecDeque;
use std::io;

use sortty::config::SessionConfig;
use sortty::sequence::{Direction, Sequence, Value, Viewport};
use sortty::session::{Command, RenderDriver, Session};
use sortty::sorting::{Algorithm, HighlightSet, SortEngine};

/// A frame the session asked the driver to draw
#[derive(Debug, Clone, PartialEq)]
enum Frame {
    Idle {
        values: Vec<Value>,
        algorithm: Algorithm,
        direction: Direction,
    },
    Step {
        values: Vec<Value>,
        highlights: HighlightSet,
    },
}

/// Replays one batch of commands per tick and records every frame
#[derive(Default)]
struct ScriptedDriver {
    script: VecDeque<Vec<Command>>,
    frames: Vec<Frame>,
}

impl ScriptedDriver {
    fn new(script: Vec<Vec<Command>>) -> Self {
        ScriptedDriver {
            script: script.into(),
            frames: Vec::new(),
        }
    }

    fn step_frames(&self) -> Vec<&Frame> {
        self.frames
            .iter()
            .filter(|f| matches!(f, Frame::Step { .. }))
            .collect()
    }
}

impl RenderDriver for ScriptedDriver {
    fn render_idle(
        &mut self,
        sequence: &Sequence,
        algorithm: Algorithm,
        direction: Direction,
    ) -> io::Result<()> {
        self.frames.push(Frame::Idle {
            values: sequence.values().to_vec(),
            algorithm,
            direction,
        });
        Ok(())
    }

    fn render_step(&mut self, sequence: &Sequence, highlights: &HighlightSet) -> io::Result<()> {
        self.frames.push(Frame::Step {
            values: sequence.values().to_vec(),
            highlights: highlights.clone(),
        });
        Ok(())
    }

    fn poll_commands(&mut self) -> io::Result<Vec<Command>> {
        // Quit once the script runs out so `run` always terminates
        Ok(self.script.pop_front().unwrap_or_else(|| vec![Command::Quit]))
    }
}

fn config() -> SessionConfig {
    SessionConfig {
        count: 12,
        values: 1..=50,
        seed: Some(2024),
        ..SessionConfig::default()
    }
}

fn session(values: &[Value]) -> Session {
    Session::with_sequence(&config(), Sequence::new(values.to_vec(), Viewport::new(80, 20)))
}

/// Enough empty ticks for a short sort to finish
fn idle_ticks(n: usize) -> Vec<Vec<Command>> {
    vec![Vec::new(); n]
}

#[test]
fn test_idle_session_renders_idle_frames() {
    let mut s = session(&[3, 1, 2]);
    let mut driver = ScriptedDriver::new(idle_ticks(2));
    s.run(&mut driver).unwrap();

    assert_eq!(driver.frames.len(), 3);
    assert!(driver.frames.iter().all(|f| matches!(
        f,
        Frame::Idle {
            algorithm: Algorithm::Bubble,
            direction: Direction::Ascending,
            ..
        }
    )));
}

#[test]
fn test_full_bubble_run_through_driver() {
    let mut s = session(&[5, 3, 4, 1, 2]);
    let mut script = vec![vec![Command::StartSort]];
    script.extend(idle_ticks(20));
    let mut driver = ScriptedDriver::new(script);
    s.run(&mut driver).unwrap();

    assert_eq!(driver.step_frames().len(), 8);
    assert_eq!(s.steps(), 8);
    assert!(!s.is_sorting());
    assert_eq!(s.sequence().values(), &[1, 2, 3, 4, 5]);

    // The first step frame shows the first swap
    assert_eq!(
        driver.step_frames()[0],
        &Frame::Step {
            values: vec![3, 5, 4, 1, 2],
            highlights: HighlightSet::pair(0, 1),
        }
    );
    // Completion switches straight back to idle frames
    assert!(matches!(driver.frames.last(), Some(Frame::Idle { .. })));
}

#[test]
fn test_selected_algorithm_and_direction_are_used() {
    let mut s = session(&[1, 3, 2]);
    let mut script = vec![
        vec![
            Command::SelectAlgorithm(Algorithm::Insertion),
            Command::SetDescending,
        ],
        vec![Command::StartSort],
    ];
    script.extend(idle_ticks(10));
    let mut driver = ScriptedDriver::new(script);
    s.run(&mut driver).unwrap();

    assert_eq!(s.sequence().values(), &[3, 2, 1]);
    assert_eq!(driver.step_frames().len(), 2);
    assert!(driver.frames.contains(&Frame::Idle {
        values: vec![3, 2, 1],
        algorithm: Algorithm::Insertion,
        direction: Direction::Descending,
    }));
}

#[test]
fn test_commands_during_sort_are_ignored() {
    let mut s = session(&[4, 3, 2, 1]);
    let _ = s.apply(Command::StartSort);
    let mut driver = ScriptedDriver::new(vec![vec![
        Command::StartSort,
        Command::SetDescending,
        Command::SelectAlgorithm(Algorithm::Selection),
    ]]);
    s.tick(&mut driver).unwrap();
    for command in driver.poll_commands().unwrap() {
        let _ = s.apply(command);
    }

    assert_eq!(s.algorithm(), Algorithm::Bubble);
    assert_eq!(s.direction(), Direction::Ascending);

    // The first run continues where it left off
    while s.is_sorting() {
        s.tick(&mut driver).unwrap();
    }
    assert_eq!(s.sequence().values(), &[1, 2, 3, 4]);
    assert_eq!(s.steps(), 6);
}

#[test]
fn test_reset_mid_sort_starts_fresh_engine() {
    let mut s = session(&[9, 8, 7, 6, 5, 4]);
    let mut driver = ScriptedDriver::default();

    let _ = s.apply(Command::StartSort);
    for _ in 0..4 {
        s.tick(&mut driver).unwrap();
    }
    assert!(s.is_sorting());

    let _ = s.apply(Command::Reset);
    assert!(!s.is_sorting());
    assert_eq!(s.steps(), 0);
    let fresh = s.sequence().values().to_vec();
    assert_eq!(fresh.len(), 12);

    // Reference run from initial cursors over the same values
    let mut reference_seq = Sequence::new(fresh.clone(), Viewport::new(80, 20));
    let mut reference = SortEngine::new(Algorithm::Bubble, Direction::Ascending);
    let mut expected = Vec::new();
    while let Some(step) = reference.resume(&mut reference_seq) {
        expected.push(Frame::Step {
            values: reference_seq.values().to_vec(),
            highlights: step.highlights,
        });
    }

    driver.frames.clear();
    let _ = s.apply(Command::StartSort);
    while s.is_sorting() {
        s.tick(&mut driver).unwrap();
    }

    let actual: Vec<Frame> = driver.step_frames().into_iter().cloned().collect();
    assert_eq!(actual, expected);
    assert_eq!(s.steps(), expected.len());
    assert!(s.sequence().is_sorted(Direction::Ascending));
}

#[test]
fn test_reset_generates_within_configured_range() {
    let mut s = session(&[1, 2, 3]);
    for _ in 0..5 {
        let _ = s.apply(Command::Reset);
        assert_eq!(s.sequence().len(), 12);
        assert!(s.sequence().values().iter().all(|v| (1..=50).contains(v)));
        assert_eq!(s.sequence().layout().viewport, Viewport::new(80, 20));
    }
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let a = Session::new(&config(), Viewport::new(80, 20));
    let b = Session::new(&config(), Viewport::new(80, 20));
    assert_eq!(a.sequence().values(), b.sequence().values());
}

#[test]
fn test_single_value_sort_finishes_on_first_tick() {
    let mut s = session(&[7]);
    let mut driver = ScriptedDriver::default();
    let _ = s.apply(Command::StartSort);
    s.tick(&mut driver).unwrap();
    assert!(!s.is_sorting());
    assert_eq!(s.steps(), 0);
    assert!(driver.step_frames().is_empty());
}
