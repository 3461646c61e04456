//! Integration tests driving the supervisor end-to-end with mock pins.
//!
//! The mock input scripts raw samples one per tick and requests shutdown
//! when the script runs out, so every scenario also exercises the
//! teardown path: the loop must exit and drive all lines low.

use std::cell::Cell;
use std::rc::Rc;

use bitpress::{
    ButtonSource, DigitalInput, DigitalOutput, IntervalSource, OutputBank, PressCounter,
    ShutdownFlag, Supervisor, Sweep,
};
use embedded_hal::delay::DelayNs;

/// Output line sharing its level with the test through an `Rc`.
struct MockLine(Rc<Cell<bool>>);

impl DigitalOutput for MockLine {
    fn set(&mut self, level: bool) {
        self.0.set(level);
    }
}

/// Raw sample script; requests shutdown once exhausted.
struct ScriptedInput<'a> {
    samples: std::vec::IntoIter<bool>,
    stop: &'a ShutdownFlag,
}

impl<'a> ScriptedInput<'a> {
    fn new(samples: &[bool], stop: &'a ShutdownFlag) -> Self {
        Self {
            samples: samples.to_vec().into_iter(),
            stop,
        }
    }
}

impl DigitalInput for ScriptedInput<'_> {
    fn read(&mut self) -> bool {
        match self.samples.next() {
            Some(sample) => sample,
            None => {
                self.stop.request();
                false
            }
        }
    }
}

/// Records every delay in ms instead of sleeping.
#[derive(Default)]
struct RecordingDelay {
    slept_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.slept_ms.push(ns / 1_000_000);
    }
}

/// Requests shutdown after a fixed number of ticks (self-running modes).
struct StopAfterTicks<'a> {
    remaining: u32,
    stop: &'a ShutdownFlag,
}

impl DelayNs for StopAfterTicks<'_> {
    fn delay_ns(&mut self, _ns: u32) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop.request();
        }
    }
}

fn mock_bank(n: usize) -> (OutputBank<MockLine>, Vec<Rc<Cell<bool>>>) {
    let mut bank = OutputBank::new();
    let mut levels = Vec::new();
    for _ in 0..n {
        let level = Rc::new(Cell::new(false));
        levels.push(level.clone());
        bank.push(MockLine(level)).ok().unwrap();
    }
    (bank, levels)
}

fn line_levels(levels: &[Rc<Cell<bool>>]) -> Vec<bool> {
    levels.iter().map(|l| l.get()).collect()
}

#[test]
fn two_presses_tally_to_two() {
    let stop = ShutdownFlag::new();
    let (bank, levels) = mock_bank(4);
    // Two presses with a release between and a trailing non-release.
    let input = ScriptedInput::new(&[true, true, false, true, true, false], &stop);

    let mut supervisor = Supervisor::new(
        ButtonSource::new(input),
        PressCounter::new(),
        bank,
        RecordingDelay::default(),
        50,
    );
    supervisor.run(&stop);

    assert_eq!(supervisor.action().value(), 2);
    // Teardown already ran; the tally itself survives in the action.
    assert_eq!(line_levels(&levels), vec![false; 4]);
}

#[test]
fn press_renders_before_teardown() {
    // Same scenario, but observe the renders while the loop is live
    // instead of only the post-teardown line state.
    let stop = ShutdownFlag::new();
    let trace: Rc<Cell<u8>> = Rc::new(Cell::new(0));

    // Remembers every bit position it was ever driven high on.
    struct SnoopLine {
        bit: u8,
        seen: Rc<Cell<u8>>,
    }
    impl DigitalOutput for SnoopLine {
        fn set(&mut self, level: bool) {
            if level {
                self.seen.set(self.seen.get() | (1 << self.bit));
            }
        }
    }

    let mut bank = OutputBank::new();
    for bit in 0..4u8 {
        bank.push(SnoopLine {
            bit,
            seen: trace.clone(),
        })
        .ok()
        .unwrap();
    }

    let input = ScriptedInput::new(&[true, true, false, true, true, false], &stop);
    let mut supervisor = Supervisor::new(
        ButtonSource::new(input),
        PressCounter::new(),
        bank,
        RecordingDelay::default(),
        50,
    );
    supervisor.run(&stop);

    // Tally went 0 -> 1 -> 2: bit 0 lit for the first press, bit 1 for
    // the second, upper bits never.
    assert_eq!(trace.get(), 0b0011);
}

#[test]
fn sixteen_presses_wrap_to_zero() {
    let stop = ShutdownFlag::new();
    let (bank, levels) = mock_bank(4);
    let mut samples = Vec::new();
    for _ in 0..16 {
        samples.extend_from_slice(&[true, false]);
    }
    let input = ScriptedInput::new(&samples, &stop);

    let mut supervisor = Supervisor::new(
        ButtonSource::new(input),
        PressCounter::new(),
        bank,
        RecordingDelay::default(),
        50,
    );
    supervisor.run(&stop);

    assert_eq!(supervisor.action().value(), 0);
    assert_eq!(line_levels(&levels), vec![false; 4]);
}

#[test]
fn shutdown_is_idempotent_end_to_end() {
    let stop = ShutdownFlag::new();
    // Racing notifications: several requests before the loop even looks.
    stop.request();
    stop.request();
    stop.request();

    let (bank, levels) = mock_bank(4);
    let input = ScriptedInput::new(&[true, true, true], &stop);
    let mut supervisor = Supervisor::new(
        ButtonSource::new(input),
        PressCounter::new(),
        bank,
        RecordingDelay::default(),
        50,
    );
    supervisor.run(&stop);

    // No iteration ran, teardown still drove the lines low, and run
    // returned exactly once.
    assert_eq!(supervisor.action().value(), 0);
    assert_eq!(line_levels(&levels), vec![false; 4]);
}

#[test]
fn sweep_mode_chases_once_per_press() {
    let stop = ShutdownFlag::new();
    let (bank, _levels) = mock_bank(4);
    let input = ScriptedInput::new(&[true, true, false], &stop);

    let mut supervisor = Supervisor::new(
        ButtonSource::new(input),
        Sweep::new(1000),
        bank,
        RecordingDelay::default(),
        50,
    );
    supervisor.run(&stop);

    // One press: four 1000 ms holds in between the 50 ms tick sleeps.
    let holds = supervisor
        .delay()
        .slept_ms
        .iter()
        .filter(|&&ms| ms == 1000)
        .count();
    assert_eq!(holds, 4);
}

#[test]
fn interval_mode_counts_without_a_button() {
    let stop = ShutdownFlag::new();
    let (bank, levels) = mock_bank(4);
    let delay = StopAfterTicks {
        remaining: 10,
        stop: &stop,
    };

    let mut supervisor = Supervisor::new(
        IntervalSource::new(2),
        PressCounter::new(),
        bank,
        delay,
        50,
    );
    supervisor.run(&stop);

    // Ten ticks at one synthesized press per two ticks: tally 5. The
    // teardown then releases the lines.
    assert_eq!(supervisor.action().value(), 5);
    assert_eq!(line_levels(&levels), vec![false; 4]);
}
