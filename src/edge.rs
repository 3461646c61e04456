//! Rising-edge detection over a polled digital level.
//!
//! The polling cadence is chosen longer than mechanical contact bounce
//! (50 ms by default), so each raw sample is treated as already settled
//! and a plain two-state detector is enough. For noisier switches the
//! optional [`SettleFilter`] can be layered in front without changing
//! the one-edge-per-press contract.

/// A detected press. Carries no payload - one value per physical press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Level was low at the last sample.
    Idle,
    /// Level was high at the last sample; the press was already reported.
    Pressed,
}

/// Two-state rising-edge detector.
///
/// Feed it one sample per tick; it yields [`Edge`] exactly once per
/// low-to-high transition, nothing on release, nothing while held.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetector {
    state: State,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Advance the detector with the current sample (`true` = pressed).
    pub fn update(&mut self, pressed: bool) -> Option<Edge> {
        match (self.state, pressed) {
            (State::Idle, true) => {
                self.state = State::Pressed;
                Some(Edge)
            }
            (State::Pressed, false) => {
                self.state = State::Idle;
                None
            }
            // Held or idle: no transition, no event.
            _ => None,
        }
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirm-by-repetition filter for noisy contacts.
///
/// A raw sample must differ from the settled level for `threshold`
/// consecutive ticks before the settled level changes. `threshold` of
/// 0 or 1 makes the filter transparent (the default wiring).
#[derive(Clone, Copy, Debug)]
pub struct SettleFilter {
    settled: bool,
    run: u8,
    threshold: u8,
}

impl SettleFilter {
    pub const fn new(threshold: u8) -> Self {
        Self {
            settled: false,
            run: 0,
            threshold,
        }
    }

    /// Offer a raw sample; returns the current settled level.
    pub fn apply(&mut self, raw: bool) -> bool {
        if raw == self.settled {
            self.run = 0;
        } else {
            self.run = self.run.saturating_add(1);
            if self.run >= self.threshold {
                self.settled = raw;
                self.run = 0;
            }
        }
        self.settled
    }
}
