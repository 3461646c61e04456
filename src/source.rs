//! Where presses come from: a real button, or a timer.
//!
//! The supervisor polls one [`EdgeSource`] per tick. [`ButtonSource`]
//! is the normal wiring (sample the switch, settle, edge-detect);
//! [`IntervalSource`] replays the same output patterns from a fixed
//! period with no button attached, for demos and burn-in.

use log::debug;

use crate::edge::{Edge, EdgeDetector, SettleFilter};
use crate::line::DigitalInput;

/// Produces at most one press event per polling tick.
pub trait EdgeSource {
    fn poll(&mut self) -> Option<Edge>;
}

/// Debounced momentary switch.
pub struct ButtonSource<I> {
    input: I,
    filter: SettleFilter,
    edges: EdgeDetector,
}

impl<I: DigitalInput> ButtonSource<I> {
    pub fn new(input: I) -> Self {
        Self::with_settle(input, 0)
    }

    /// `settle_ticks` > 1 enables the confirm-by-repetition filter.
    pub fn with_settle(input: I, settle_ticks: u8) -> Self {
        Self {
            input,
            filter: SettleFilter::new(settle_ticks),
            edges: EdgeDetector::new(),
        }
    }
}

impl<I: DigitalInput> EdgeSource for ButtonSource<I> {
    fn poll(&mut self) -> Option<Edge> {
        let level = self.filter.apply(self.input.read());
        let edge = self.edges.update(level);
        if edge.is_some() {
            debug!("press detected");
        }
        edge
    }
}

/// Synthesizes one press every `period_ticks` polling ticks.
pub struct IntervalSource {
    period_ticks: u32,
    elapsed: u32,
}

impl IntervalSource {
    pub fn new(period_ticks: u32) -> Self {
        Self {
            period_ticks: period_ticks.max(1),
            elapsed: 0,
        }
    }
}

impl EdgeSource for IntervalSource {
    fn poll(&mut self) -> Option<Edge> {
        self.elapsed += 1;
        if self.elapsed >= self.period_ticks {
            self.elapsed = 0;
            Some(Edge)
        } else {
            None
        }
    }
}
