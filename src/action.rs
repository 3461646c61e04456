//! What happens when a press is detected.
//!
//! Two interchangeable reactions over the same seam: advance a bounded
//! binary tally ([`PressCounter`], the primary mode) or run a one-shot
//! light chase down the bank ([`Sweep`]).

use embedded_hal::delay::DelayNs;
use log::info;

use crate::bank::OutputBank;
use crate::line::DigitalOutput;

/// Reaction to one detected press.
pub trait PressAction<L: DigitalOutput, D: DelayNs> {
    fn on_edge(&mut self, outputs: &mut OutputBank<L>, delay: &mut D);
}

/// Bounded press tally rendered bit-for-bit on the bank.
///
/// Wraps modulo `2^width`, so the value always fits the lines exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressCounter {
    value: u8,
}

impl PressCounter {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Current tally.
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl<L: DigitalOutput, D: DelayNs> PressAction<L, D> for PressCounter {
    fn on_edge(&mut self, outputs: &mut OutputBank<L>, _delay: &mut D) {
        self.value = self.value.wrapping_add(1) & outputs.mask();
        outputs.render(self.value);
        info!("tally: {}", self.value);
    }
}

/// Light each line in bank order for `hold_ms`, then extinguish it.
///
/// No persistent state between presses. The pattern runs to completion
/// once started, so worst-case shutdown latency in sweep mode is
/// `width x hold_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Sweep {
    hold_ms: u32,
}

impl Sweep {
    pub const fn new(hold_ms: u32) -> Self {
        Self { hold_ms }
    }
}

impl<L: DigitalOutput, D: DelayNs> PressAction<L, D> for Sweep {
    fn on_edge(&mut self, outputs: &mut OutputBank<L>, delay: &mut D) {
        for i in 0..outputs.width() {
            outputs.set_line(i, true);
            delay.delay_ms(self.hold_ms);
            outputs.set_line(i, false);
        }
    }
}
