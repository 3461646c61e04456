//! The polling loop and the termination protocol.
//!
//! One logical thread runs the loop; stop requests arrive from any
//! other thread (the signal handler, in the binary) through the
//! [`ShutdownFlag`]. The handler only stores a flag - all pin teardown
//! happens on the loop thread after the final iteration, so no pin is
//! ever touched from two threads at once.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use log::info;

use crate::action::PressAction;
use crate::bank::OutputBank;
use crate::line::DigitalOutput;
use crate::source::EdgeSource;

/// Asynchronous, idempotent stop request.
///
/// Any number of threads may call [`request`](Self::request) any number
/// of times; the loop observes it within one tick.
pub struct ShutdownFlag(AtomicBool);

impl ShutdownFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for ShutdownFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the loop: poll the source, fire the action on a press, sleep
/// one tick. On a stop request the loop ends and every output line is
/// driven low exactly once before [`run`](Self::run) returns.
pub struct Supervisor<E, A, L, D> {
    source: E,
    action: A,
    outputs: OutputBank<L>,
    delay: D,
    tick_ms: u32,
}

impl<E, A, L, D> Supervisor<E, A, L, D>
where
    E: EdgeSource,
    A: PressAction<L, D>,
    L: DigitalOutput,
    D: DelayNs,
{
    pub fn new(source: E, action: A, outputs: OutputBank<L>, delay: D, tick_ms: u32) -> Self {
        Self {
            source,
            action,
            outputs,
            delay,
            tick_ms,
        }
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn outputs(&self) -> &OutputBank<L> {
        &self.outputs
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Run until `stop` is requested, then release the lines.
    ///
    /// The flag is re-checked every tick, so shutdown latency is one
    /// tick plus whatever press reaction is in flight.
    pub fn run(&mut self, stop: &ShutdownFlag) {
        info!(
            "polling every {} ms across {} output line(s)",
            self.tick_ms,
            self.outputs.width()
        );

        // Start from a known state: tally 0, all lines low.
        self.outputs.all_off();

        while !stop.is_requested() {
            if self.source.poll().is_some() {
                self.action.on_edge(&mut self.outputs, &mut self.delay);
            }
            self.delay.delay_ms(self.tick_ms);
        }

        info!("stop requested, releasing output lines");
        self.outputs.all_off();
    }
}
