//! Single digital line abstractions.
//!
//! The core only ever needs two operations against hardware: read one
//! input bit and set one output bit. Both are modelled as traits so the
//! state machines stay host-testable; blanket impls adapt any infallible
//! `embedded-hal` v1 pin, which is what `rppal` hands out on the Pi.

use core::convert::Infallible;
use embedded_hal::digital::{InputPin, OutputPin};

/// One physical (or simulated) input bit. `true` means pressed.
pub trait DigitalInput {
    fn read(&mut self) -> bool;
}

/// One physical (or simulated) output bit. `true` means energized.
pub trait DigitalOutput {
    fn set(&mut self, level: bool);
}

/// Inverts an active-low input so `true` means pressed.
///
/// Matches the usual pull-up wiring for momentary switches: the line
/// idles high and is pulled low while the button is held.
pub struct ActiveLow<I>(pub I);

impl<I: DigitalInput> DigitalInput for ActiveLow<I> {
    fn read(&mut self) -> bool {
        !self.0.read()
    }
}

impl<P> DigitalInput for P
where
    P: InputPin<Error = Infallible>,
{
    fn read(&mut self) -> bool {
        match self.is_high() {
            Ok(level) => level,
            Err(e) => match e {},
        }
    }
}

impl<P> DigitalOutput for P
where
    P: OutputPin<Error = Infallible>,
{
    fn set(&mut self, level: bool) {
        let result = if level { self.set_high() } else { self.set_low() };
        match result {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }
}
