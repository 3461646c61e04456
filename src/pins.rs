//! Raspberry Pi GPIO acquisition.
//!
//! The one place that knows about `rppal`. Everything handed back
//! already speaks the crate's line traits: `rppal` pins implement the
//! infallible `embedded-hal` digital traits, which the core adapts
//! blanket-wise; only the pull-up polarity flip happens here.

use rppal::gpio::{Gpio, InputPin, OutputPin};

use bitpress::{ActiveLow, OutputBank};

use crate::error::Error;

/// The push button: internal pull-up, so the raw line idles high and
/// reads low while held. `ActiveLow` flips that to `true` = pressed.
pub fn button(gpio: &Gpio, pin: u8) -> Result<ActiveLow<InputPin>, Error> {
    Ok(ActiveLow(gpio.get(pin)?.into_input_pullup()))
}

/// The LED lines, least-significant first, all initialized low.
pub fn output_bank(gpio: &Gpio, pins: &[u8]) -> Result<OutputBank<OutputPin>, Error> {
    if pins.is_empty() {
        return Err(Error::NoOutputLines);
    }
    let mut bank = OutputBank::new();
    for &pin in pins {
        let line = gpio.get(pin)?.into_output_low();
        bank.push(line)
            .map_err(|_| Error::TooManyOutputLines(pins.len()))?;
    }
    Ok(bank)
}
