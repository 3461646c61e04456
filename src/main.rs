//! bitpress - push-button binary tally on Raspberry Pi GPIO.
//!
//! Wires the host-testable core to real hardware: `rppal` pins, a
//! sleeping tick delay, and SIGINT/SIGTERM delivery via `ctrlc`. The
//! signal handler only stores a stop flag; the polling loop notices it
//! within one tick and releases every output line before the process
//! exits 0. The only failure path is GPIO/signal acquisition, reported
//! here and exiting non-zero before the loop starts.

mod error;
mod pins;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use rppal::gpio::{Gpio, OutputPin};
use rppal::hal::Delay;

use bitpress::{
    config, ButtonSource, EdgeSource, IntervalSource, OutputBank, PressAction, PressCounter,
    ShutdownFlag, Supervisor, Sweep,
};

use crate::error::Error;

/// Stop request shared with the signal handler thread.
static STOP: ShutdownFlag = ShutdownFlag::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Pattern {
    /// Binary tally across the lines, +1 per press
    Count,
    /// Light each line in order once per press
    Sweep,
}

#[derive(Parser, Debug)]
#[command(version, about = "Count button presses on a row of GPIO LEDs")]
struct Args {
    /// Output pattern fired on each press
    #[arg(value_enum, default_value = "count")]
    pattern: Pattern,

    /// Fire the pattern from a timer with this period instead of the
    /// button (ms)
    #[arg(long, value_name = "MS")]
    auto: Option<u32>,

    /// Push-button input pin (BCM)
    #[arg(long, value_name = "BCM", default_value_t = config::BUTTON_PIN)]
    button_pin: u8,

    /// Output line pins (BCM), least-significant bit first
    #[arg(
        long,
        value_name = "BCM,..",
        value_delimiter = ',',
        default_values_t = config::LED_PINS
    )]
    led_pins: Vec<u8>,

    /// Polling tick and debounce window (ms)
    #[arg(long, value_name = "MS", default_value_t = config::TICK_MS)]
    tick_ms: u32,

    /// Sweep per-line hold (ms); a sweep in flight finishes before
    /// shutdown proceeds
    #[arg(long, value_name = "MS", default_value_t = config::HOLD_MS)]
    hold_ms: u32,

    /// Consecutive identical samples required before a level change is
    /// accepted; 0 relies on the polling cadence alone
    #[arg(long, value_name = "TICKS", default_value_t = 0)]
    settle: u8,
}

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<(), Error> {
    let gpio = Gpio::new()?;
    let outputs = pins::output_bank(&gpio, &args.led_pins)?;
    let tick_ms = args.tick_ms.max(1);

    ctrlc::set_handler(|| {
        debug!("termination signal received");
        STOP.request();
    })?;

    info!(
        "starting: pattern {:?}, lines {:?}",
        args.pattern, args.led_pins
    );

    match (args.auto, args.pattern) {
        (None, Pattern::Count) => {
            let button = pins::button(&gpio, args.button_pin)?;
            drive(
                ButtonSource::with_settle(button, args.settle),
                PressCounter::new(),
                outputs,
                tick_ms,
            );
        }
        (None, Pattern::Sweep) => {
            let button = pins::button(&gpio, args.button_pin)?;
            drive(
                ButtonSource::with_settle(button, args.settle),
                Sweep::new(args.hold_ms),
                outputs,
                tick_ms,
            );
        }
        (Some(period_ms), Pattern::Count) => {
            drive(
                IntervalSource::new(period_ticks(period_ms, tick_ms)),
                PressCounter::new(),
                outputs,
                tick_ms,
            );
        }
        (Some(period_ms), Pattern::Sweep) => {
            drive(
                IntervalSource::new(period_ticks(period_ms, tick_ms)),
                Sweep::new(args.hold_ms),
                outputs,
                tick_ms,
            );
        }
    }

    Ok(())
}

fn period_ticks(period_ms: u32, tick_ms: u32) -> u32 {
    (period_ms / tick_ms).max(1)
}

fn drive<E, A>(source: E, action: A, outputs: OutputBank<OutputPin>, tick_ms: u32)
where
    E: EdgeSource,
    A: PressAction<OutputPin, Delay>,
{
    Supervisor::new(source, action, outputs, Delay::new(), tick_ms).run(&STOP);
}
