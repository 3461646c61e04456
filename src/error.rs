//! Unified error type for the bitpress binary.
//!
//! The only error surface is startup: once the loop is running,
//! sampling and rendering are total. Nothing here is retried - each
//! failure is reported to the operator and the process exits non-zero
//! before the loop starts.

use std::fmt;

/// Top-level error type used across the binary.
#[derive(Debug)]
pub enum Error {
    /// The GPIO controller or one of its pins could not be acquired
    /// (not running on a Pi, pin busy, insufficient permissions).
    Gpio(rppal::gpio::Error),

    /// No output line pins were given.
    NoOutputLines,

    /// More output line pins than the bank can hold.
    TooManyOutputLines(usize),

    /// The termination signal handler could not be registered.
    Signal(ctrlc::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gpio(e) => write!(f, "GPIO initialization failed: {e}"),
            Error::NoOutputLines => write!(f, "at least one output line pin is required"),
            Error::TooManyOutputLines(n) => {
                write!(
                    f,
                    "{n} output line pins given, at most {} supported",
                    bitpress::config::MAX_LINES
                )
            }
            Error::Signal(e) => write!(f, "could not register signal handler: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Gpio(e) => Some(e),
            Error::Signal(e) => Some(e),
            _ => None,
        }
    }
}

// Convenience conversions

impl From<rppal::gpio::Error> for Error {
    fn from(e: rppal::gpio::Error) -> Self {
        Error::Gpio(e)
    }
}

impl From<ctrlc::Error> for Error {
    fn from(e: ctrlc::Error) -> Self {
        Error::Signal(e)
    }
}
