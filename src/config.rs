//! Application-wide constants and compile-time configuration.
//!
//! Pin assignments and timing defaults live here so they can be tuned
//! in one place; the CLI can override all of them at startup.

// GPIO pin assignments (BCM numbering)
//
//   Push button    → GPIO 25 (wired to ground, internal pull-up)
//   LED bit 0      → GPIO 8
//   LED bit 1      → GPIO 7
//   LED bit 2      → GPIO 16
//   LED bit 3      → GPIO 20

/// Push-button input pin (BCM).
pub const BUTTON_PIN: u8 = 25;

/// Output line pins (BCM), least-significant bit first.
pub const LED_PINS: [u8; 4] = [8, 7, 16, 20];

// Timing

/// Polling tick, which doubles as the debounce window (ms).
///
/// Longer than mechanical contact bounce, short enough to never miss a
/// deliberate press and to bound shutdown latency.
pub const TICK_MS: u32 = 50;

/// Per-line hold in sweep mode, and the default self-running period (ms).
pub const HOLD_MS: u32 = 1000;

// Capacity

/// Maximum output lines in a bank. Eight keeps the tally in a `u8`.
pub const MAX_LINES: usize = 8;
