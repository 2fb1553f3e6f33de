//! Wall-clock access
//!
//! The engine never reads the system clock directly; it goes through
//! `TimeSource` so the shell can plug in the real clock and tests can
//! script one.

use chrono::{Datelike, Local};

/// Where the current calendar year comes from.
pub trait TimeSource {
    /// Current local calendar year, e.g. 2026.
    fn current_year(&self) -> i32;
}

/// Host system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}
