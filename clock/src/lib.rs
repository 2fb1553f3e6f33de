//! YearFooter Clock Engine
//!
//! Tracks the host's calendar year and keeps a display element in sync.
//! The desktop shell supplies the real clock and document; everything here
//! works against the `TimeSource` and `TextTarget` seams.

pub mod display;
pub mod source;
pub mod updater;
pub mod watcher;

pub use display::{DisplayError, TextTarget};
pub use source::{SystemClock, TimeSource};
pub use updater::{update_year, YEAR_ELEMENT_ID};
pub use watcher::{Rollover, YearWatcher};
