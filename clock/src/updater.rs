//! Footer year update
//!
//! The one operation this application performs: read the clock, write the
//! year into the display element. Stateless and idempotent.

use crate::display::{DisplayError, TextTarget};
use crate::source::TimeSource;

/// Identifier of the display element that carries the year.
pub const YEAR_ELEMENT_ID: &str = "year";

/// Write the current calendar year into the display element.
///
/// The year is written as a plain decimal string (`2026`, never `2,026`).
/// A missing element leaves the surface untouched and still counts as
/// success; only the surface itself failing is an error.
///
/// Returns the year that was written so callers can log it.
pub fn update_year<C, T>(clock: &C, target: &T) -> Result<i32, DisplayError>
where
    C: TimeSource + ?Sized,
    T: TextTarget + ?Sized,
{
    let year = clock.current_year();
    target.write_text(YEAR_ELEMENT_ID, &year.to_string())?;
    Ok(year)
}
