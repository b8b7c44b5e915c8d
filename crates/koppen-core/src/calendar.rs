//! Calendar helpers for the monthly time axis.
//!
//! Half-years used by the precipitation statistics:
//!   - summer: April–September (months 4–9)
//!   - winter: January–March and October–December

use chrono::{Datelike, NaiveDate};

use crate::error::{KoppenError, Result};

pub const MONTHS_PER_YEAR: usize = 12;

/// Day of month used to stamp climatology slices.
pub const STAMP_DAY: u32 = 16;

/// Half-year a calendar month belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Season of a calendar month (1–12).
    pub fn of(month: u32) -> Result<Self> {
        if is_summer(month) {
            Ok(Season::Summer)
        } else if is_winter(month) {
            Ok(Season::Winter)
        } else {
            Err(KoppenError::InvalidMonth(month))
        }
    }
}

#[inline]
pub fn is_summer(month: u32) -> bool {
    (4..=9).contains(&month)
}

#[inline]
pub fn is_winter(month: u32) -> bool {
    (1..=3).contains(&month) || (10..=12).contains(&month)
}

/// Stamp for `month` of `year`: the 16th of that month.
pub fn month_stamp(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, STAMP_DAY).ok_or(KoppenError::InvalidMonth(month))
}

/// `(year, month)` of the calendar month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    }
}

/// Check that each stamp falls in the calendar month after its predecessor.
///
/// Day-of-month is ignored, so mid-month and first-of-month stamps both work.
pub fn ensure_consecutive(time: &[NaiveDate]) -> Result<()> {
    for (index, pair) in time.windows(2).enumerate() {
        let (previous, found) = (pair[0], pair[1]);
        if next_month(previous) != (found.year(), found.month()) {
            return Err(KoppenError::NonConsecutiveTime {
                index: index + 1,
                previous,
                found,
            });
        }
    }
    Ok(())
}

/// `count` consecutive monthly stamps starting at `year`-`month`.
pub fn monthly_axis(year: i32, month: u32, count: usize) -> Result<Vec<NaiveDate>> {
    let mut stamps = Vec::with_capacity(count);
    let mut current = month_stamp(year, month)?;
    for _ in 0..count {
        stamps.push(current);
        let (y, m) = next_month(current);
        current = month_stamp(y, m)?;
    }
    Ok(stamps)
}
