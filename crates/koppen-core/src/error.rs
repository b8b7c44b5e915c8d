//! Error types for grid construction, series alignment and climatology windows.

use crate::grid::Shape;

/// Precondition violations detected at the entry points of the library.
///
/// `NaN` values are not errors: they flow through the statistics and end up
/// as the no-data code.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KoppenError {
    /// A grid does not have the shape of the grids it is combined with.
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: Shape,
        actual: Shape,
    },

    /// A buffer or sequence has the wrong number of elements.
    #[error("length mismatch in {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A series without any monthly slice.
    #[error("climate series is empty")]
    EmptySeries,

    /// Slice `index` is not the calendar month following slice `index - 1`.
    #[error("time axis is not consecutive at slice {index}: {previous} is followed by {found}")]
    NonConsecutiveTime {
        index: usize,
        previous: chrono::NaiveDate,
        found: chrono::NaiveDate,
    },

    /// A climatology was requested over a span that never covers `month`.
    #[error("no data for calendar month {month}; at least one full year is required")]
    MissingMonth { month: u32 },

    /// A month number outside 1–12.
    #[error("invalid calendar month {0}")]
    InvalidMonth(u32),

    /// A rolling window of zero years.
    #[error("rolling window must span at least one year")]
    InvalidWindow,

    /// The series is shorter than one rolling window.
    #[error("rolling window of {window_months} months exceeds the {available} available")]
    WindowTooLong {
        window_months: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, KoppenError>;
