//! Warm-month count (`warmsum`).
//!
//! For each calendar month, average Tmax and Tmin over every slice stamped
//! in that month, take the midpoint `(Tmax + Tmin) / 2`, and count the
//! months whose midpoint reaches 10 °C. `NaN` months never count.

use chrono::{Datelike, NaiveDate};

use crate::calendar::MONTHS_PER_YEAR;
use crate::error::{KoppenError, Result};
use crate::grid::{Grid, Shape};

/// Monthly mean temperature at or above which a month is "warm" (°C).
pub const WARM_MONTH_C: f32 = 10.0;

/// Count warm calendar months per point.
///
/// `time`, `tmax` and `tmin` must be aligned; a climatology (12 slices) or a
/// concatenated rolling climatology both work. Calendar months with no slice
/// contribute nothing.
pub fn warm_month_count(
    time: &[NaiveDate],
    tmax: &[Grid<f32>],
    tmin: &[Grid<f32>],
    shape: Shape,
) -> Result<Grid<u8>> {
    for (what, slices) in [("tmax", tmax), ("tmin", tmin)] {
        if slices.len() != time.len() {
            return Err(KoppenError::LengthMismatch {
                what,
                expected: time.len(),
                actual: slices.len(),
            });
        }
        for g in slices {
            g.ensure_shape(shape, what)?;
        }
    }

    let mut by_month: Vec<Vec<usize>> = vec![Vec::new(); MONTHS_PER_YEAR];
    for (i, date) in time.iter().enumerate() {
        by_month[date.month0() as usize].push(i);
    }

    Ok(Grid::from_fn(shape, |p| {
        by_month
            .iter()
            .filter(|idx| !idx.is_empty())
            .filter(|idx| {
                let n = idx.len() as f32;
                let mean_max = idx.iter().map(|&i| tmax[i].data[p]).sum::<f32>() / n;
                let mean_min = idx.iter().map(|&i| tmin[i].data[p]).sum::<f32>() / n;
                0.5 * (mean_max + mean_min) >= WARM_MONTH_C
            })
            .count() as u8
    }))
}
