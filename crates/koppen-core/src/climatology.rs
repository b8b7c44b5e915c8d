//! Monthly climatologies: per-calendar-month means across years.
//!
//! A climatology holds exactly 12 slices per variable (index 0 = January),
//! stamped on the 16th of each month of its reference year, which is the
//! first year of the averaged span. The stamps only keep the time axis
//! well formed; nothing downstream reads the year.
//!
//! Rolling climatologies average contiguous `Δt`-year windows that advance
//! one year (12 slices) at a time until no full window remains.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::{monthly_axis, MONTHS_PER_YEAR};
use crate::error::{KoppenError, Result};
use crate::grid::{Grid, Shape};
use crate::series::{ClimateSeries, SeriesWindow};

/// Calendar-month means of precipitation, Tmax and Tmin.
///
/// Only built from a validated series, so every variable always holds
/// 12 grids of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Climatology {
    pub(crate) reference_year: i32,
    pub(crate) end_year: i32,
    /// Monthly mean precipitation, 12 grids, January first.
    pub(crate) precipitation: Vec<Grid<f32>>,
    /// Monthly mean maximum temperature, 12 grids.
    pub(crate) tmax: Vec<Grid<f32>>,
    /// Monthly mean minimum temperature, 12 grids.
    pub(crate) tmin: Vec<Grid<f32>>,
}

impl Climatology {
    pub fn shape(&self) -> Shape {
        self.precipitation[0].shape()
    }

    /// Year of the first averaged slice.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Year of the last averaged slice.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn precipitation(&self) -> &[Grid<f32>] {
        &self.precipitation
    }

    pub fn tmax(&self) -> &[Grid<f32>] {
        &self.tmax
    }

    pub fn tmin(&self) -> &[Grid<f32>] {
        &self.tmin
    }

    /// Calendar month (1–12) of slice `index`.
    #[inline]
    pub fn month_of(index: usize) -> u32 {
        index as u32 + 1
    }

    /// Day-16 stamps of the 12 slices in the reference year.
    pub fn stamps(&self) -> Result<Vec<NaiveDate>> {
        monthly_axis(self.reference_year, 1, MONTHS_PER_YEAR)
    }

    /// Join climatologies end to end into one monthly series.
    ///
    /// Windows from [`rolling_climatology`] have consecutive reference
    /// years, so the result is a well-formed series of `12 × n` slices.
    pub fn concat(climatologies: &[Climatology]) -> Result<ClimateSeries> {
        let mut time = Vec::with_capacity(climatologies.len() * MONTHS_PER_YEAR);
        let mut precipitation = Vec::with_capacity(time.capacity());
        let mut tmax = Vec::with_capacity(time.capacity());
        let mut tmin = Vec::with_capacity(time.capacity());
        for c in climatologies {
            time.extend(c.stamps()?);
            precipitation.extend(c.precipitation.iter().cloned());
            tmax.extend(c.tmax.iter().cloned());
            tmin.extend(c.tmin.iter().cloned());
        }
        ClimateSeries::new(time, precipitation, tmax, tmin)
    }
}

/// Average every calendar month across all years of `series`.
///
/// Means propagate `NaN`: one missing year makes that month `NaN` at the
/// point. Fails with [`KoppenError::MissingMonth`] when the series does not
/// cover all twelve calendar months.
pub fn monthly_climatology(series: &ClimateSeries) -> Result<Climatology> {
    climatology_of(series.full())
}

/// Monthly climatologies over `window_years`-year windows advancing one year
/// at a time.
///
/// Window `t` averages slices `12·t .. 12·(t + window_years)`; windows are
/// produced while a full one fits, so a series of `n` whole years yields
/// `n − window_years + 1` climatologies.
pub fn rolling_climatology(series: &ClimateSeries, window_years: usize) -> Result<Vec<Climatology>> {
    if window_years == 0 {
        return Err(KoppenError::InvalidWindow);
    }
    let window_months = window_years * MONTHS_PER_YEAR;
    if series.len() < window_months {
        return Err(KoppenError::WindowTooLong {
            window_months,
            available: series.len(),
        });
    }

    let n_windows = (series.len() - window_months) / MONTHS_PER_YEAR + 1;
    debug!(window_years, n_windows, "building rolling climatology");

    (0..n_windows)
        .map(|t| climatology_of(series.window(t * MONTHS_PER_YEAR, window_months)))
        .collect()
}

pub(crate) fn climatology_of(window: SeriesWindow<'_>) -> Result<Climatology> {
    // Slice indices grouped by calendar month.
    let mut by_month: Vec<Vec<usize>> = vec![Vec::new(); MONTHS_PER_YEAR];
    for (i, date) in window.time.iter().enumerate() {
        by_month[date.month0() as usize].push(i);
    }
    if let Some(m) = by_month.iter().position(|idx| idx.is_empty()) {
        return Err(KoppenError::MissingMonth { month: m as u32 + 1 });
    }

    let monthly_means = |slices: &[Grid<f32>]| -> Vec<Grid<f32>> {
        by_month
            .iter()
            .map(|idx| mean_of(slices, idx, window.shape))
            .collect()
    };

    Ok(Climatology {
        reference_year: window.time[0].year(),
        end_year: window.time[window.time.len() - 1].year(),
        precipitation: monthly_means(window.precipitation),
        tmax: monthly_means(window.tmax),
        tmin: monthly_means(window.tmin),
    })
}

/// Pointwise mean of `slices[i]` for `i` in `indices`. `NaN` propagates.
fn mean_of(slices: &[Grid<f32>], indices: &[usize], shape: Shape) -> Grid<f32> {
    let n = indices.len() as f32;
    Grid::from_fn(shape, |p| {
        let sum: f32 = indices.iter().map(|&i| slices[i].data[p]).sum();
        sum / n
    })
}
