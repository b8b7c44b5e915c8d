//! Aligned monthly series of precipitation and temperature grids.

use chrono::{Datelike, NaiveDate};

use crate::calendar::ensure_consecutive;
use crate::error::{KoppenError, Result};
use crate::grid::{Grid, Shape};

/// Monthly precipitation (mm/month), maximum and minimum temperature (°C)
/// over a common time axis of consecutive calendar months.
///
/// All slices share one spatial shape. Alignment is checked once in
/// [`ClimateSeries::new`]; everything downstream relies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateSeries {
    time: Vec<NaiveDate>,
    precipitation: Vec<Grid<f32>>,
    tmax: Vec<Grid<f32>>,
    tmin: Vec<Grid<f32>>,
}

impl ClimateSeries {
    pub fn new(
        time: Vec<NaiveDate>,
        precipitation: Vec<Grid<f32>>,
        tmax: Vec<Grid<f32>>,
        tmin: Vec<Grid<f32>>,
    ) -> Result<Self> {
        let Some(first) = precipitation.first() else {
            return Err(KoppenError::EmptySeries);
        };
        let shape = first.shape();

        for (what, slices) in [
            ("precipitation", &precipitation),
            ("tmax", &tmax),
            ("tmin", &tmin),
        ] {
            if slices.len() != time.len() {
                return Err(KoppenError::LengthMismatch {
                    what,
                    expected: time.len(),
                    actual: slices.len(),
                });
            }
            for grid in slices.iter() {
                grid.ensure_shape(shape, what)?;
            }
        }
        ensure_consecutive(&time)?;

        Ok(Self {
            time,
            precipitation,
            tmax,
            tmin,
        })
    }

    pub fn time(&self) -> &[NaiveDate] {
        &self.time
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

    /// Number of monthly slices.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn shape(&self) -> Shape {
        self.precipitation[0].shape()
    }

    pub fn first_year(&self) -> i32 {
        self.time[0].year()
    }

    pub fn last_year(&self) -> i32 {
        self.time[self.time.len() - 1].year()
    }

    /// Borrow slices `start..start + len` as a window.
    pub(crate) fn window(&self, start: usize, len: usize) -> SeriesWindow<'_> {
        let range = start..start + len;
        SeriesWindow {
            time: &self.time[range.clone()],
            precipitation: &self.precipitation[range.clone()],
            tmax: &self.tmax[range.clone()],
            tmin: &self.tmin[range],
            shape: self.shape(),
        }
    }

    pub(crate) fn full(&self) -> SeriesWindow<'_> {
        self.window(0, self.len())
    }
}

/// Borrowed contiguous run of an aligned series.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SeriesWindow<'a> {
    pub time: &'a [NaiveDate],
    pub precipitation: &'a [Grid<f32>],
    pub tmax: &'a [Grid<f32>],
    pub tmin: &'a [Grid<f32>],
    pub shape: Shape,
}
