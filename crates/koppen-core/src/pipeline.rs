//! End-to-end orchestration: series → climatology → statistics → classes.

use serde::Serialize;
use tracing::info;

use crate::classify::{classify, Classification};
use crate::climatology::{monthly_climatology, rolling_climatology, Climatology};
use crate::error::Result;
use crate::series::ClimateSeries;
use crate::stats::ClimateStats;

/// Classification of one rolling window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowClassification {
    /// First year averaged into the window.
    pub start_year: i32,
    /// Last year averaged into the window.
    pub end_year: i32,
    pub classification: Classification,
}

/// Classify the climatology of the whole series.
pub fn classify_series(series: &ClimateSeries) -> Result<Classification> {
    let clim = monthly_climatology(series)?;
    let result = classify_climatology(&clim)?;
    info!(
        months = series.len(),
        first_year = series.first_year(),
        last_year = series.last_year(),
        classified = result.classified(),
        unclassified = result.unclassified,
        no_data = result.no_data,
        "classified series"
    );
    Ok(result)
}

/// Classify every `window_years`-year window of the series.
///
/// Windows advance one year at a time; see [`rolling_climatology`].
pub fn classify_rolling(series: &ClimateSeries, window_years: usize) -> Result<Vec<WindowClassification>> {
    let windows = rolling_climatology(series, window_years)?;
    info!(window_years, windows = windows.len(), "classifying rolling windows");

    windows
        .iter()
        .map(|clim| {
            Ok(WindowClassification {
                start_year: clim.reference_year(),
                end_year: clim.end_year(),
                classification: classify_climatology(clim)?,
            })
        })
        .collect()
}

pub fn classify_climatology(clim: &Climatology) -> Result<Classification> {
    classify(&ClimateStats::from_climatology(clim)?)
}
