//! Aridity threshold `Pth` (mm/yr).
//!
//! `Pth` depends on mean temperature and on when the precipitation falls:
//!   - winter-concentrated (`Pwsum` above 2/3 of `Pann`): `2·Tmean`
//!   - summer-concentrated (`Pssum` above 2/3 of `Pann`): `2·Tmean + 28`
//!   - otherwise:                                          `2·Tmean + 14`
//!
//! The comparison is strict, so a half-year holding exactly 2/3 of the
//! annual total counts as "otherwise". Comparisons against `NaN` are false,
//! which also routes missing or all-zero precipitation to "otherwise".

use crate::error::Result;
use crate::grid::Grid;

/// Seasonal concentration of annual precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationRegime {
    WinterConcentrated,
    SummerConcentrated,
    Even,
}

impl PrecipitationRegime {
    pub fn of(pann: f32, pwsum: f32, pssum: f32) -> Self {
        let two_thirds = 2.0 * pann / 3.0;
        if two_thirds - pwsum < 0.0 {
            PrecipitationRegime::WinterConcentrated
        } else if two_thirds - pssum < 0.0 {
            PrecipitationRegime::SummerConcentrated
        } else {
            PrecipitationRegime::Even
        }
    }

    /// Offset added to `2·Tmean`.
    pub fn offset(self) -> f32 {
        match self {
            PrecipitationRegime::WinterConcentrated => 0.0,
            PrecipitationRegime::SummerConcentrated => 28.0,
            PrecipitationRegime::Even => 14.0,
        }
    }
}

/// `Pth` for a single point.
#[inline]
pub fn threshold_at(tmean: f32, pann: f32, pwsum: f32, pssum: f32) -> f32 {
    2.0 * tmean + PrecipitationRegime::of(pann, pwsum, pssum).offset()
}

/// `Pth` over a grid. All inputs must share `tmean`'s shape.
pub fn precipitation_threshold(
    tmean: &Grid<f32>,
    pann: &Grid<f32>,
    pwsum: &Grid<f32>,
    pssum: &Grid<f32>,
) -> Result<Grid<f32>> {
    let shape = tmean.shape();
    pann.ensure_shape(shape, "pann")?;
    pwsum.ensure_shape(shape, "pwsum")?;
    pssum.ensure_shape(shape, "pssum")?;
    Ok(Grid::from_fn(shape, |i| {
        threshold_at(tmean.data[i], pann.data[i], pwsum.data[i], pssum.data[i])
    }))
}
