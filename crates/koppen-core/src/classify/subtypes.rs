//! Third-letter subtypes.
//!
//! Arid: `h` (hot, Tmean ≥ 18) or `k` (cold) for steppe; `s`/`k` for desert.
//!
//! Temperate and cold, first match wins:
//!   - a: Tmax ≥ 22
//!   - b: warmsum > 3
//!   - c: Tmin < −38
//!   - d: everything else
//! The split runs the same way for both groups. Group C has no `d` class,
//! so a C point that fails a, b and c (a cool summer with at most three
//! warm months) matches no leaf and is left unclassified.

use crate::grid::Grid;
use crate::stats::ClimateStats;

use super::mask::Mask;

/// Hot/cold boundary of the arid subtypes (°C).
pub const HOT_ARID_TMEAN_C: f32 = 18.0;

/// `a`: warmest month at or above this (°C).
pub const HOT_SUMMER_TMAX_C: f32 = 22.0;

/// `b`: more than this many warm months.
pub const WARM_SUMMER_MONTHS: u8 = 3;

/// `c`: coldest month below this (°C).
pub const SEVERE_WINTER_TMIN_C: f32 = -38.0;

/// Split an arid class into (hot, cold).
pub fn arid_subtypes(class: &Mask, tmean: &Grid<f32>) -> (Mask, Mask) {
    let hot = class.filter(|i| tmean.data[i] >= HOT_ARID_TMEAN_C);
    let cold = class.and_not(&hot);
    (hot, cold)
}

pub struct ThermalSubtypes {
    pub a: Mask,
    pub b: Mask,
    pub c: Mask,
    pub d: Mask,
}

/// Split a C or D class into a/b/c/d.
pub fn thermal_subtypes(class: &Mask, stats: &ClimateStats) -> ThermalSubtypes {
    let a = class.filter(|i| stats.tmax.data[i] >= HOT_SUMMER_TMAX_C);
    let rest = class.and_not(&a);
    let b = rest.filter(|i| stats.warmsum.data[i] > WARM_SUMMER_MONTHS);
    let rest = rest.and_not(&b);
    let c = rest.filter(|i| stats.tmin.data[i] < SEVERE_WINTER_TMIN_C);
    let d = rest.and_not(&c);
    ThermalSubtypes { a, b, c, d }
}
