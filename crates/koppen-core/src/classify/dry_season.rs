//! Dry-season split shared by the temperate (C) and cold (D) groups.
//!   - S (dry summer):  Psmin < Pwmin, Pwmax > 3·Psmin, Psmin < 40
//!   - W (dry winter):  Pwmin < Psmin, Psmax > 10·Pwmin
//!   - F (no dry season): the rest of the group
//!
//! S and W are disjoint by construction (they need opposite orderings of
//! Psmin and Pwmin).

use crate::grid::Grid;
use crate::stats::ClimateStats;

use super::mask::Mask;
use super::tropical::TROPICAL_TMIN_C;

/// Coldest-month boundary between the temperate and cold groups (°C).
pub const TEMPERATE_TMIN_C: f32 = -3.0;

/// Dry summer: wettest winter month over this multiple of the driest summer month.
pub const DRY_SUMMER_RATIO: f32 = 3.0;

/// Dry summer: driest summer month below this (mm).
pub const DRY_SUMMER_MM: f32 = 40.0;

/// Dry winter: wettest summer month over this multiple of the driest winter month.
pub const DRY_WINTER_RATIO: f32 = 10.0;

pub struct DrySeasonMasks {
    pub s: Mask,
    pub w: Mask,
    pub f: Mask,
}

/// Group C: `-3 < Tmin < 18`.
pub fn temperate_base(tmin: &Grid<f32>) -> Mask {
    Mask::select(tmin, |t| TEMPERATE_TMIN_C < t && t < TROPICAL_TMIN_C)
}

/// Group D: `Tmin ≤ -3`.
pub fn cold_base(tmin: &Grid<f32>) -> Mask {
    Mask::select(tmin, |t| t <= TEMPERATE_TMIN_C)
}

/// Split a group into S/W/F, excluding the B/E mask `be`.
pub fn dry_season(base: &Mask, stats: &ClimateStats, be: &Mask) -> DrySeasonMasks {
    let group = base.and_not(be);

    let s = group.filter(|i| {
        let (psmin, pwmin, pwmax) = (stats.psmin.data[i], stats.pwmin.data[i], stats.pwmax.data[i]);
        psmin < pwmin && pwmax > DRY_SUMMER_RATIO * psmin && psmin < DRY_SUMMER_MM
    });
    let w = group.filter(|i| {
        let (psmin, pwmin, psmax) = (stats.psmin.data[i], stats.pwmin.data[i], stats.psmax.data[i]);
        pwmin < psmin && psmax > DRY_WINTER_RATIO * pwmin
    });
    let f = group.and_not(&s).and_not(&w);

    DrySeasonMasks { s, w, f }
}
