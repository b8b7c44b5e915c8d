//! Tropical group A: coldest month at or above 18 °C, not arid or polar.
//!   - AF (rainforest):  Pmin ≥ 60
//!   - AM (monsoon):     Pann ≥ 25·(100 − Pmin)
//!   - AS (dry summer):  Pssum < 60
//!   - AW (dry winter):  Pwsum < 60
//!
//! The sub-rules overlap (a wet rainforest usually also satisfies the
//! monsoon test), so they are taken in the order above and each one
//! excludes the classes before it.

use crate::stats::ClimateStats;

use super::mask::Mask;

/// Coldest-month floor of the tropical group (°C).
pub const TROPICAL_TMIN_C: f32 = 18.0;

/// Driest-month and half-year precipitation limit (mm).
pub const TROPICAL_DRY_MM: f32 = 60.0;

/// Monsoon rule: `Pann ≥ MONSOON_SLOPE · (MONSOON_INTERCEPT − Pmin)`.
pub const MONSOON_SLOPE: f32 = 25.0;
pub const MONSOON_INTERCEPT: f32 = 100.0;

pub struct TropicalMasks {
    pub af: Mask,
    pub am: Mask,
    pub as_: Mask,
    pub aw: Mask,
}

/// Tropical classes, excluding the B/E mask `be`.
pub fn tropical(stats: &ClimateStats, be: &Mask) -> TropicalMasks {
    let base = Mask::select(&stats.tmin, |t| t >= TROPICAL_TMIN_C).and_not(be);

    let af = base.filter(|i| stats.pmin.data[i] >= TROPICAL_DRY_MM);
    let am = base.and_not(&af).filter(|i| {
        stats.pann.data[i] >= MONSOON_SLOPE * (MONSOON_INTERCEPT - stats.pmin.data[i])
    });
    let taken = af.or(&am);
    let as_ = base
        .and_not(&taken)
        .filter(|i| stats.pssum.data[i] < TROPICAL_DRY_MM);
    let taken = taken.or(&as_);
    let aw = base
        .and_not(&taken)
        .filter(|i| stats.pwsum.data[i] < TROPICAL_DRY_MM);

    TropicalMasks { af, am, as_, aw }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::fixtures::tropical_wet;
    use crate::grid::Shape;
    use crate::stats::PointStats;

    fn masks_for(p: PointStats) -> TropicalMasks {
        tropical(&ClimateStats::single(p), &Mask::empty(Shape::new(1, 1)))
    }

    fn which(m: &TropicalMasks) -> Vec<&'static str> {
        [("AF", &m.af), ("AM", &m.am), ("AS", &m.as_), ("AW", &m.aw)]
            .into_iter()
            .filter(|(_, mask)| mask.get(0))
            .map(|(name, _)| name)
            .collect()
    }

    /// Tmin = 18 is inside the tropical group.
    #[test]
    fn eighteen_is_tropical() {
        let p = PointStats { tmin: 18.0, ..tropical_wet() };
        assert_eq!(which(&masks_for(p)), vec!["AF"]);
        let p = PointStats { tmin: 17.99, ..tropical_wet() };
        assert!(which(&masks_for(p)).is_empty());
    }

    /// A rainforest also passes the monsoon test but is only AF.
    #[test]
    fn rainforest_takes_precedence_over_monsoon() {
        let p = tropical_wet();
        assert!(p.pann >= MONSOON_SLOPE * (MONSOON_INTERCEPT - p.pmin));
        assert_eq!(which(&masks_for(p)), vec!["AF"]);
    }

    #[test]
    fn monsoon() {
        // 2500 ≥ 25·(100 − 30) = 1750.
        let p = PointStats { pmin: 30.0, ..tropical_wet() };
        assert_eq!(which(&masks_for(p)), vec!["AM"]);
    }

    #[test]
    fn dry_summer_and_dry_winter() {
        let base = PointStats { pmin: 10.0, pann: 2000.0, ..tropical_wet() };
        let dry_summer = PointStats { pssum: 40.0, pwsum: 1960.0, ..base };
        assert_eq!(which(&masks_for(dry_summer)), vec!["AS"]);
        let dry_winter = PointStats { pssum: 1960.0, pwsum: 40.0, ..base };
        assert_eq!(which(&masks_for(dry_winter)), vec!["AW"]);
    }

    #[test]
    fn exclusion_mask_removes_all_tropical() {
        let stats = ClimateStats::single(tropical_wet());
        let be = Mask::from_fn(Shape::new(1, 1), |_| true);
        assert!(which(&tropical(&stats, &be)).is_empty());
    }
}
