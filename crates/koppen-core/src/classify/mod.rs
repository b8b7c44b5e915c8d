//! Köppen-Geiger rule cascade.
//!
//! Order:
//!   E polar → B arid → A tropical → C temperate / D cold →
//!   B subtypes → C/D subtypes → code assembly.
//!
//! Every family after B excludes `BE = ET ∪ EF ∪ BS ∪ BW`. Exclusion is
//! boolean set difference, so each stage yields a proper mask and the 31
//! leaf masks are pairwise disjoint; assembly asserts this in debug builds.
//!
//! Two gaps are left unclassified (code 0): tropical points failing all
//! four A rules, and C points with the `d` subtype, which has no class.

pub mod arid;
pub mod class;
pub mod dry_season;
mod mask;
pub mod polar;
pub mod subtypes;
pub mod tropical;

#[cfg(test)]
pub(crate) mod fixtures;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::{Grid, Shape};
use crate::stats::{ClimateStats, PointStats};

pub use class::{KgClass, NO_DATA_CODE, UNCLASSIFIED_CODE};
pub use mask::Mask;

use dry_season::{cold_base, dry_season, temperate_base};
use subtypes::{arid_subtypes, thermal_subtypes};

/// Output of one classification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Class code per point: 1–31, [`UNCLASSIFIED_CODE`] or [`NO_DATA_CODE`].
    pub codes: Grid<u8>,
    /// Points per class; classes with no point are omitted.
    pub counts: BTreeMap<KgClass, usize>,
    pub unclassified: usize,
    pub no_data: usize,
}

impl Classification {
    pub fn class_at(&self, row: usize, col: usize) -> Option<KgClass> {
        KgClass::from_code(self.codes.get(row, col))
    }

    /// Number of points that received a class.
    pub fn classified(&self) -> usize {
        self.counts.values().sum()
    }

    /// Most frequent class; ties go to the lower code.
    pub fn dominant(&self) -> Option<KgClass> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&class, _)| class)
    }
}

/// Classify every point of `stats`.
///
/// Fails only if the statistic grids disagree in shape.
pub fn classify(stats: &ClimateStats) -> Result<Classification> {
    let shape = stats.validate()?;
    let leaves = leaf_masks(stats);
    let codes = assemble(&leaves, stats, shape);

    let mut counts = BTreeMap::new();
    let (mut unclassified, mut no_data) = (0usize, 0usize);
    for &code in &codes.data {
        match KgClass::from_code(code) {
            Some(class) => *counts.entry(class).or_insert(0) += 1,
            None if code == NO_DATA_CODE => no_data += 1,
            None => unclassified += 1,
        }
    }
    if unclassified > 0 {
        warn!(unclassified, "points matched no Köppen-Geiger rule");
    }

    Ok(Classification {
        codes,
        counts,
        unclassified,
        no_data,
    })
}

/// Class of a single point; `None` when no rule applies or data is missing.
pub fn classify_point(point: PointStats) -> Option<KgClass> {
    let stats = ClimateStats::single(point);
    let leaves = leaf_masks(&stats);
    let codes = assemble(&leaves, &stats, stats.shape());
    KgClass::from_code(codes.data[0])
}

/// Run the cascade and return the 31 leaf masks in code order.
fn leaf_masks(stats: &ClimateStats) -> Vec<(KgClass, Mask)> {
    // ── E ────────────────────────────────────────────────────────────────────
    let et = polar::tundra(&stats.tmax);
    let ef = polar::ice_cap(&stats.tmax);
    let polar = et.or(&ef);

    // ── B ────────────────────────────────────────────────────────────────────
    let bs = arid::steppe(&stats.pann, &stats.pth, &polar);
    let bw = arid::desert(&stats.pann, &stats.pth, &polar);
    let be = polar.or(&bs).or(&bw);
    debug_assert!(polar.is_disjoint(&bs.or(&bw)), "arid mask overlaps polar");
    debug!(
        et = et.count(),
        ef = ef.count(),
        bs = bs.count(),
        bw = bw.count(),
        "polar and arid masks"
    );

    // ── A ────────────────────────────────────────────────────────────────────
    let a = tropical::tropical(stats, &be);

    // ── C / D ────────────────────────────────────────────────────────────────
    let c = dry_season(&temperate_base(&stats.tmin), stats, &be);
    let d = dry_season(&cold_base(&stats.tmin), stats, &be);
    debug!(
        tropical = a.af.count() + a.am.count() + a.as_.count() + a.aw.count(),
        temperate = c.s.count() + c.w.count() + c.f.count(),
        cold = d.s.count() + d.w.count() + d.f.count(),
        "major class masks"
    );

    // ── Subtypes ─────────────────────────────────────────────────────────────
    let (bsh, bsk) = arid_subtypes(&bs, &stats.tmean);
    let (bws, bwk) = arid_subtypes(&bw, &stats.tmean);

    let cs = thermal_subtypes(&c.s, stats);
    let cw = thermal_subtypes(&c.w, stats);
    let cf = thermal_subtypes(&c.f, stats);
    debug!(
        cool_temperate = cs.d.count() + cw.d.count() + cf.d.count(),
        "temperate points without a subtype"
    );

    let ds = thermal_subtypes(&d.s, stats);
    let dw = thermal_subtypes(&d.w, stats);
    let df = thermal_subtypes(&d.f, stats);

    vec![
        (KgClass::ET, et),
        (KgClass::EF, ef),
        (KgClass::BSh, bsh),
        (KgClass::BSk, bsk),
        (KgClass::BWs, bws),
        (KgClass::BWk, bwk),
        (KgClass::CSa, cs.a),
        (KgClass::CSb, cs.b),
        (KgClass::CSc, cs.c),
        (KgClass::CWa, cw.a),
        (KgClass::CWb, cw.b),
        (KgClass::CWc, cw.c),
        (KgClass::CFa, cf.a),
        (KgClass::CFb, cf.b),
        (KgClass::CFc, cf.c),
        (KgClass::DSa, ds.a),
        (KgClass::DSb, ds.b),
        (KgClass::DSc, ds.c),
        (KgClass::DSd, ds.d),
        (KgClass::DWa, dw.a),
        (KgClass::DWb, dw.b),
        (KgClass::DWc, dw.c),
        (KgClass::DWd, dw.d),
        (KgClass::DFa, df.a),
        (KgClass::DFb, df.b),
        (KgClass::DFc, df.c),
        (KgClass::DFd, df.d),
        (KgClass::AF, a.af),
        (KgClass::AM, a.am),
        (KgClass::AS, a.as_),
        (KgClass::AW, a.aw),
    ]
}

/// Collapse leaf masks into one code per point.
fn assemble(leaves: &[(KgClass, Mask)], stats: &ClimateStats, shape: Shape) -> Grid<u8> {
    Grid::from_fn(shape, |i| {
        if !stats.has_data(i) {
            return NO_DATA_CODE;
        }
        let mut hits = leaves.iter().filter(|(_, m)| m.get(i));
        let code = hits.next().map_or(UNCLASSIFIED_CODE, |(class, _)| class.code());
        debug_assert!(hits.next().is_none(), "point {i} claimed by more than one class");
        code
    })
}
