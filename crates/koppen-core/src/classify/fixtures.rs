//! Reference points shared by the cascade tests.

use crate::stats::PointStats;

/// Humid temperate point: Pth = 54, no dry season, Tmax ≥ 22 → CFa.
pub fn humid_temperate() -> PointStats {
    PointStats {
        tmax: 25.0,
        tmin: 15.0,
        tmean: 20.0,
        pann: 1200.0,
        pmin: 80.0,
        pssum: 700.0,
        pwsum: 500.0,
        psmin: 40.0,
        pwmin: 90.0,
        psmax: 300.0,
        pwmax: 250.0,
        warmsum: 12,
    }
}

/// Wet tropical point: Pth = 64, driest month 70 mm → AF.
pub fn tropical_wet() -> PointStats {
    PointStats {
        tmax: 30.0,
        tmin: 20.0,
        tmean: 25.0,
        pann: 2500.0,
        pmin: 70.0,
        pssum: 1400.0,
        pwsum: 1100.0,
        psmin: 150.0,
        pwmin: 70.0,
        psmax: 300.0,
        pwmax: 250.0,
        warmsum: 12,
    }
}

/// Cold continental point with no dry season: Tmin −20, Tmax 16, 5 warm months → DFb.
pub fn cold_continental() -> PointStats {
    PointStats {
        tmax: 16.0,
        tmin: -20.0,
        tmean: -2.0,
        pann: 600.0,
        pmin: 30.0,
        pssum: 380.0,
        pwsum: 220.0,
        psmin: 45.0,
        pwmin: 30.0,
        psmax: 90.0,
        pwmax: 50.0,
        warmsum: 5,
    }
}
