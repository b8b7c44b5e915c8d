//! Polar group E: warmest month below 10 °C.
//!   - ET (tundra):    0 ≤ Tmax < 10
//!   - EF (ice cap):   Tmax < 0

use crate::grid::Grid;

use super::mask::Mask;

/// Warmest-month ceiling of the polar group (°C).
pub const POLAR_TMAX_C: f32 = 10.0;

/// Warmest-month ceiling of EF (°C).
pub const ICE_CAP_TMAX_C: f32 = 0.0;

pub fn tundra(tmax: &Grid<f32>) -> Mask {
    Mask::select(tmax, |t| ICE_CAP_TMAX_C <= t && t < POLAR_TMAX_C)
}

pub fn ice_cap(tmax: &Grid<f32>) -> Mask {
    Mask::select(tmax, |t| t < ICE_CAP_TMAX_C)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmax(values: &[f32]) -> Grid<f32> {
        Grid::from_vec(values.len(), 1, values.to_vec()).unwrap()
    }

    /// Tmax = 0 is tundra, not ice cap.
    #[test]
    fn zero_is_tundra() {
        let t = tmax(&[0.0]);
        assert!(tundra(&t).get(0));
        assert!(!ice_cap(&t).get(0));
    }

    /// Tmax = 10 leaves the polar group.
    #[test]
    fn ten_is_not_polar() {
        let t = tmax(&[10.0]);
        assert!(!tundra(&t).get(0));
        assert!(!ice_cap(&t).get(0));
    }

    #[test]
    fn tundra_and_ice_cap_are_disjoint() {
        let t = tmax(&[-20.0, -0.1, 0.0, 5.0, 9.99, 10.0, 30.0, f32::NAN]);
        let et = tundra(&t);
        let ef = ice_cap(&t);
        assert!(et.is_disjoint(&ef));
        assert_eq!(et.count(), 3);
        assert_eq!(ef.count(), 2);
        assert!(!et.get(7) && !ef.get(7), "NaN must not be polar");
    }
}
