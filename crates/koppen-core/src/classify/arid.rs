//! Arid group B, decided by annual precipitation against `Pth`.
//!   - BS (steppe):  5·Pth < Pann < 10·Pth
//!   - BW (desert):  Pann ≤ 5·Pth
//!
//! Points already polar stay polar: the arid masks exclude ET ∪ EF so the
//! combined B/E exclusion mask is a disjoint union.

use crate::grid::Grid;

use super::mask::Mask;

/// Desert/steppe boundary as a multiple of `Pth`.
pub const DESERT_FACTOR: f32 = 5.0;

/// Steppe/humid boundary as a multiple of `Pth`.
pub const STEPPE_FACTOR: f32 = 10.0;

pub fn steppe(pann: &Grid<f32>, pth: &Grid<f32>, polar: &Mask) -> Mask {
    Mask::from_fn(pann.shape(), |i| {
        let (p, th) = (pann.data[i], pth.data[i]);
        DESERT_FACTOR * th < p && p < STEPPE_FACTOR * th && !polar.get(i)
    })
}

pub fn desert(pann: &Grid<f32>, pth: &Grid<f32>, polar: &Mask) -> Mask {
    Mask::from_fn(pann.shape(), |i| {
        pann.data[i] <= DESERT_FACTOR * pth.data[i] && !polar.get(i)
    })
}
