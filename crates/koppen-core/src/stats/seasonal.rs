//! Pointwise reductions over sets of monthly slices.
//!
//! Unlike `f32::max`/`f32::min`, these never skip `NaN`: a single `NaN`
//! month makes the reduced value `NaN`, so incomplete points surface as
//! no-data instead of being classified from partial records.

use crate::grid::{Grid, Shape};

#[inline]
fn nan_max(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.max(b)
    }
}

#[inline]
fn nan_min(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.min(b)
    }
}

fn reduce(slices: &[&Grid<f32>], shape: Shape, init: f32, op: fn(f32, f32) -> f32) -> Grid<f32> {
    Grid::from_fn(shape, |p| slices.iter().fold(init, |acc, g| op(acc, g.data[p])))
}

/// Pointwise maximum. An empty slice set yields `NaN`.
pub fn max_of(slices: &[&Grid<f32>], shape: Shape) -> Grid<f32> {
    if slices.is_empty() {
        return Grid::filled(shape.width, shape.height, f32::NAN);
    }
    reduce(slices, shape, f32::NEG_INFINITY, nan_max)
}

/// Pointwise minimum. An empty slice set yields `NaN`.
pub fn min_of(slices: &[&Grid<f32>], shape: Shape) -> Grid<f32> {
    if slices.is_empty() {
        return Grid::filled(shape.width, shape.height, f32::NAN);
    }
    reduce(slices, shape, f32::INFINITY, nan_min)
}

/// Pointwise sum.
pub fn sum_of(slices: &[&Grid<f32>], shape: Shape) -> Grid<f32> {
    reduce(slices, shape, 0.0, |a, b| a + b)
}
