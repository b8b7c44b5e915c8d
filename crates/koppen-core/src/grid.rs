use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KoppenError, Result};

/// Spatial extent of a grid: `width` columns by `height` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
}

impl Shape {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of points in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// A 2D grid of per-point values, row-major.
///
/// Points are independent: every operation in this crate is a pointwise
/// function of the grids it reads, so the flat index is the only coordinate
/// that matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    /// Row-major values, length = `width × height`.
    pub data: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a grid filled with the given value.
    pub fn filled(width: usize, height: usize, fill: T) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer, checking it holds `width × height` values.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(KoppenError::LengthMismatch {
                what: "grid buffer",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, width, height })
    }

    /// Build a grid by evaluating `f` at every flat index.
    ///
    /// Runs on the rayon pool when the `threading` feature is enabled.
    pub fn from_fn<F>(shape: Shape, f: F) -> Self
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        Self {
            data: collect_indexed(shape.len(), f),
            width: shape.width,
            height: shape.height,
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fail with `ShapeMismatch` unless this grid has the `expected` shape.
    pub fn ensure_shape(&self, expected: Shape, what: &'static str) -> Result<()> {
        if self.shape() != expected {
            return Err(KoppenError::ShapeMismatch {
                what,
                expected,
                actual: self.shape(),
            });
        }
        Ok(())
    }
}

impl<T: Copy> Grid<T> {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: T) {
        self.data[row * self.width + col] = val;
    }

    /// Value at a flat row-major index.
    #[inline]
    pub fn at(&self, index: usize) -> T {
        self.data[index]
    }
}

impl Grid<f32> {
    /// Number of `NaN` points.
    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }
}

/// Evaluate `f` over `0..n` and collect the results in index order.
pub(crate) fn collect_indexed<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "threading")]
    {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(f).collect()
    }
    #[cfg(not(feature = "threading"))]
    {
        (0..n).map(f).collect()
    }
}
