use crate::grid::{collect_indexed, Grid, Shape};

/// Boolean membership grid for one class or class family.
///
/// Class exclusion is plain set difference (`and_not`), so masks stay
/// boolean at every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    bits: Vec<bool>,
    shape: Shape,
}

impl Mask {
    pub fn empty(shape: Shape) -> Self {
        Self {
            bits: vec![false; shape.len()],
            shape,
        }
    }

    pub fn from_fn<F>(shape: Shape, f: F) -> Self
    where
        F: Fn(usize) -> bool + Sync + Send,
    {
        Self {
            bits: collect_indexed(shape.len(), f),
            shape,
        }
    }

    /// Mask of the points of `grid` satisfying `pred`.
    pub fn select<T, P>(grid: &Grid<T>, pred: P) -> Self
    where
        T: Copy + Sync,
        P: Fn(T) -> bool + Sync + Send,
    {
        Self::from_fn(grid.shape(), |i| pred(grid.data[i]))
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn or(&self, other: &Mask) -> Mask {
        self.combine(other, |a, b| a || b)
    }

    /// Points in `self` but not in `other`.
    pub fn and_not(&self, other: &Mask) -> Mask {
        self.combine(other, |a, b| a && !b)
    }

    /// Points in `self` where `pred(i)` also holds.
    pub fn filter<F>(&self, pred: F) -> Mask
    where
        F: Fn(usize) -> bool + Sync + Send,
    {
        Mask::from_fn(self.shape, |i| self.bits[i] && pred(i))
    }

    /// `true` if no point is in both masks.
    pub fn is_disjoint(&self, other: &Mask) -> bool {
        self.bits.iter().zip(&other.bits).all(|(&a, &b)| !(a && b))
    }

    fn combine(&self, other: &Mask, op: fn(bool, bool) -> bool) -> Mask {
        debug_assert_eq!(self.shape, other.shape, "mask shapes differ");
        Mask::from_fn(self.shape, |i| op(self.bits[i], other.bits[i]))
    }
}
