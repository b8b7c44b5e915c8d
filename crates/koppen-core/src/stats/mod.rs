//! Derived per-point climate statistics consumed by the classifier.
//!
//! Built from a [`Climatology`]:
//!   annual extrema → seasonal precipitation → `Pth` → warm-month count.

pub mod seasonal;
pub mod threshold;
pub mod warm_months;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::Season;
use crate::climatology::Climatology;
use crate::error::Result;
use crate::grid::{Grid, Shape};

use seasonal::{max_of, min_of, sum_of};
use threshold::{precipitation_threshold, threshold_at};
use warm_months::warm_month_count;

/// The scalar grids the classification cascade reads. All share one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateStats {
    /// Warmest monthly-mean maximum temperature (°C).
    pub tmax: Grid<f32>,
    /// Coldest monthly-mean minimum temperature (°C).
    pub tmin: Grid<f32>,
    /// `(tmax + tmin) / 2`.
    pub tmean: Grid<f32>,
    /// Annual precipitation (mm).
    pub pann: Grid<f32>,
    /// Driest month precipitation (mm).
    pub pmin: Grid<f32>,
    /// Summer-half (Apr–Sep) total.
    pub pssum: Grid<f32>,
    /// Winter-half (Oct–Mar) total.
    pub pwsum: Grid<f32>,
    pub psmin: Grid<f32>,
    pub pwmin: Grid<f32>,
    pub psmax: Grid<f32>,
    pub pwmax: Grid<f32>,
    /// Aridity threshold, see [`threshold`].
    pub pth: Grid<f32>,
    /// Warm months per year, 0–12.
    pub warmsum: Grid<u8>,
}

/// The statistics of a single point, without `Pth` (derived on conversion).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStats {
    pub tmax: f32,
    pub tmin: f32,
    pub tmean: f32,
    pub pann: f32,
    pub pmin: f32,
    pub pssum: f32,
    pub pwsum: f32,
    pub psmin: f32,
    pub pwmin: f32,
    pub psmax: f32,
    pub pwmax: f32,
    pub warmsum: u8,
}

impl PointStats {
    /// Aridity threshold for this point.
    pub fn pth(&self) -> f32 {
        threshold_at(self.tmean, self.pann, self.pwsum, self.pssum)
    }
}

impl ClimateStats {
    /// Reduce a climatology to the per-point statistics.
    pub fn from_climatology(clim: &Climatology) -> Result<Self> {
        let shape = clim.shape();

        let tmax_refs: Vec<&Grid<f32>> = clim.tmax.iter().collect();
        let tmin_refs: Vec<&Grid<f32>> = clim.tmin.iter().collect();
        let prec_refs: Vec<&Grid<f32>> = clim.precipitation.iter().collect();

        let mut summer: Vec<&Grid<f32>> = Vec::with_capacity(6);
        let mut winter: Vec<&Grid<f32>> = Vec::with_capacity(6);
        for (i, g) in clim.precipitation.iter().enumerate() {
            match Season::of(Climatology::month_of(i))? {
                Season::Summer => summer.push(g),
                Season::Winter => winter.push(g),
            }
        }

        let tmax = max_of(&tmax_refs, shape);
        let tmin = min_of(&tmin_refs, shape);
        let tmean = Grid::from_fn(shape, |i| 0.5 * (tmax.data[i] + tmin.data[i]));

        let pann = sum_of(&prec_refs, shape);
        let pmin = min_of(&prec_refs, shape);
        let pssum = sum_of(&summer, shape);
        let pwsum = sum_of(&winter, shape);
        let psmin = min_of(&summer, shape);
        let pwmin = min_of(&winter, shape);
        let psmax = max_of(&summer, shape);
        let pwmax = max_of(&winter, shape);

        let pth = precipitation_threshold(&tmean, &pann, &pwsum, &pssum)?;
        let warmsum = warm_month_count(&clim.stamps()?, &clim.tmax, &clim.tmin, shape)?;

        debug!(
            width = shape.width,
            height = shape.height,
            nan_points = tmean.nan_count(),
            "derived climate statistics"
        );

        Ok(Self {
            tmax,
            tmin,
            tmean,
            pann,
            pmin,
            pssum,
            pwsum,
            psmin,
            pwmin,
            psmax,
            pwmax,
            pth,
            warmsum,
        })
    }

    /// Lay out point statistics row-major on a `width × height` grid.
    pub fn from_points(width: usize, height: usize, points: &[PointStats]) -> Result<Self> {
        let field = |f: fn(&PointStats) -> f32| -> Result<Grid<f32>> {
            Grid::from_vec(width, height, points.iter().map(f).collect())
        };
        Ok(Self {
            tmax: field(|p| p.tmax)?,
            tmin: field(|p| p.tmin)?,
            tmean: field(|p| p.tmean)?,
            pann: field(|p| p.pann)?,
            pmin: field(|p| p.pmin)?,
            pssum: field(|p| p.pssum)?,
            pwsum: field(|p| p.pwsum)?,
            psmin: field(|p| p.psmin)?,
            pwmin: field(|p| p.pwmin)?,
            psmax: field(|p| p.psmax)?,
            pwmax: field(|p| p.pwmax)?,
            pth: field(PointStats::pth)?,
            warmsum: Grid::from_vec(width, height, points.iter().map(|p| p.warmsum).collect())?,
        })
    }

    /// A 1×1 grid holding `point`.
    pub fn single(point: PointStats) -> Self {
        let g = |v: f32| Grid::filled(1, 1, v);
        Self {
            tmax: g(point.tmax),
            tmin: g(point.tmin),
            tmean: g(point.tmean),
            pann: g(point.pann),
            pmin: g(point.pmin),
            pssum: g(point.pssum),
            pwsum: g(point.pwsum),
            psmin: g(point.psmin),
            pwmin: g(point.pwmin),
            psmax: g(point.psmax),
            pwmax: g(point.pwmax),
            pth: g(point.pth()),
            warmsum: Grid::filled(1, 1, point.warmsum),
        }
    }

    /// Statistics at flat index `i`.
    pub fn point(&self, i: usize) -> PointStats {
        PointStats {
            tmax: self.tmax.at(i),
            tmin: self.tmin.at(i),
            tmean: self.tmean.at(i),
            pann: self.pann.at(i),
            pmin: self.pmin.at(i),
            pssum: self.pssum.at(i),
            pwsum: self.pwsum.at(i),
            psmin: self.psmin.at(i),
            pwmin: self.pwmin.at(i),
            psmax: self.psmax.at(i),
            pwmax: self.pwmax.at(i),
            warmsum: self.warmsum.at(i),
        }
    }

    pub fn shape(&self) -> Shape {
        self.tmax.shape()
    }

    /// Check every grid has the shape of `tmax`; returns that shape.
    pub fn validate(&self) -> Result<Shape> {
        let shape = self.shape();
        for (what, g) in self.float_fields() {
            g.ensure_shape(shape, what)?;
        }
        self.warmsum.ensure_shape(shape, "warmsum")?;
        Ok(shape)
    }

    /// `true` where no statistic is `NaN`.
    pub fn has_data(&self, i: usize) -> bool {
        self.float_fields().iter().all(|(_, g)| !g.data[i].is_nan())
    }

    fn float_fields(&self) -> [(&'static str, &Grid<f32>); 12] {
        [
            ("tmax", &self.tmax),
            ("tmin", &self.tmin),
            ("tmean", &self.tmean),
            ("pann", &self.pann),
            ("pmin", &self.pmin),
            ("pssum", &self.pssum),
            ("pwsum", &self.pwsum),
            ("psmin", &self.psmin),
            ("pwmin", &self.pwmin),
            ("psmax", &self.psmax),
            ("pwmax", &self.pwmax),
            ("pth", &self.pth),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::monthly_axis;
    use crate::climatology::monthly_climatology;
    use crate::error::KoppenError;
    use crate::series::ClimateSeries;
    use approx::assert_abs_diff_eq;

    /// One year, one point, Jan..Dec values.
    fn climatology(prec: [f32; 12], tmax: [f32; 12], tmin: [f32; 12]) -> Climatology {
        let grids = |v: [f32; 12]| v.iter().map(|&x| Grid::filled(1, 1, x)).collect::<Vec<_>>();
        let s = ClimateSeries::new(monthly_axis(2010, 1, 12).unwrap(), grids(prec), grids(tmax), grids(tmin))
            .unwrap();
        monthly_climatology(&s).unwrap()
    }

    #[test]
    fn reductions_split_half_years() {
        let prec = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0];
        let tmax = [5.0, 6.0, 9.0, 14.0, 19.0, 24.0, 27.0, 26.0, 21.0, 15.0, 9.0, 6.0];
        let tmin = [-4.0, -3.0, 0.0, 4.0, 8.0, 12.0, 15.0, 14.0, 10.0, 6.0, 1.0, -2.0];
        let s = ClimateStats::from_climatology(&climatology(prec, tmax, tmin)).unwrap();
        let p = s.point(0);

        assert_eq!(p.tmax, 27.0);
        assert_eq!(p.tmin, -4.0);
        assert_abs_diff_eq!(p.tmean, 11.5);
        assert_abs_diff_eq!(p.pann, 780.0);
        assert_eq!(p.pmin, 10.0);
        // Summer Apr–Sep: 40..90.
        assert_abs_diff_eq!(p.pssum, 390.0);
        assert_eq!((p.psmin, p.psmax), (40.0, 90.0));
        // Winter Jan–Mar, Oct–Dec.
        assert_abs_diff_eq!(p.pwsum, 390.0);
        assert_eq!((p.pwmin, p.pwmax), (10.0, 120.0));
        // Midpoints ≥ 10: May 13.5, Jun 18, Jul 21, Aug 20, Sep 15.5, Oct 10.5.
        assert_eq!(p.warmsum, 6);
        // Neither half-year holds > 520 mm → 2·11.5 + 14.
        assert_abs_diff_eq!(s.pth.data[0], 37.0);
    }

    #[test]
    fn single_point_roundtrips_through_grid() {
        let p = PointStats {
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
        };
        let s = ClimateStats::single(p);
        assert_eq!(s.point(0), p);
        assert_eq!(s.pth.data[0], 54.0);
        assert_eq!(s.validate().unwrap(), Shape::new(1, 1));
    }

    #[test]
    fn from_points_checks_count() {
        let p = ClimateStats::single(PointStats {
            tmax: 1.0,
            tmin: 0.0,
            tmean: 0.5,
            pann: 100.0,
            pmin: 1.0,
            pssum: 50.0,
            pwsum: 50.0,
            psmin: 1.0,
            pwmin: 1.0,
            psmax: 20.0,
            pwmax: 20.0,
            warmsum: 0,
        })
        .point(0);
        assert!(ClimateStats::from_points(2, 1, &[p, p]).is_ok());
        assert!(matches!(
            ClimateStats::from_points(2, 2, &[p, p]),
            Err(KoppenError::LengthMismatch { expected: 4, actual: 2, .. })
        ));
    }

    #[test]
    fn nan_month_marks_point_without_data() {
        let mut prec = [50.0; 12];
        prec[3] = f32::NAN;
        let s = ClimateStats::from_climatology(&climatology(prec, [20.0; 12], [10.0; 12])).unwrap();
        assert!(!s.has_data(0));
        assert!(s.pann.data[0].is_nan());
    }

    #[test]
    fn validate_flags_mismatched_field() {
        let mut s = ClimateStats::from_climatology(&climatology([50.0; 12], [20.0; 12], [10.0; 12])).unwrap();
        assert!(s.has_data(0));
        s.psmax = Grid::filled(2, 1, 1.0);
        assert!(matches!(
            s.validate(),
            Err(KoppenError::ShapeMismatch { what: "psmax", .. })
        ));
    }
}
