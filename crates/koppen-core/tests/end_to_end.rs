//! Integration tests: monthly series for a handful of climate archetypes,
//! laid out on one grid and classified through the public API.

use koppen_core::calendar::monthly_axis;
use koppen_core::classify::classify_point;
use koppen_core::{
    classify, classify_rolling, classify_series, monthly_climatology, ClimateSeries, ClimateStats, Grid, KgClass,
    NO_DATA_CODE,
};

/// One year of monthly precipitation (mm), Tmax and Tmin (°C) at a point.
struct Archetype {
    prec: [f32; 12],
    tmax: [f32; 12],
    tmin: [f32; 12],
}

const HUMID_SUBTROPICAL: Archetype = Archetype {
    prec: [90.0, 85.0, 95.0, 100.0, 110.0, 120.0, 130.0, 125.0, 110.0, 95.0, 90.0, 95.0],
    tmax: [14.0, 16.0, 19.0, 23.0, 27.0, 30.0, 32.0, 31.0, 28.0, 23.0, 18.0, 15.0],
    tmin: [3.0, 4.0, 7.0, 11.0, 15.0, 19.0, 21.0, 21.0, 17.0, 11.0, 6.0, 4.0],
};

const HOT_DESERT: Archetype = Archetype {
    prec: [2.0; 12],
    tmax: [20.0, 22.0, 26.0, 30.0, 35.0, 39.0, 40.0, 40.0, 37.0, 31.0, 25.0, 21.0],
    tmin: [8.0, 10.0, 13.0, 17.0, 21.0, 25.0, 26.0, 26.0, 23.0, 18.0, 12.0, 9.0],
};

const TUNDRA: Archetype = Archetype {
    prec: [20.0; 12],
    tmax: [-20.0, -18.0, -12.0, -5.0, 2.0, 6.0, 8.0, 7.0, 3.0, -4.0, -12.0, -18.0],
    tmin: [-30.0, -28.0, -22.0, -14.0, -5.0, 0.0, 2.0, 1.0, -3.0, -10.0, -20.0, -27.0],
};

const BOREAL: Archetype = Archetype {
    prec: [40.0, 35.0, 40.0, 50.0, 60.0, 80.0, 90.0, 80.0, 60.0, 50.0, 45.0, 40.0],
    tmax: [-5.0, -3.0, 4.0, 12.0, 17.0, 20.0, 21.0, 20.0, 16.0, 10.0, 2.0, -3.0],
    tmin: [-15.0, -14.0, -7.0, 1.0, 7.0, 12.0, 15.0, 14.0, 8.0, 2.0, -5.0, -12.0],
};

const RAINFOREST: Archetype = Archetype {
    prec: [200.0; 12],
    tmax: [30.0; 12],
    tmin: [22.0; 12],
};

/// 3×2 grid, row-major:
///   humid subtropical | hot desert | tundra
///   boreal            | rainforest | humid subtropical with a gap
fn grid_series(years: usize) -> ClimateSeries {
    let points = [&HUMID_SUBTROPICAL, &HOT_DESERT, &TUNDRA, &BOREAL, &RAINFOREST, &HUMID_SUBTROPICAL];
    let n = years * 12;
    let slices = |pick: fn(&Archetype) -> &[f32; 12]| -> Vec<Grid<f32>> {
        (0..n)
            .map(|i| {
                let data = points.iter().map(|p| pick(*p)[i % 12]).collect();
                Grid::from_vec(3, 2, data).unwrap()
            })
            .collect()
    };

    let mut prec = slices(|a| &a.prec);
    prec[n - 1].set(1, 2, f32::NAN);
    ClimateSeries::new(
        monthly_axis(1981, 1, n).unwrap(),
        prec,
        slices(|a| &a.tmax),
        slices(|a| &a.tmin),
    )
    .unwrap()
}

#[test]
fn archetypes_get_their_classes() {
    let c = classify_series(&grid_series(3)).unwrap();
    assert_eq!(c.class_at(0, 0), Some(KgClass::CFa));
    assert_eq!(c.class_at(0, 1), Some(KgClass::BWs));
    assert_eq!(c.class_at(0, 2), Some(KgClass::ET));
    assert_eq!(c.class_at(1, 0), Some(KgClass::DFb));
    assert_eq!(c.class_at(1, 1), Some(KgClass::AF));
    assert_eq!(c.codes.get(1, 2), NO_DATA_CODE);

    assert_eq!(c.codes.data, vec![13, 5, 1, 25, 28, NO_DATA_CODE]);
    assert_eq!(c.classified(), 5);
    assert_eq!((c.unclassified, c.no_data), (0, 1));
}

#[test]
fn grid_matches_point_by_point() {
    let clim = monthly_climatology(&grid_series(2)).unwrap();
    let stats = ClimateStats::from_climatology(&clim).unwrap();
    let grid = classify(&stats).unwrap();
    for i in 0..stats.shape().len() {
        let expected = classify_point(stats.point(i)).map_or(NO_DATA_CODE, |k| k.code());
        assert_eq!(grid.codes.data[i], expected, "point {i}");
    }
}

#[test]
fn window_spanning_series_matches_whole_series() {
    let series = grid_series(4);
    let whole = classify_series(&series).unwrap();
    let windows = classify_rolling(&series, 4).unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!((windows[0].start_year, windows[0].end_year), (1981, 1984));
    assert_eq!(windows[0].classification, whole);
}

#[test]
fn gap_only_affects_windows_containing_it() {
    // The gap sits in the last month, so only the last window sees it.
    let windows = classify_rolling(&grid_series(4), 2).unwrap();
    assert_eq!(windows.len(), 3);
    for w in &windows[..2] {
        assert_eq!(w.classification.class_at(1, 2), Some(KgClass::CFa));
        assert_eq!(w.classification.no_data, 0);
    }
    assert_eq!(windows[2].classification.codes.get(1, 2), NO_DATA_CODE);
}

#[test]
fn classification_serializes_to_json() {
    let c = classify_series(&grid_series(1)).unwrap();
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["codes"]["width"], 3);
    assert_eq!(json["codes"]["height"], 2);
    assert_eq!(json["counts"]["DFb"], 1);
    assert_eq!(json["no_data"], 1);
}
