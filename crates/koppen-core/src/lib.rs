//! Köppen-Geiger climate classification of gridded monthly climate data.
//!
//! Pipeline:
//!   monthly series → climatology → derived statistics → rule cascade → codes.

pub mod calendar;
pub mod classify;
pub mod climatology;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod series;
pub mod stats;

pub use classify::{classify, Classification, KgClass, NO_DATA_CODE, UNCLASSIFIED_CODE};
pub use climatology::{monthly_climatology, rolling_climatology, Climatology};
pub use error::{KoppenError, Result};
pub use grid::{Grid, Shape};
pub use pipeline::{classify_rolling, classify_series, WindowClassification};
pub use series::ClimateSeries;
pub use stats::{ClimateStats, PointStats};
