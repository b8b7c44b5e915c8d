//! Köppen-Geiger classification of a gridded monthly climate series.
//!
//! Reads aligned precipitation / Tmax / Tmin slices from JSON, averages them
//! into one climatology (or one per rolling window), classifies every point
//! and writes the code grids as JSON.

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use koppen_core::calendar::monthly_axis;
use koppen_core::{classify_rolling, classify_series, Classification, ClimateSeries, Grid, KgClass};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "classifier", about = "Assign Köppen-Geiger classes to a gridded monthly climate series")]
struct Args {
    /// Input series JSON.
    #[arg(short, long)]
    input: PathBuf,

    /// Output codes JSON.
    #[arg(short, long, default_value = "data/codes.json")]
    output: PathBuf,

    /// Classify rolling windows of this many years instead of the whole series.
    #[arg(short, long)]
    window_years: Option<usize>,

    /// Run configuration JSON. Flags given on the command line take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
struct RunConfig {
    /// `None` averages the whole series into one climatology.
    window_years: Option<usize>,
    pretty: bool,
    /// Write per-class point counts next to each code grid.
    include_counts: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            window_years: None,
            pretty: false,
            include_counts: true,
        }
    }
}

impl RunConfig {
    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    fn with_args(mut self, args: &Args) -> Self {
        if args.window_years.is_some() {
            self.window_years = args.window_years;
        }
        if args.pretty {
            self.pretty = true;
        }
        self
    }
}

// ── Serde helpers ─────────────────────────────────────────────────────────────

fn null_as_nan_slices<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> std::result::Result<Vec<Vec<f32>>, D::Error> {
    let v: Vec<Vec<Option<f32>>> = Vec::deserialize(d)?;
    Ok(v.into_iter()
        .map(|slice| slice.into_iter().map(|x| x.unwrap_or(f32::NAN)).collect())
        .collect())
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Monthly series as stored on disk. Every slice is a row-major
/// `width × height` array; `null` marks a missing value.
#[derive(Deserialize)]
struct SeriesFile {
    width: usize,
    height: usize,
    /// One date per slice.
    time: Option<Vec<NaiveDate>>,
    /// First month as `YYYY-MM`, used when `time` is absent.
    start: Option<String>,
    #[serde(deserialize_with = "null_as_nan_slices")]
    precipitation: Vec<Vec<f32>>,
    #[serde(deserialize_with = "null_as_nan_slices")]
    tmax: Vec<Vec<f32>>,
    #[serde(deserialize_with = "null_as_nan_slices")]
    tmin: Vec<Vec<f32>>,
}

impl SeriesFile {
    fn time_axis(&self) -> Result<Vec<NaiveDate>> {
        match (&self.time, &self.start) {
            (Some(time), _) => Ok(time.clone()),
            (None, Some(start)) => {
                let (year, month) = parse_year_month(start)?;
                Ok(monthly_axis(year, month, self.precipitation.len())?)
            }
            (None, None) => bail!("series needs either `time` or `start`"),
        }
    }

    fn into_series(self) -> Result<ClimateSeries> {
        let time = self.time_axis()?;
        let (w, h) = (self.width, self.height);
        let grids = |what: &str, slices: Vec<Vec<f32>>| -> Result<Vec<Grid<f32>>> {
            slices
                .into_iter()
                .enumerate()
                .map(|(i, data)| {
                    Grid::from_vec(w, h, data).with_context(|| format!("{what} slice {i}"))
                })
                .collect()
        };
        let precipitation = grids("precipitation", self.precipitation)?;
        let tmax = grids("tmax", self.tmax)?;
        let tmin = grids("tmin", self.tmin)?;
        Ok(ClimateSeries::new(time, precipitation, tmax, tmin)?)
    }
}

fn parse_year_month(s: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid start month `{s}`, expected YYYY-MM"))?;
    Ok((date.year(), date.month()))
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CodesFile {
    width: usize,
    height: usize,
    /// Code → class label for codes 1–31.
    legend: BTreeMap<u8, &'static str>,
    windows: Vec<WindowCodes>,
}

#[derive(Debug, Serialize)]
struct WindowCodes {
    start_year: i32,
    end_year: i32,
    codes: Vec<u8>,
    /// Most frequent class in the window.
    dominant: Option<KgClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<BTreeMap<KgClass, usize>>,
    unclassified: usize,
    no_data: usize,
}

impl WindowCodes {
    fn new(start_year: i32, end_year: i32, c: Classification, include_counts: bool) -> Self {
        let dominant = c.dominant();
        info!(start_year, end_year, dominant = dominant.map(KgClass::label), "classified window");
        Self {
            start_year,
            end_year,
            dominant,
            codes: c.codes.data,
            counts: include_counts.then_some(c.counts),
            unclassified: c.unclassified,
            no_data: c.no_data,
        }
    }
}

fn legend() -> BTreeMap<u8, &'static str> {
    KgClass::ALL.iter().map(|c| (c.code(), c.label())).collect()
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run(series: &ClimateSeries, config: &RunConfig) -> Result<Vec<WindowCodes>> {
    match config.window_years {
        None => {
            let c = classify_series(series)?;
            Ok(vec![WindowCodes::new(
                series.first_year(),
                series.last_year(),
                c,
                config.include_counts,
            )])
        }
        Some(years) => Ok(classify_rolling(series, years)?
            .into_iter()
            .map(|w| WindowCodes::new(w.start_year, w.end_year, w.classification, config.include_counts))
            .collect()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    }
    .with_args(&args);

    info!(input = %args.input.display(), "reading series");
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let file: SeriesFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    let (width, height) = (file.width, file.height);
    let series = file.into_series()?;

    let windows = run(&series, &config)?;
    let no_data: usize = windows.iter().map(|w| w.no_data).sum();
    if no_data > 0 {
        warn!(no_data, "points with missing data were coded {}", koppen_core::NO_DATA_CODE);
    }

    let out = CodesFile {
        width,
        height,
        legend: legend(),
        windows,
    };
    let json = if config.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    if let Some(dir) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(output = %args.output.display(), windows = out.windows.len(), "wrote codes");
    Ok(())
}
