//! Shared domain types.
//!
//! Everything here is transient: rebuilt on every run from the input curves and
//! the visibility toggles. The serializable types double as the JSON export
//! schema consumed by charting front-ends.

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::tenor::TenorLabels;

/// A single sample of a tenor/rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Months to maturity (finite, > 0).
    #[serde(rename = "tenorMonths")]
    pub tenor_months: f64,
    /// Value in percentage points (any sign).
    pub value: f64,
}

impl CurvePoint {
    pub fn new(tenor_months: f64, value: f64) -> Self {
        Self { tenor_months, value }
    }
}

/// An ordered, duplicate-free sequence of curve points.
///
/// Construction sorts ascending by tenor (stable) and collapses duplicate
/// tenors so that the later point in input order wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn new(mut points: Vec<CurvePoint>) -> Self {
        points.sort_by(|a, b| a.tenor_months.total_cmp(&b.tenor_months));

        let mut out: Vec<CurvePoint> = Vec::with_capacity(points.len());
        for p in points {
            match out.last_mut() {
                Some(last) if last.tenor_months == p.tenor_months => *last = p,
                _ => out.push(p),
            }
        }
        Self { points: out }
    }

    /// Build a curve from `(tenor_months, value)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(t, v)| CurvePoint::new(t, v)).collect())
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_tenor(&self) -> Option<f64> {
        self.points.first().map(|p| p.tenor_months)
    }

    pub fn last_tenor(&self) -> Option<f64> {
        self.points.last().map(|p| p.tenor_months)
    }

    pub fn tenors(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.tenor_months)
    }
}

impl From<Vec<CurvePoint>> for Curve {
    fn from(points: Vec<CurvePoint>) -> Self {
        Curve::new(points)
    }
}

impl From<Curve> for Vec<CurvePoint> {
    fn from(curve: Curve) -> Self {
        curve.points
    }
}

/// A curve plus the display metadata the UI layer attaches to it.
///
/// Identity is `key`; at most one curve per key takes part in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCurve {
    pub key: String,
    pub label: String,
    pub color: String,
    pub points: Curve,
    pub visible: bool,
}

impl NamedCurve {
    pub fn new(key: impl Into<String>, label: impl Into<String>, points: Curve) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: String::new(),
            points,
            visible: true,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Column names a `MergedRow` uses for its own fields; curve keys may not reuse them.
pub const RESERVED_ROW_KEYS: [&str; 2] = ["tenorMonths", "spreadBps"];

/// One chart row per distinct tenor across the visible curves.
///
/// `values` only ever holds exact samples; interpolated quantities live in
/// `spread_bps`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    #[serde(rename = "tenorMonths")]
    pub tenor_months: f64,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
    #[serde(rename = "spreadBps", skip_serializing_if = "Option::is_none")]
    pub spread_bps: Option<i64>,
}

impl MergedRow {
    pub fn new(tenor_months: f64) -> Self {
        Self {
            tenor_months,
            values: BTreeMap::new(),
            spread_bps: None,
        }
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// A single spread observation in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpreadRow {
    #[serde(rename = "tenorMonths")]
    pub tenor_months: f64,
    #[serde(rename = "spreadBps")]
    pub spread_bps: i64,
}

/// Raw output of the spread calculator for one ordered pair of curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadCalc {
    pub rows: Vec<SpreadRow>,
    #[serde(rename = "overlapValid")]
    pub overlap_valid: bool,
}

impl SpreadCalc {
    pub fn no_overlap() -> Self {
        Self {
            rows: Vec::new(),
            overlap_valid: false,
        }
    }
}

/// The merged rows enriched with the spread of the two visible curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadResult {
    /// `"{a.label} - {b.label}"`.
    pub label: String,
    pub rows: Vec<MergedRow>,
}

/// Why (or whether) a spread series is available for the current toggle set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpreadOutcome {
    /// Spread needs exactly two visible curves.
    NotApplicable { visible: usize },
    /// Two curves are visible but their tenor ranges do not overlap.
    NoOverlap { label: String },
    Ready(SpreadResult),
}

impl SpreadOutcome {
    pub fn result(&self) -> Option<&SpreadResult> {
        match self {
            SpreadOutcome::Ready(r) => Some(r),
            _ => None,
        }
    }
}

/// Render-ready bounds and ticks for both chart axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisPlan {
    #[serde(rename = "valueMin")]
    pub value_min: f64,
    #[serde(rename = "valueMax")]
    pub value_max: f64,
    #[serde(rename = "valueTicks")]
    pub value_ticks: Vec<f64>,
    #[serde(rename = "tenorMin")]
    pub tenor_min: f64,
    #[serde(rename = "tenorMax")]
    pub tenor_max: f64,
    #[serde(rename = "tenorTicks")]
    pub tenor_ticks: Vec<f64>,
}

/// Axis planning result; `NoData` is a valid terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AxisOutcome {
    NoData,
    Ready(AxisPlan),
}

impl AxisOutcome {
    pub fn plan(&self) -> Option<&AxisPlan> {
        match self {
            AxisOutcome::Ready(p) => Some(p),
            AxisOutcome::NoData => None,
        }
    }
}

/// Unit of the values supplied for a curve.
///
/// The engine works in percentage points; ingest converts everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RateUnit {
    /// Percentage points, e.g. `4.25` for 4.25%.
    #[default]
    Percent,
    /// Decimal rates, e.g. `0.0425`; converted via `× 100`.
    Decimal,
    /// Basis points, e.g. `425`; converted via `÷ 100`.
    Bp,
}

impl RateUnit {
    pub fn to_percent(self, value: f64) -> f64 {
        match self {
            RateUnit::Percent => value,
            RateUnit::Decimal => value * 100.0,
            RateUnit::Bp => value / 100.0,
        }
    }
}

/// Run configuration understood by the chart pipeline.
///
/// Derived from CLI flags plus the optional label table of the curve set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartConfig {
    /// Month -> label table; its months are the standard tenor-axis ticks.
    pub labels: TenorLabels,
    /// Curve keys forced visible before the run.
    pub show: Vec<String>,
    /// Curve keys forced hidden before the run (applied after `show`).
    pub hide: Vec<String>,
}
