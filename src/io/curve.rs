//! Read curve-set JSON files.
//!
//! A curve set is the hand-off format from the data layer: a list of named
//! curves whose points may use different units and different tenor notations.
//! Ingest is the only place the engine's preconditions are established:
//!
//! - values converted to percentage points
//! - tenors resolved to months (`"5Y"`, `18`, or a maturity date)
//! - points sorted ascending, duplicate tenors resolved later-wins
//!
//! Example:
//!
//! ```json
//! {
//!   "asof": "2025-01-02",
//!   "unit": "percent",
//!   "curves": [
//!     { "key": "ust", "label": "UST", "points": [{ "tenor": "3M", "value": 4.31 }] },
//!     { "key": "sofr", "unit": "bp", "points": [{ "maturity": "2030-01-02", "value": 395 }] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Curve, CurvePoint, NamedCurve, RESERVED_ROW_KEYS, RateUnit, TenorLabels, months_between};
use crate::error::{AppError, CurveError};

/// Raw curve-set file.
#[derive(Debug, Clone, Deserialize)]
pub struct CurveSetFile {
    /// Default as-of date for `maturity`-based points.
    #[serde(default)]
    pub asof: Option<NaiveDate>,
    /// Default unit for curve values.
    #[serde(default)]
    pub unit: RateUnit,
    /// Optional replacement for the default month -> label table.
    #[serde(default)]
    pub tenor_labels: Option<TenorLabels>,
    pub curves: Vec<CurveInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurveInput {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub unit: Option<RateUnit>,
    #[serde(default)]
    pub asof: Option<NaiveDate>,
    pub points: Vec<PointInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointInput {
    #[serde(default)]
    pub tenor: Option<TenorInput>,
    #[serde(default)]
    pub maturity: Option<NaiveDate>,
    pub value: f64,
}

/// Tenor as a month count or a label such as `"10Y"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TenorInput {
    Months(f64),
    Label(String),
}

fn default_visible() -> bool {
    true
}

/// A validated, normalized curve set.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub curves: Vec<NamedCurve>,
    pub labels: TenorLabels,
}

/// Read and normalize a curve-set JSON file.
///
/// `unit` replaces the file-level default unit; curves that declare their own
/// unit keep it.
pub fn read_curve_set(path: &Path, unit: Option<RateUnit>) -> Result<CurveSet, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read curve set '{}': {e}", path.display())))?;
    let mut file = parse_file(&text)?;
    if let Some(unit) = unit {
        file.unit = unit;
    }
    Ok(normalize(file)?)
}

/// Parse and normalize curve-set JSON text.
pub fn parse_curve_set(text: &str) -> Result<CurveSet, CurveError> {
    normalize(parse_file(text)?)
}

fn parse_file(text: &str) -> Result<CurveSetFile, CurveError> {
    serde_json::from_str(text).map_err(|e| CurveError::Json(e.to_string()))
}

/// Validate a parsed file and convert it into engine types.
pub fn normalize(file: CurveSetFile) -> Result<CurveSet, CurveError> {
    let labels = file.tenor_labels.unwrap_or_default();
    let mut seen = HashSet::new();
    let mut curves = Vec::with_capacity(file.curves.len());

    for (index, input) in file.curves.into_iter().enumerate() {
        let key = input.key.trim().to_string();
        if key.is_empty() {
            return Err(CurveError::EmptyKey { index });
        }
        if RESERVED_ROW_KEYS.contains(&key.as_str()) {
            return Err(CurveError::ReservedKey { key });
        }
        if !seen.insert(key.clone()) {
            return Err(CurveError::DuplicateKey { key });
        }

        let unit = input.unit.unwrap_or(file.unit);
        let asof = input.asof.or(file.asof);

        let mut points = Vec::with_capacity(input.points.len());
        for (i, p) in input.points.iter().enumerate() {
            if !p.value.is_finite() {
                return Err(CurveError::NonFiniteValue { key, index: i });
            }
            let tenor = resolve_tenor(&key, i, p, asof, &labels)?;
            points.push(CurvePoint::new(tenor, unit.to_percent(p.value)));
        }

        let raw_len = points.len();
        let curve = Curve::new(points);
        if curve.len() != raw_len {
            debug!(%key, dropped = raw_len - curve.len(), "collapsed duplicate tenors");
        }

        curves.push(NamedCurve {
            label: input.label.unwrap_or_else(|| key.clone()),
            key,
            color: input.color,
            points: curve,
            visible: input.visible,
        });
    }

    Ok(CurveSet { curves, labels })
}

fn resolve_tenor(
    key: &str,
    index: usize,
    point: &PointInput,
    asof: Option<NaiveDate>,
    labels: &TenorLabels,
) -> Result<f64, CurveError> {
    let months = match (&point.tenor, point.maturity) {
        (Some(TenorInput::Months(m)), None) => *m,
        (Some(TenorInput::Label(label)), None) => labels.parse(label).ok_or_else(|| CurveError::UnknownTenorLabel {
            key: key.to_string(),
            label: label.clone(),
        })?,
        (None, Some(maturity)) => {
            let asof = asof.ok_or_else(|| CurveError::MissingAsof {
                key: key.to_string(),
                index,
            })?;
            if maturity <= asof {
                return Err(CurveError::MaturedPoint {
                    key: key.to_string(),
                    index,
                    maturity,
                    asof,
                });
            }
            months_between(asof, maturity)
        }
        _ => {
            return Err(CurveError::AmbiguousTenor {
                key: key.to_string(),
                index,
            });
        }
    };

    if months.is_finite() && months > 0.0 {
        Ok(months)
    } else {
        Err(CurveError::InvalidTenor {
            key: key.to_string(),
            index,
            tenor: months,
        })
    }
}
