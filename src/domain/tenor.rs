//! Tenor labels and tenor arithmetic.
//!
//! The month -> label table (e.g. `12 -> "1Y"`) is static lookup data. It is
//! passed around as configuration so the engine never hard-codes a market's
//! standard grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Act/365.25 year length used to turn maturity dates into tenors.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// One entry of the label table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorLabel {
    pub months: f64,
    pub label: String,
}

/// Immutable, ascending month -> label mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TenorLabel>", into = "Vec<TenorLabel>")]
pub struct TenorLabels {
    entries: Vec<TenorLabel>,
}

impl TenorLabels {
    /// Build a table; entries are ordered by months and later duplicates win.
    pub fn new(mut entries: Vec<TenorLabel>) -> Self {
        entries.retain(|e| e.months.is_finite() && e.months > 0.0);
        entries.sort_by(|a, b| a.months.total_cmp(&b.months));

        let mut out: Vec<TenorLabel> = Vec::with_capacity(entries.len());
        for e in entries {
            match out.last_mut() {
                Some(last) if last.months == e.months => *last = e,
                _ => out.push(e),
            }
        }
        Self { entries: out }
    }

    pub fn entries(&self) -> &[TenorLabel] {
        &self.entries
    }

    /// The "standard" tenors, used as candidate tenor-axis ticks.
    pub fn standard_tenors(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.months).collect()
    }

    /// Display label for a tenor in months.
    ///
    /// Table entries win; otherwise whole years render as `<n>Y` and whole
    /// months as `<n>M`.
    pub fn label_for(&self, months: f64) -> String {
        if let Some(e) = self.entries.iter().find(|e| e.months == months) {
            return e.label.clone();
        }
        if months.fract() == 0.0 {
            if months % 12.0 == 0.0 {
                return format!("{}Y", months / 12.0);
            }
            return format!("{months}M");
        }
        format!("{months:.1}M")
    }

    /// Parse a tenor label into months.
    ///
    /// Accepts table labels (case-insensitive), `<n>M`, `<n>Y`, and plain
    /// month counts. Returns `None` for anything else or non-positive tenors.
    pub fn parse(&self, label: &str) -> Option<f64> {
        let s = label.trim();
        if let Some(e) = self.entries.iter().find(|e| e.label.eq_ignore_ascii_case(s)) {
            return Some(e.months);
        }

        let upper = s.to_ascii_uppercase();
        let months = if let Some(n) = upper.strip_suffix('Y') {
            n.trim().parse::<f64>().ok()? * 12.0
        } else if let Some(n) = upper.strip_suffix('M') {
            n.trim().parse::<f64>().ok()?
        } else {
            upper.parse::<f64>().ok()?
        };

        (months.is_finite() && months > 0.0).then_some(months)
    }
}

impl Default for TenorLabels {
    fn default() -> Self {
        const STANDARD: [(f64, &str); 12] = [
            (1.0, "1M"),
            (3.0, "3M"),
            (6.0, "6M"),
            (12.0, "1Y"),
            (24.0, "2Y"),
            (36.0, "3Y"),
            (60.0, "5Y"),
            (84.0, "7Y"),
            (120.0, "10Y"),
            (180.0, "15Y"),
            (240.0, "20Y"),
            (360.0, "30Y"),
        ];
        Self::new(
            STANDARD
                .iter()
                .map(|&(months, label)| TenorLabel {
                    months,
                    label: label.to_string(),
                })
                .collect(),
        )
    }
}

impl From<Vec<TenorLabel>> for TenorLabels {
    fn from(entries: Vec<TenorLabel>) -> Self {
        TenorLabels::new(entries)
    }
}

impl From<TenorLabels> for Vec<TenorLabel> {
    fn from(labels: TenorLabels) -> Self {
        labels.entries
    }
}

/// Months between an as-of date and a maturity date (Act/365.25).
pub fn months_between(asof: NaiveDate, maturity: NaiveDate) -> f64 {
    let days = (maturity - asof).num_days() as f64;
    days / DAYS_PER_YEAR * 12.0
}
