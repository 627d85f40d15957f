//! Write chart-run JSON.
//!
//! The export is what a charting surface consumes: curve metadata (including
//! the caller-assigned colors), merged rows, spread status, and axis plan.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::app::pipeline::ChartRun;
use crate::domain::{AxisOutcome, MergedRow, SpreadOutcome, TenorLabels};
use crate::error::AppError;

/// Exported chart file.
#[derive(Debug, Clone, Serialize)]
pub struct ChartFile<'a> {
    pub tool: &'static str,
    pub curves: Vec<CurveMeta<'a>>,
    pub rows: &'a [MergedRow],
    pub spread: SpreadMeta<'a>,
    pub axes: &'a AxisOutcome,
    #[serde(rename = "tenorTickLabels")]
    pub tenor_tick_labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveMeta<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub color: &'a str,
    pub visible: bool,
    pub points: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpreadMeta<'a> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

/// Build the export view of a run.
pub fn chart_file<'a>(run: &'a ChartRun, labels: &TenorLabels) -> ChartFile<'a> {
    let curves = run
        .curves
        .iter()
        .map(|c| CurveMeta {
            key: &c.key,
            label: &c.label,
            color: &c.color,
            visible: c.visible,
            points: c.points.len(),
        })
        .collect();

    let spread = match &run.spread {
        SpreadOutcome::NotApplicable { .. } => SpreadMeta { status: "not_applicable", label: None },
        SpreadOutcome::NoOverlap { label } => SpreadMeta { status: "no_overlap", label: Some(label.as_str()) },
        SpreadOutcome::Ready(result) => SpreadMeta { status: "ready", label: Some(result.label.as_str()) },
    };

    let tenor_tick_labels = run
        .axes
        .plan()
        .map(|p| p.tenor_ticks.iter().map(|&t| labels.label_for(t)).collect())
        .unwrap_or_default();

    ChartFile {
        tool: "cspread",
        curves,
        rows: &run.rows,
        spread,
        axes: &run.axes,
        tenor_tick_labels,
    }
}

/// Serialize a run as pretty JSON.
pub fn chart_json(run: &ChartRun, labels: &TenorLabels) -> Result<String, AppError> {
    serde_json::to_string_pretty(&chart_file(run, labels))
        .map_err(|e| AppError::new(4, format!("Failed to serialize chart JSON: {e}")))
}

/// Write a run to a JSON file.
pub fn write_chart_json(path: &Path, run: &ChartRun, labels: &TenorLabels) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create chart JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &chart_file(run, labels))
        .map_err(|e| AppError::new(4, format!("Failed to write chart JSON: {e}")))?;

    Ok(())
}
