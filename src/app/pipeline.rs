//! Shared chart pipeline used by every front-end command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! visibility toggles -> align -> spread (two visible curves) -> axes
//!
//! Commands then only decide how to present the `ChartRun`.

use tracing::{debug, warn};

use crate::domain::{AxisOutcome, ChartConfig, MergedRow, NamedCurve, SpreadOutcome};
use crate::engine::{align, plan_axes, visible_keys, visible_spread};

/// All computed outputs of a single chart run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRun {
    pub curves: Vec<NamedCurve>,
    pub visible_keys: Vec<String>,
    /// Merged rows; carry `spread_bps` when the spread is `Ready`.
    pub rows: Vec<MergedRow>,
    pub spread: SpreadOutcome,
    pub axes: AxisOutcome,
}

/// Apply `show`/`hide` overrides and return the keys that matched no curve.
pub fn apply_toggles(curves: &mut [NamedCurve], config: &ChartConfig) -> Vec<String> {
    let mut unknown = Vec::new();
    for (keys, visible) in [(&config.show, true), (&config.hide, false)] {
        for key in keys {
            match curves.iter_mut().find(|c| &c.key == key) {
                Some(c) => c.visible = visible,
                None => unknown.push(key.clone()),
            }
        }
    }
    unknown
}

/// Execute the full pipeline for a curve set.
pub fn run_chart(mut curves: Vec<NamedCurve>, config: &ChartConfig) -> ChartRun {
    for key in apply_toggles(&mut curves, config) {
        warn!(%key, "visibility toggle names an unknown curve");
    }

    let keys = visible_keys(&curves);
    debug!(curves = curves.len(), visible = keys.len(), "aligning curves");

    let aligned = align(&curves);
    let spread = visible_spread(&curves, &aligned);
    let rows = match &spread {
        SpreadOutcome::Ready(result) => result.rows.clone(),
        _ => aligned,
    };
    let axes = plan_axes(&rows, &keys, &config.labels.standard_tenors());

    ChartRun {
        curves,
        visible_keys: keys,
        rows,
        spread,
        axes,
    }
}
