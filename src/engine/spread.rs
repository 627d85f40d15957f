//! Pairwise spread between two curves, in basis points.
//!
//! The spread is only defined on the overlap of the two tenor ranges. Inside
//! that window every tenor sampled by either curve is evaluated on both curves
//! (exact sample where available, linear interpolation otherwise) and the
//! difference is reported in whole basis points.

use tracing::debug;

use crate::domain::{Curve, MergedRow, NamedCurve, SpreadCalc, SpreadOutcome, SpreadResult, SpreadRow};
use crate::engine::interp::interp;

/// Percentage points -> basis points.
const BPS_PER_PERCENT: f64 = 100.0;

/// Spread `a - b` at every tenor of either curve inside the overlap domain.
pub fn compute_spread(a: &Curve, b: &Curve) -> SpreadCalc {
    let Some((lo, hi)) = overlap(a, b) else {
        debug!(a_points = a.len(), b_points = b.len(), "no overlapping tenor domain");
        return SpreadCalc::no_overlap();
    };

    let mut tenors: Vec<f64> = a
        .tenors()
        .chain(b.tenors())
        .filter(|&t| t >= lo && t <= hi)
        .collect();
    tenors.sort_by(f64::total_cmp);
    tenors.dedup();

    let rows = tenors
        .into_iter()
        .filter_map(|t| {
            let va = interp(a, t)?;
            let vb = interp(b, t)?;
            Some(SpreadRow {
                tenor_months: t,
                spread_bps: to_bps(va - vb),
            })
        })
        .collect();

    SpreadCalc {
        rows,
        overlap_valid: true,
    }
}

/// `[max(first), min(last)]`, or `None` when either curve has fewer than two
/// points or the ranges are disjoint.
pub fn overlap(a: &Curve, b: &Curve) -> Option<(f64, f64)> {
    if a.len() < 2 || b.len() < 2 {
        return None;
    }
    let lo = a.first_tenor()?.max(b.first_tenor()?);
    let hi = a.last_tenor()?.min(b.last_tenor()?);
    (lo <= hi).then_some((lo, hi))
}

/// Convert a percentage-point difference to whole basis points.
///
/// `f64::round` rounds half away from zero, so `to_bps(-x) == -to_bps(x)`.
pub fn to_bps(diff: f64) -> i64 {
    (diff * BPS_PER_PERCENT).round() as i64
}

/// Spread for the current toggle set, applied onto the aligned rows.
///
/// Only defined when exactly two curves are visible; the first visible curve
/// (input order) is the minuend. Rows outside the overlap keep
/// `spread_bps = None`.
pub fn visible_spread(curves: &[NamedCurve], rows: &[MergedRow]) -> SpreadOutcome {
    let visible: Vec<&NamedCurve> = curves.iter().filter(|c| c.visible).collect();
    let [a, b] = visible.as_slice() else {
        return SpreadOutcome::NotApplicable {
            visible: visible.len(),
        };
    };

    let label = format!("{} - {}", a.label, b.label);
    let calc = compute_spread(&a.points, &b.points);
    if !calc.overlap_valid {
        return SpreadOutcome::NoOverlap { label };
    }

    let mut out = rows.to_vec();
    for s in &calc.rows {
        if let Ok(i) = out.binary_search_by(|r| r.tenor_months.total_cmp(&s.tenor_months)) {
            out[i].spread_bps = Some(s.spread_bps);
        }
    }

    SpreadOutcome::Ready(SpreadResult { label, rows: out })
}
