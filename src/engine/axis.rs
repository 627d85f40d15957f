//! Axis bounds and ticks for the merged chart.

use tracing::{debug, warn};

use crate::domain::{AxisOutcome, AxisPlan, MergedRow};

/// Value-axis granularity (percentage points).
pub const VALUE_STEP: f64 = 0.5;

/// Upper bound on value ticks; wider ranges are not chartable at `VALUE_STEP`.
pub const MAX_VALUE_TICKS: usize = 10_000;

/// Plan both axes for the rows of the visible curves.
///
/// The value axis is padded by one step on each side; the spread column is
/// ignored. Tenor ticks are the standard tenors inside the sampled range.
pub fn plan_axes(rows: &[MergedRow], visible_keys: &[String], standard_tenors: &[f64]) -> AxisOutcome {
    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for row in rows {
        for key in visible_keys {
            if let Some(v) = row.value(key).filter(|v| v.is_finite()) {
                v_min = v_min.min(v);
                v_max = v_max.max(v);
            }
        }
    }
    if !(v_min.is_finite() && v_max.is_finite()) {
        debug!(rows = rows.len(), keys = visible_keys.len(), "no values to plan axes for");
        return AxisOutcome::NoData;
    }

    let value_min = (v_min / VALUE_STEP).floor() * VALUE_STEP - VALUE_STEP;
    let value_max = (v_max / VALUE_STEP).ceil() * VALUE_STEP + VALUE_STEP;

    let steps = ((value_max - value_min) / VALUE_STEP).round();
    if !steps.is_finite() || steps >= MAX_VALUE_TICKS as f64 {
        warn!(value_min, value_max, "value range too wide for the tick step");
        return AxisOutcome::NoData;
    }
    let value_ticks = (0..=steps as usize)
        .map(|i| round2(value_min + i as f64 * VALUE_STEP))
        .collect();

    let (tenor_min, tenor_max) = rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.tenor_months), hi.max(r.tenor_months))
    });
    let tenor_ticks = standard_tenors
        .iter()
        .copied()
        .filter(|&t| t >= tenor_min && t <= tenor_max)
        .collect();

    AxisOutcome::Ready(AxisPlan {
        value_min,
        value_max,
        value_ticks,
        tenor_min,
        tenor_max,
        tenor_ticks,
    })
}

fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    if scaled.is_finite() { scaled.round() / 100.0 } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Curve, NamedCurve, TenorLabels};
    use crate::engine::align::{align, visible_keys};

    fn keys(k: &[&str]) -> Vec<String> {
        k.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pads_by_one_step() {
        let curves = vec![NamedCurve::new("A", "A", Curve::from_pairs(&[(12.0, 9.5), (60.0, 10.25)]))];
        let rows = align(&curves);
        let plan = plan_axes(&rows, &keys(&["A"]), &TenorLabels::default().standard_tenors());
        let plan = plan.plan().unwrap();

        assert_eq!(plan.value_min, 9.0);
        assert_eq!(plan.value_max, 11.0);
        assert_eq!(plan.value_ticks, vec![9.0, 9.5, 10.0, 10.5, 11.0]);
        assert_eq!(plan.tenor_min, 12.0);
        assert_eq!(plan.tenor_max, 60.0);
        assert_eq!(plan.tenor_ticks, vec![12.0, 24.0, 36.0, 60.0]);
    }

    #[test]
    fn negative_values_and_exact_steps() {
        let curves = vec![
            NamedCurve::new("A", "A", Curve::from_pairs(&[(1.0, -0.3), (2.0, 0.5)])),
            NamedCurve::new("B", "B", Curve::from_pairs(&[(4.0, 1.0)])),
        ];
        let rows = align(&curves);
        let plan = plan_axes(&rows, &visible_keys(&curves), &[]);
        let plan = plan.plan().unwrap();

        // floor(-0.6) * 0.5 - 0.5 = -1.0 ; ceil(2.0) * 0.5 + 0.5 = 1.5
        assert_eq!(plan.value_min, -1.0);
        assert_eq!(plan.value_max, 1.5);
        assert_eq!(plan.value_ticks, vec![-1.0, -0.5, 0.0, 0.5, 1.0, 1.5]);
        assert!(plan.tenor_ticks.is_empty());
    }

    #[test]
    fn spread_column_is_ignored() {
        let mut row = MergedRow::new(12.0);
        row.values.insert("A".to_string(), 4.0);
        row.spread_bps = Some(250);
        let plan = plan_axes(&[row], &keys(&["A"]), &[12.0]);
        let plan = plan.plan().unwrap();
        assert_eq!(plan.value_min, 3.5);
        assert_eq!(plan.value_max, 4.5);
        assert_eq!(plan.tenor_ticks, vec![12.0]);
    }

    #[test]
    fn empty_inputs_are_no_data() {
        assert_eq!(plan_axes(&[], &keys(&["A"]), &[12.0]), AxisOutcome::NoData);

        let curves = vec![NamedCurve::new("A", "A", Curve::from_pairs(&[(12.0, 4.0)]))];
        let rows = align(&curves);
        assert_eq!(plan_axes(&rows, &keys(&["B"]), &[12.0]), AxisOutcome::NoData);
        assert_eq!(plan_axes(&rows, &[], &[12.0]), AxisOutcome::NoData);
    }

    #[test]
    fn ticks_do_not_accumulate_drift() {
        let curves = vec![NamedCurve::new("A", "A", Curve::from_pairs(&[(1.0, 0.1), (2.0, 49.9)]))];
        let rows = align(&curves);
        let plan = plan_axes(&rows, &keys(&["A"]), &[]);
        let plan = plan.plan().unwrap();
        assert_eq!(plan.value_ticks.len(), 103);
        for (i, t) in plan.value_ticks.iter().enumerate() {
            assert_eq!(*t, -0.5 + 0.5 * i as f64);
        }
        assert_eq!(plan.value_ticks.last(), Some(&plan.value_max));
    }

    #[test]
    fn huge_values_still_terminate() {
        // At 1e16 a half-point step is below f64 resolution.
        let mut row = MergedRow::new(12.0);
        row.values.insert("A".to_string(), 1.0e16);
        let plan = plan_axes(&[row], &keys(&["A"]), &[12.0]);
        let plan = plan.plan().unwrap();
        assert_eq!(plan.value_ticks, vec![1.0e16]);
        assert_eq!(plan.value_min, 1.0e16);
        assert_eq!(plan.value_max, 1.0e16);
    }

    #[test]
    fn unchartable_range_is_no_data() {
        let mut row = MergedRow::new(12.0);
        row.values.insert("A".to_string(), -1.0e6);
        row.values.insert("B".to_string(), 1.0e6);
        assert_eq!(plan_axes(&[row.clone()], &keys(&["A", "B"]), &[]), AxisOutcome::NoData);

        row.values.insert("A".to_string(), -f64::MAX);
        row.values.insert("B".to_string(), f64::MAX);
        assert_eq!(plan_axes(&[row], &keys(&["A", "B"]), &[]), AxisOutcome::NoData);
    }
}
