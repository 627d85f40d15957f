//! Linear interpolation on a single curve, without extrapolation.

use crate::domain::Curve;

/// Value of `curve` at tenor `t`, or `None` when it cannot be known.
///
/// - fewer than two points, or `t` outside `[first, last]` -> `None`
/// - `t` equal to a sampled tenor -> that sample, untouched
/// - otherwise linear interpolation between the bracketing pair
pub fn interp(curve: &Curve, t: f64) -> Option<f64> {
    let pts = curve.points();
    if pts.len() < 2 || !t.is_finite() {
        return None;
    }

    let first = pts[0].tenor_months;
    let last = pts[pts.len() - 1].tenor_months;
    if t < first || t > last {
        return None;
    }

    // First index with tenor >= t. In range, so idx < len.
    let idx = pts.partition_point(|p| p.tenor_months < t);
    let hi = pts.get(idx)?;
    if hi.tenor_months == t {
        return Some(hi.value);
    }

    // t > first, so idx >= 1.
    let lo = pts.get(idx.checked_sub(1)?)?;
    let w = (t - lo.tenor_months) / (hi.tenor_months - lo.tenor_months);
    Some(lo.value + w * (hi.value - lo.value))
}
