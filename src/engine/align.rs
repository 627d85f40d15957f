//! Merge named curves onto a single tenor-keyed row set.

use crate::domain::{MergedRow, NamedCurve};

/// Merge the visible curves into one row per distinct tenor.
///
/// Each row carries a value for a curve only where that curve has an exact
/// sample. Rows are returned ascending by tenor. Points are expected sorted
/// per curve; duplicate tenors resolve to the later point.
pub fn align(curves: &[NamedCurve]) -> Vec<MergedRow> {
    let mut rows: Vec<MergedRow> = Vec::new();

    for curve in curves.iter().filter(|c| c.visible) {
        for p in curve.points.points() {
            let idx = match rows.binary_search_by(|r| r.tenor_months.total_cmp(&p.tenor_months)) {
                Ok(i) => i,
                Err(i) => {
                    rows.insert(i, MergedRow::new(p.tenor_months));
                    i
                }
            };
            rows[idx].values.insert(curve.key.clone(), p.value);
        }
    }

    rows
}

/// Keys of the visible curves, in input order.
pub fn visible_keys(curves: &[NamedCurve]) -> Vec<String> {
    curves
        .iter()
        .filter(|c| c.visible)
        .map(|c| c.key.clone())
        .collect()
}
