//! Reporting utilities: spread statistics and formatted terminal output.
//!
//! Formatting lives in one place so the engine stays free of presentation
//! concerns and output changes stay localized.

pub mod format;

pub use format::*;

use crate::domain::MergedRow;

/// Summary of the spread column of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadStats {
    pub n: usize,
    pub min_bps: i64,
    pub max_bps: i64,
}

/// Count and range of the spread values present in `rows`.
pub fn spread_stats(rows: &[MergedRow]) -> Option<SpreadStats> {
    let mut it = rows.iter().filter_map(|r| r.spread_bps);
    let first = it.next()?;
    let mut stats = SpreadStats {
        n: 1,
        min_bps: first,
        max_bps: first,
    };
    for s in it {
        stats.n += 1;
        stats.min_bps = stats.min_bps.min(s);
        stats.max_bps = stats.max_bps.max(s);
    }
    Some(stats)
}
