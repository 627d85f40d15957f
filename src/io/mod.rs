//! I/O helpers (JSON in, JSON out).
//!
//! - `curve`: curve-set ingest with validation and unit/tenor normalization
//! - `chart`: chart-run export for charting front-ends

pub mod chart;
pub mod curve;
