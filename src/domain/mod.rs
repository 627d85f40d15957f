//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - curve inputs (`CurvePoint`, `Curve`, `NamedCurve`, `RateUnit`)
//! - engine outputs (`MergedRow`, `SpreadCalc`, `SpreadResult`, `AxisPlan`)
//! - the tenor label table (`TenorLabels`)

pub mod tenor;
pub mod types;

pub use tenor::*;
pub use types::*;
