//! Synthetic demo curves.
//!
//! Three curves on deliberately different tenor grids and cutoffs, built from a
//! shared Nelson-Siegel style shape plus a per-curve offset and seeded noise:
//!
//! - `govt`: 3M..30Y
//! - `swap`: 1M..15Y (shorter cutoff)
//! - `corp`: 1Y..10Y, hidden by default

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Curve, CurvePoint, NamedCurve};
use crate::error::AppError;

pub const DEMO_SEED: u64 = 42;

/// Long-end level of the base shape (percent).
const LEVEL: f64 = 4.6;
/// Short-end slope loading (percent).
const SLOPE: f64 = -0.9;
/// Decay constant of the slope factor (months).
const DECAY_MONTHS: f64 = 30.0;
/// Std-dev of the per-point noise (percent).
const NOISE_SD: f64 = 0.03;

struct DemoCurve {
    key: &'static str,
    label: &'static str,
    color: &'static str,
    tenors: &'static [f64],
    offset: f64,
    visible: bool,
}

const DEMO_CURVES: [DemoCurve; 3] = [
    DemoCurve {
        key: "govt",
        label: "Govt",
        color: "#1f77b4",
        tenors: &[3.0, 6.0, 12.0, 24.0, 36.0, 60.0, 84.0, 120.0, 240.0, 360.0],
        offset: 0.0,
        visible: true,
    },
    DemoCurve {
        key: "swap",
        label: "Swap",
        color: "#ff7f0e",
        tenors: &[1.0, 3.0, 6.0, 12.0, 18.0, 24.0, 60.0, 120.0, 180.0],
        offset: 0.35,
        visible: true,
    },
    DemoCurve {
        key: "corp",
        label: "Corp",
        color: "#2ca02c",
        tenors: &[12.0, 36.0, 60.0, 84.0, 120.0],
        offset: 1.4,
        visible: false,
    },
];

/// Generate the demo curve set for a seed (same seed, same curves).
pub fn generate_demo_curves(seed: u64) -> Result<Vec<NamedCurve>, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, NOISE_SD)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let curves = DEMO_CURVES
        .iter()
        .map(|demo| {
            let points = demo
                .tenors
                .iter()
                .map(|&t| {
                    let v = base_shape(t) + demo.offset + noise.sample(&mut rng);
                    CurvePoint::new(t, round3(v))
                })
                .collect();
            NamedCurve {
                key: demo.key.to_string(),
                label: demo.label.to_string(),
                color: demo.color.to_string(),
                points: Curve::new(points),
                visible: demo.visible,
            }
        })
        .collect();

    Ok(curves)
}

/// Nelson-Siegel level + slope factor at `t` months.
fn base_shape(t: f64) -> f64 {
    let x = t / DECAY_MONTHS;
    LEVEL + SLOPE * (1.0 - (-x).exp()) / x
}

/// Quotes are shown to a tenth of a basis point.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
