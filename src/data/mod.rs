//! Data sources for the chart pipeline.
//!
//! Real curve sets arrive as JSON (see `io::curve`); this module only provides
//! seeded synthetic curves for demos and smoke tests.

pub mod sample;

pub use sample::{DEMO_SEED, generate_demo_curves};
