//! Curve alignment and spread engine.
//!
//! Three pure stages, each a function of its inputs only:
//!
//! - `align`: named curves -> tenor-keyed merged rows
//! - `compute_spread` / `visible_spread`: pairwise spread in bp on the overlap
//! - `plan_axes`: value/tenor bounds and ticks for the chart
//!
//! Nothing here holds state or performs I/O, so every function is safe to call
//! concurrently.

pub mod align;
pub mod axis;
pub mod interp;
pub mod spread;

pub use align::{align, visible_keys};
pub use axis::{MAX_VALUE_TICKS, VALUE_STEP, plan_axes};
pub use interp::interp;
pub use spread::{compute_spread, overlap, to_bps, visible_spread};
