//! `curve-spread` library crate.
//!
//! The binary (`cspread`) is a thin wrapper around this library so that:
//!
//! - the engine is testable without spawning processes
//! - the pure stages (`engine`) can be embedded by any chart front-end
//! - I/O, reporting and CLI concerns stay out of the numeric code

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
