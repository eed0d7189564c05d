//! bitmosaic (workspace facade crate).
//!
//! This package exposes `bitmosaic::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod telemetry;

pub use bitmosaic_core as core;
pub use bitmosaic_input as input;
pub use bitmosaic_term as term;
pub use bitmosaic_types as types;
