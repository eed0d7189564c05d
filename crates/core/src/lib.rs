//! Core grid module - pure, deterministic, and testable
//!
//! This crate holds the grid generator. It has **zero dependencies** on
//! terminals, argument parsing, or I/O:
//!
//! - **Deterministic**: the same side always produces the same grid
//! - **Total**: every side is accepted; bounds are checked by the input layer
//! - **Materialized**: the whole grid is built before anything reads it
//!
//! # Example
//!
//! ```
//! use bitmosaic_core::generate;
//!
//! let grid = generate(4);
//! assert_eq!(grid.side(), 4);
//!
//! // First row and column are always set
//! assert!((0..4).all(|i| grid.get(0, i) == Some(true) && grid.get(i, 0) == Some(true)));
//!
//! // Symmetric along the diagonal
//! assert_eq!(grid.get(1, 3), grid.get(3, 1));
//! ```

pub mod grid;

pub use bitmosaic_types as types;

pub use grid::{cell_at, generate, Grid};
