//! Small dense containers used throughout the crate.
//!
//! Provides `Array2` (2D, row-major) and `Array1` (1D) with the shape kept
//! next to the buffer so invariants are explicit and checkable. The
//! `Matrix` and `Vector` aliases fix the element types used by the
//! builder and the row-reduction engine.
pub mod matrix;
pub mod vector;

use num_rational::BigRational;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;

/// Exact rational matrix; columns are the input vectors.
pub type Matrix = Array2<BigRational>;

/// Integer coordinate vector as drawn by the builder.
pub type Vector = Array1<i64>;
