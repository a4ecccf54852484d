//! Console front end for `vecspan-linalg`.
//!
//! Prompts for the run parameters that were not supplied up front, prints
//! the generated vectors, the matrix, its RREF and the subspace dimension,
//! and offers to start again.
pub mod config;
pub mod console;
pub mod display;
pub mod session;
