//! vecspan-linalg: random integer vectors and the dimension of their span.
//!
//! The crate draws random integer vectors, assembles them as the columns of
//! an exact rational matrix, reduces that matrix to reduced row echelon form
//! by Gauss-Jordan elimination and counts its pivots. The pivot count is the
//! dimension of the subspace spanned by the vectors.
//!
//! All arithmetic is done over `BigRational`, so reduction is exact and
//! repeatable.
pub mod builder;
pub mod config;
pub mod error;
pub mod math;
pub mod rref;
pub mod run;

pub use builder::{build_matrix, generate_vector, generate_vector_with, generate_vectors_with};
pub use config::RunConfig;
pub use error::LinalgError;
pub use math::{Matrix, Vector};
pub use rref::{column_space, is_rref, pivot_columns, pivot_count, rank, reduce};
pub use run::{run_once, RunReport};
