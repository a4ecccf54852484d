//! One generate -> build -> reduce -> report pass.

use rand::Rng;

use crate::builder::{build_matrix, generate_vectors_with};
use crate::config::RunConfig;
use crate::error::LinalgError;
use crate::math::{Matrix, Vector};
use crate::rref::{pivot_count, reduce};

/// Everything produced by a single run. Owned, so runs share nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub config: RunConfig,
    pub vectors: Vec<Vector>,
    pub matrix: Matrix,
    pub rref: Matrix,
    /// Subspace dimension `d`.
    pub dimension: usize,
}

pub fn run_once<R: Rng>(config: &RunConfig, rng: &mut R) -> Result<RunReport, LinalgError> {
    config.validate()?;
    let vectors = generate_vectors_with(rng, config.r, config.n, config.lower, config.upper)?;
    log::debug!("generated {} vectors of dimension {}", vectors.len(), config.n);

    let matrix = build_matrix(&vectors)?;
    log::debug!("assembled {}x{} matrix", matrix.nrows(), matrix.ncols());

    let rref = reduce(&matrix);
    let dimension = pivot_count(&rref);
    log::info!(
        "n={} r={} c=[{}, {}) -> d={}",
        config.n,
        config.r,
        config.lower,
        config.upper,
        dimension
    );

    Ok(RunReport {
        config: *config,
        vectors,
        matrix,
        rref,
        dimension,
    })
}
