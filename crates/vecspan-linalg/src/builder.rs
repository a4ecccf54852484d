//! Random vector generation and matrix assembly.
//!
//! Vectors are laid out as the *columns* of the assembled matrix, so a list
//! of r vectors of dimension n produces an n x r matrix. Rank and pivot
//! semantics downstream rely on this orientation.

use num_bigint::BigInt;
use num_rational::BigRational;
use rand::Rng;

use crate::error::LinalgError;
use crate::math::{Array1, Array2, Matrix, Vector};

fn check_draw(n: i64, lower: i64, upper: i64) -> Result<usize, LinalgError> {
    if n < 1 {
        return Err(LinalgError::InvalidDimension(n));
    }
    if lower >= upper {
        return Err(LinalgError::EmptyRange { lower, upper });
    }
    usize::try_from(n).map_err(|_| LinalgError::InvalidDimension(n))
}

/// Draw an `n`-dimensional vector with coordinates uniform in `[lower, upper)`.
///
/// Validation happens before any value is drawn from `rng`.
pub fn generate_vector_with<R: Rng>(
    rng: &mut R,
    n: i64,
    lower: i64,
    upper: i64,
) -> Result<Vector, LinalgError> {
    let n = check_draw(n, lower, upper)?;
    Ok((0..n).map(|_| rng.gen_range(lower..upper)).collect())
}

/// Same as [`generate_vector_with`] using the thread-local generator.
pub fn generate_vector(n: i64, lower: i64, upper: i64) -> Result<Vector, LinalgError> {
    generate_vector_with(&mut rand::thread_rng(), n, lower, upper)
}

/// Draw `r` independent vectors of dimension `n`.
pub fn generate_vectors_with<R: Rng>(
    rng: &mut R,
    r: i64,
    n: i64,
    lower: i64,
    upper: i64,
) -> Result<Vec<Vector>, LinalgError> {
    check_draw(n, lower, upper)?;
    if r < 1 {
        return Err(LinalgError::EmptyInput);
    }
    (0..r)
        .map(|_| generate_vector_with(&mut *rng, n, lower, upper))
        .collect()
}

/// Assemble vectors into a matrix whose column `j` is `vectors[j]`.
pub fn build_matrix(vectors: &[Vector]) -> Result<Matrix, LinalgError> {
    let first = vectors.first().ok_or(LinalgError::EmptyInput)?;
    let rows = first.len();
    if rows == 0 {
        return Err(LinalgError::InvalidDimension(0));
    }
    if let Some((index, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != rows) {
        return Err(LinalgError::DimensionMismatch {
            index,
            expected: rows,
            found: v.len(),
        });
    }

    let cols = vectors.len();
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for v in vectors {
            data.push(BigRational::from_integer(BigInt::from(v[row])));
        }
    }
    Ok(Array2::from_shape_vec((rows, cols), data)?)
}

/// Convenience for fixtures: convert nested integer rows to a rational matrix.
pub fn matrix_from_rows(rows: &[&[i64]]) -> Result<Matrix, LinalgError> {
    let rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| BigRational::from_integer(BigInt::from(v)))
                .collect()
        })
        .collect();
    Ok(Array2::from_rows(rows)?)
}

/// Shorthand for building a [`Vector`] from a slice.
pub fn vector(values: &[i64]) -> Vector {
    Array1::from_vec(values.to_vec())
}
