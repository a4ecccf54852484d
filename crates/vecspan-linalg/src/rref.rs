//! Gauss-Jordan row reduction over exact rationals.
//!
//! Pivots are chosen as the first nonzero entry at or below the current
//! pivot row, scanning columns left to right. Every arithmetic step is exact,
//! so the reduced form is the unique RREF of the input and reducing it again
//! yields the same matrix.

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::math::{Array1, Matrix};

/// Return the reduced row echelon form of `matrix`. The input is left untouched.
pub fn reduce(matrix: &Matrix) -> Matrix {
    let mut m = matrix.clone();
    let (rows, cols) = m.shape();
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }
        let Some(found) = (pivot_row..rows).find(|&r| !m[(r, col)].is_zero()) else {
            log::trace!("column {} has no pivot", col);
            continue;
        };
        m.swap_rows(pivot_row, found);

        let pivot = m[(pivot_row, col)].clone();
        if !pivot.is_one() {
            for value in m.row_slice_mut(pivot_row) {
                *value /= &pivot;
            }
        }

        let pivot_values = m.row_slice(pivot_row).to_vec();
        for row in (0..rows).filter(|&r| r != pivot_row) {
            let factor = m[(row, col)].clone();
            if factor.is_zero() {
                continue;
            }
            for (value, p) in m.row_slice_mut(row).iter_mut().zip(&pivot_values) {
                *value -= &factor * p;
            }
        }

        pivot_row += 1;
    }

    debug_assert!(is_rref(&m));
    m
}

/// Column index of the leading 1 in each nonzero row of an RREF matrix.
pub fn pivot_columns(rref: &Matrix) -> Vec<usize> {
    rref.rows()
        .filter_map(|row| row.iter().position(|v| !v.is_zero()))
        .collect()
}

/// Number of pivots in an RREF matrix, i.e. the rank of the matrix it came from.
pub fn pivot_count(rref: &Matrix) -> usize {
    pivot_columns(rref).len()
}

/// Rank of an arbitrary matrix.
pub fn rank(matrix: &Matrix) -> usize {
    pivot_count(&reduce(matrix))
}

/// Basis of the column space: the original columns sitting at pivot positions.
pub fn column_space(matrix: &Matrix) -> Vec<Array1<BigRational>> {
    pivot_columns(&reduce(matrix))
        .into_iter()
        .map(|col| matrix.column(col))
        .collect()
}

/// Check the four RREF invariants: leading ones, cleared pivot columns,
/// strictly increasing pivot columns, zero rows last.
pub fn is_rref(matrix: &Matrix) -> bool {
    let mut last_pivot: Option<usize> = None;
    let mut seen_zero_row = false;

    for (r, row) in matrix.rows().enumerate() {
        let Some(col) = row.iter().position(|v| !v.is_zero()) else {
            seen_zero_row = true;
            continue;
        };
        if seen_zero_row || !row[col].is_one() {
            return false;
        }
        if last_pivot.map_or(false, |prev| col <= prev) {
            return false;
        }
        let column_clear = (0..matrix.nrows())
            .filter(|&other| other != r)
            .all(|other| matrix[(other, col)].is_zero());
        if !column_clear {
            return false;
        }
        last_pivot = Some(col);
    }
    true
}
