use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Input-validation failures raised by the vector/matrix builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Requested vector dimension was below 1.
    InvalidDimension(i64),
    /// Half-open range `[lower, upper)` has no members.
    EmptyRange { lower: i64, upper: i64 },
    /// Vector at `index` has `found` coordinates, the first one had `expected`.
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    EmptyInput,
    Shape(ShapeError),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::InvalidDimension(n) => {
                write!(f, "n must be greater than or equal to 1 (got {})", n)
            }
            LinalgError::EmptyRange { lower, upper } => write!(
                f,
                "coordinate range [{}, {}) is empty; lower bound must be below upper bound",
                lower, upper
            ),
            LinalgError::DimensionMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "vector {} has {} coordinates, expected {}",
                index, found, expected
            ),
            LinalgError::EmptyInput => write!(f, "at least one vector is required"),
            LinalgError::Shape(e) => write!(f, "{}", e),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinalgError::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for LinalgError {
    fn from(value: ShapeError) -> Self {
        LinalgError::Shape(value)
    }
}
