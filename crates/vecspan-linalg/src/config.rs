use serde::{Deserialize, Serialize};

use crate::error::LinalgError;

/// Parameters for one generate/reduce run.
///
/// * `n` - dimension of each vector
/// * `r` - number of vectors
/// * `lower`, `upper` - coordinate range, lower inclusive, upper exclusive
/// * `seed` - optional RNG seed for reproducible draws
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub n: i64,
    pub r: i64,
    pub lower: i64,
    pub upper: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new(n: i64, r: i64, lower: i64, upper: i64) -> Self {
        Self {
            n,
            r,
            lower,
            upper,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that would make the builder fail.
    pub fn validate(&self) -> Result<(), LinalgError> {
        if self.n < 1 {
            return Err(LinalgError::InvalidDimension(self.n));
        }
        if self.r < 1 {
            return Err(LinalgError::EmptyInput);
        }
        if self.lower >= self.upper {
            return Err(LinalgError::EmptyRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

/// Default mirrors three 3-dimensional vectors with coordinates in `[0, 10)`.
impl Default for RunConfig {
    fn default() -> Self {
        Self::new(3, 3, 0, 10)
    }
}
