use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Allowed distance between the weight sum and 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-5;

/// Per-metric weights for the combined match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub cosine: f64,
    pub jaccard: f64,
    pub coverage: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            cosine: 0.4,
            jaccard: 0.3,
            coverage: 0.3,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.cosine + self.jaccard + self.coverage
    }

    /// Weights must be finite, non-negative, and sum to 1.0 within
    /// `WEIGHT_SUM_TOLERANCE`.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, weight) in [
            ("cosine", self.cosine),
            ("jaccard", self.jaccard),
            ("coverage", self.coverage),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidWeights(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }

    /// Weighted total of the three metrics on a 0–100 scale.
    pub fn combine(&self, cosine: f64, jaccard: f64, coverage: f64) -> f64 {
        (cosine * self.cosine + jaccard * self.jaccard + coverage * self.coverage) * 100.0
    }
}
