//! Analyzer configuration
//!
//! Scoring weights are compiled-in defaults carried as one immutable value,
//! so the scorer can be exercised with injected weights.

use crate::common::constants::{
    COMPRESSED_COST_WEIGHT, COMPRESSED_SEQUENCE_WEIGHT, COMPRESSED_WEIGHT, ZERO_RATE,
};
use crate::common::error::{TsPrismError, TsPrismResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Weights of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of `1 - compressed / origin`
    pub compressed_weight: f64,
    /// Weight of the compressed-size rank bonus
    pub sequence_weight: f64,
    /// Weight of the compression latency rank bonus
    pub cost_weight: f64,
    /// Rank fraction at and beyond which a rank bonus is zero
    pub zero_rate: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        compressed_weight: COMPRESSED_WEIGHT,
        sequence_weight: COMPRESSED_SEQUENCE_WEIGHT,
        cost_weight: COMPRESSED_COST_WEIGHT,
        zero_rate: ZERO_RATE,
    };

    /// Ranks by size only: latency carries no weight
    ///
    /// Timing varies between runs, this variant gives reproducible orderings.
    pub fn size_only() -> Self {
        Self {
            cost_weight: 0.0,
            ..Self::DEFAULT
        }
    }

    pub fn validate(&self) -> TsPrismResult<()> {
        for (name, weight) in [
            ("compressed_weight", self.compressed_weight),
            ("sequence_weight", self.sequence_weight),
            ("cost_weight", self.cost_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(TsPrismError::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, weight
                )));
            }
        }
        if !(self.zero_rate > 0.0 && self.zero_rate <= 1.0) {
            return Err(TsPrismError::InvalidConfig(format!(
                "zero_rate must be in (0, 1], got {}",
                self.zero_rate
            )));
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyzerConfig {
    /// Composite score weights
    pub weights: ScoreWeights,
    /// Measure the compression matrix on the rayon pool
    pub parallel_matrix: bool,
    /// Fail the analysis when one compressor call takes longer than this
    pub compress_deadline: Option<Duration>,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_parallel_matrix(mut self, parallel: bool) -> Self {
        self.parallel_matrix = parallel;
        self
    }

    pub fn with_compress_deadline(mut self, deadline: Duration) -> Self {
        self.compress_deadline = Some(deadline);
        self
    }

    pub fn validate(&self) -> TsPrismResult<()> {
        self.weights.validate()?;
        if self.compress_deadline == Some(Duration::ZERO) {
            return Err(TsPrismError::InvalidConfig(
                "compress_deadline must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.compressed_weight, 10.0);
        assert_eq!(weights.sequence_weight, 10.0);
        assert_eq!(weights.cost_weight, 20.0);
        assert_eq!(weights.zero_rate, 0.8);
        assert!(weights.validate().is_ok());
        assert_eq!(ScoreWeights::size_only().cost_weight, 0.0);
    }

    #[test]
    fn test_invalid_weights() {
        let weights = ScoreWeights {
            cost_weight: -1.0,
            ..ScoreWeights::DEFAULT
        };
        assert!(matches!(
            weights.validate(),
            Err(TsPrismError::InvalidConfig(_))
        ));

        let weights = ScoreWeights {
            zero_rate: 0.0,
            ..ScoreWeights::DEFAULT
        };
        assert!(weights.validate().is_err());

        let weights = ScoreWeights {
            compressed_weight: f64::NAN,
            ..ScoreWeights::DEFAULT
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalyzerConfig::new()
            .with_parallel_matrix(true)
            .with_compress_deadline(Duration::from_secs(1));
        assert!(config.parallel_matrix);
        assert_eq!(config.compress_deadline, Some(Duration::from_secs(1)));
        assert!(config.validate().is_ok());

        let config = AnalyzerConfig::new().with_compress_deadline(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
