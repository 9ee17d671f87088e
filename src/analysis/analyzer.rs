/// Encode and compress analysis
///
/// This module ties the three stages together: the column is encoded with
/// every applicable encoding, every encoded buffer is compressed with every
/// compressor of the catalog, and the resulting records are ranked.
use crate::analysis::config::AnalyzerConfig;
use crate::analysis::fanout::{accumulate_cursor, accumulate_values};
use crate::analysis::matrix::CompressionMatrix;
use crate::analysis::record::{AnalysisRecord, EncodedColumn};
use crate::analysis::scorer::Scorer;
use crate::common::error::TsPrismResult;
use crate::types::{LogicalType, Value, ValueCursor};
use tracing::debug;

/// Analyzer that measures and ranks every encoding x compression pairing
pub struct Analyzer {
    config: AnalyzerConfig,
    matrix: CompressionMatrix,
    scorer: Scorer,
}

impl Analyzer {
    /// Creates an analyzer with default weights and sequential measurement
    pub fn new() -> Self {
        let config = AnalyzerConfig::default();
        Self {
            matrix: CompressionMatrix::from_config(&config),
            scorer: Scorer::new(config.weights),
            config,
        }
    }

    /// Creates an analyzer with custom settings
    pub fn with_config(config: AnalyzerConfig) -> TsPrismResult<Self> {
        config.validate()?;
        Ok(Self {
            matrix: CompressionMatrix::from_config(&config),
            scorer: Scorer::new(config.weights),
            config,
        })
    }

    /// Analyzes a materialized column
    ///
    /// Returns `None` when the column is empty or its type is not analyzable.
    pub fn analyze_values(&self, values: &[Value]) -> TsPrismResult<Option<Vec<AnalysisRecord>>> {
        let data_type = match values.first() {
            Some(first) => first.logical_type(),
            None => return Ok(None),
        };
        match accumulate_values(values)? {
            Some(columns) => self.analyze_encoded(data_type, &columns).map(Some),
            None => Ok(None),
        }
    }

    /// Analyzes the values remaining under a cursor
    ///
    /// Behaves exactly like `analyze_values` on the same values.
    pub fn analyze_batch<C: ValueCursor + ?Sized>(
        &self,
        cursor: &mut C,
    ) -> TsPrismResult<Option<Vec<AnalysisRecord>>> {
        let data_type = cursor.data_type();
        match accumulate_cursor(cursor)? {
            Some(columns) => self.analyze_encoded(data_type, &columns).map(Some),
            None => Ok(None),
        }
    }

    fn analyze_encoded(
        &self,
        data_type: LogicalType,
        columns: &[EncodedColumn],
    ) -> TsPrismResult<Vec<AnalysisRecord>> {
        debug!(
            %data_type,
            encodings = columns.len(),
            parallel = self.config.parallel_matrix,
            "analyzing column"
        );
        let records = self.matrix.measure(data_type, columns)?;
        let ranked = self.scorer.rank(records);
        if let Some(best) = ranked.first() {
            debug!(
                records = ranked.len(),
                best_encoding = best.encode_name(),
                best_compression = best.compress_name(),
                best_score = best.score().unwrap_or_default(),
                "analysis ranked"
            );
        }
        Ok(ranked)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to analyze a materialized column with default settings
pub fn analyze_values(values: &[Value]) -> TsPrismResult<Option<Vec<AnalysisRecord>>> {
    Analyzer::new().analyze_values(values)
}

/// Convenience function to analyze a cursor with default settings
pub fn analyze_batch<C: ValueCursor + ?Sized>(
    cursor: &mut C,
) -> TsPrismResult<Option<Vec<AnalysisRecord>>> {
    Analyzer::new().analyze_batch(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::ScoreWeights;
    use crate::common::error::TsPrismError;
    use crate::types::BatchData;

    #[test]
    fn test_record_count_is_cross_product() {
        let values: Vec<Value> = (0..100).map(|i| Value::Float(i as f32 * 0.5)).collect();
        let records = analyze_values(&values).unwrap().unwrap();
        assert_eq!(records.len(), 2 * 4);
        assert!(records.iter().all(|r| r.score().is_some()));
        assert!(records.iter().all(|r| r.type_name() == "FLOAT"));
    }

    #[test]
    fn test_scores_descend() {
        let values: Vec<Value> = (0..256).map(|i| Value::Int32(i % 16)).collect();
        let records = analyze_values(&values).unwrap().unwrap();
        for pair in records.windows(2) {
            assert!(pair[0].score().unwrap() >= pair[1].score().unwrap());
        }
    }

    #[test]
    fn test_empty_and_unsupported_are_none() {
        assert!(analyze_values(&[]).unwrap().is_none());
        assert!(analyze_values(&[Value::Boolean(false)]).unwrap().is_none());

        let mut batch = BatchData::new(LogicalType::Int64);
        assert!(analyze_batch(&mut batch).unwrap().is_none());

        let mut batch = BatchData::with_values(LogicalType::Vector, vec![Value::Int64(1)]);
        assert!(analyze_batch(&mut batch).unwrap().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig::new().with_weights(ScoreWeights {
            zero_rate: 1.5,
            ..ScoreWeights::DEFAULT
        });
        assert!(matches!(
            Analyzer::with_config(config),
            Err(TsPrismError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mismatched_value_aborts_batch() {
        let mut batch = BatchData::with_values(
            LogicalType::Double,
            vec![Value::Double(1.0), Value::from("oops")],
        );
        assert!(matches!(
            analyze_batch(&mut batch),
            Err(TsPrismError::TypeMismatch { .. })
        ));
    }
}
