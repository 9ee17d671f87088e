/// Composite scoring and ranking
///
/// Score of a record = ratio contribution + size-rank bonus + latency-rank bonus.
///
/// - ratio: `compressed_weight * (1 - compressed_size / origin_size)`, negative
///   when the compressor expands the data
/// - size rank: records sorted by compressed size, position `i` of `n` earns
///   `sequence_weight * (1 - i / n)` while `i / n < zero_rate`
/// - latency rank: same law over the compression cost ordering with
///   `cost_weight`
///
/// The two rank passes sort independent orderings of the same record set and
/// are merged back onto the records by `RecordKey`.
use crate::analysis::config::ScoreWeights;
use crate::analysis::record::{AnalysisRecord, RecordKey};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoreWeights,
}

impl Scorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Compression ratio contribution of one record
    pub fn ratio_score(&self, record: &AnalysisRecord) -> f64 {
        if record.origin_size() == 0 {
            return 0.0;
        }
        self.weights.compressed_weight
            * (1.0 - record.compressed_size() as f64 / record.origin_size() as f64)
    }

    /// Bonus for position `position` in an ordering of `len` records
    fn rank_bonus(&self, weight: f64, position: usize, len: usize) -> f64 {
        let rate = position as f64 / len as f64;
        if rate < self.weights.zero_rate {
            weight * (1.0 - rate)
        } else {
            0.0
        }
    }

    /// Sorts the records by `sort_key` (stable) and assigns each its rank bonus
    fn rank_bonuses(
        &self,
        records: &[AnalysisRecord],
        weight: f64,
        sort_key: impl Fn(&AnalysisRecord) -> u64,
    ) -> HashMap<RecordKey, f64> {
        let mut ordered: Vec<&AnalysisRecord> = records.iter().collect();
        ordered.sort_by_key(|record| sort_key(record));

        let len = ordered.len();
        ordered
            .iter()
            .enumerate()
            .map(|(position, record)| (record.key(), self.rank_bonus(weight, position, len)))
            .collect()
    }

    /// Size-rank bonus per record, smallest compressed size first
    pub fn size_rank_bonuses(&self, records: &[AnalysisRecord]) -> HashMap<RecordKey, f64> {
        self.rank_bonuses(records, self.weights.sequence_weight, |record| {
            record.compressed_size()
        })
    }

    /// Latency-rank bonus per record, cheapest compression first
    pub fn cost_rank_bonuses(&self, records: &[AnalysisRecord]) -> HashMap<RecordKey, f64> {
        self.rank_bonuses(records, self.weights.cost_weight, |record| {
            record.compressed_cost()
        })
    }

    /// Scores every record and returns them best first
    ///
    /// Records with equal scores keep their measurement order.
    pub fn rank(&self, records: Vec<AnalysisRecord>) -> Vec<AnalysisRecord> {
        let size_bonuses = self.size_rank_bonuses(&records);
        let cost_bonuses = self.cost_rank_bonuses(&records);

        let mut scored: Vec<AnalysisRecord> = records
            .into_iter()
            .map(|record| {
                let key = record.key();
                let score = self.ratio_score(&record)
                    + size_bonuses.get(&key).copied().unwrap_or(0.0)
                    + cost_bonuses.get(&key).copied().unwrap_or(0.0);
                record.with_score(score)
            })
            .collect();

        scored.sort_by(|a, b| {
            let a = a.score().unwrap_or(f64::NEG_INFINITY);
            let b = b.score().unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        });
        scored
    }
}
