/// Compression matrix
///
/// Runs every compressor of the catalog once over every encoded buffer and
/// records the compressed size and the wall time of that single call.
/// Buffers are only read, so the cross product can also be measured on the
/// rayon pool; each task still times nothing but its own compressor call.
use crate::analysis::config::AnalyzerConfig;
use crate::analysis::record::{AnalysisRecord, EncodedColumn};
use crate::analysis::selector::compressor_catalog;
use crate::common::error::{TsPrismError, TsPrismResult};
use crate::compression::{new_compressor, Compressor};
use crate::types::LogicalType;
use rayon::prelude::*;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::trace;

pub struct CompressionMatrix {
    compressors: Vec<Box<dyn Compressor>>,
    parallel: bool,
    deadline: Option<Duration>,
}

impl CompressionMatrix {
    /// Creates a sequential matrix over the compressor catalog
    pub fn new() -> Self {
        Self::from_compressors(
            compressor_catalog()
                .iter()
                .map(|&compression_type| new_compressor(compression_type))
                .collect(),
        )
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let mut matrix = Self::new();
        matrix.parallel = config.parallel_matrix;
        matrix.deadline = config.compress_deadline;
        matrix
    }

    /// Creates a sequential matrix over caller supplied compressors
    ///
    /// Each compression type may appear once: records are keyed by
    /// (encoding, compression) when they are ranked.
    pub fn with_compressors(compressors: Vec<Box<dyn Compressor>>) -> TsPrismResult<Self> {
        let mut seen = HashSet::new();
        for compressor in &compressors {
            if !seen.insert(compressor.compression_type()) {
                return Err(TsPrismError::InvalidConfig(format!(
                    "compressor {} is listed more than once",
                    compressor.name()
                )));
            }
        }
        Ok(Self::from_compressors(compressors))
    }

    fn from_compressors(compressors: Vec<Box<dyn Compressor>>) -> Self {
        Self {
            compressors,
            parallel: false,
            deadline: None,
        }
    }

    /// Measures every (encoding, compression) pair
    ///
    /// Records come out encoding-major, in catalog order, whether or not the
    /// measurement ran in parallel. The first compressor failure aborts the
    /// whole matrix.
    pub fn measure(
        &self,
        data_type: LogicalType,
        columns: &[EncodedColumn],
    ) -> TsPrismResult<Vec<AnalysisRecord>> {
        let pairs: Vec<(&EncodedColumn, &dyn Compressor)> = columns
            .iter()
            .flat_map(|column| {
                self.compressors
                    .iter()
                    .map(move |compressor| (column, compressor.as_ref()))
            })
            .collect();

        if self.parallel {
            pairs
                .par_iter()
                .map(|&(column, compressor)| self.measure_one(data_type, column, compressor))
                .collect()
        } else {
            pairs
                .iter()
                .map(|&(column, compressor)| self.measure_one(data_type, column, compressor))
                .collect()
        }
    }

    fn measure_one(
        &self,
        data_type: LogicalType,
        column: &EncodedColumn,
        compressor: &dyn Compressor,
    ) -> TsPrismResult<AnalysisRecord> {
        let start = Instant::now();
        let compressed = compressor.compress(&column.bytes)?;
        let elapsed = start.elapsed();

        if let Some(deadline) = self.deadline {
            if elapsed > deadline {
                return Err(TsPrismError::DeadlineExceeded {
                    compressor: compressor.name().to_string(),
                    elapsed_nanos: nanos(elapsed),
                    deadline_nanos: nanos(deadline),
                });
            }
        }

        trace!(
            encoding = %column.encoding,
            compression = compressor.name(),
            origin_size = column.origin_size(),
            compressed_size = compressed.len(),
            cost_nanos = nanos(elapsed),
            "measured"
        );

        Ok(AnalysisRecord::new(
            data_type,
            column.encoding,
            compressor.compression_type(),
            column.origin_size(),
            compressed.len() as u64,
            nanos(elapsed),
        ))
    }
}

impl Default for CompressionMatrix {
    fn default() -> Self {
        Self::new()
    }
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
