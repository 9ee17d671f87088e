//! TsPrism - Encode and Compress Analysis for Time-Series Columns
//!
//! TsPrism measures how well every applicable value encoding, paired with
//! every byte compressor, stores a column of time-series values. Each pairing
//! is reported with its sizes and compression latency, then scored and ranked
//! so that storage engines can pick a codec per column from real data.
//!
pub mod analysis;
pub mod common;
pub mod compression;
pub mod encoding;
pub mod types;

// Re-export common types for convenience
pub use common::{TsPrismError, TsPrismResult};

// Re-export type system for convenience
pub use types::{BatchData, LogicalType, Value, ValueCursor};

// Re-export codec library for convenience
pub use compression::{CompressionType, Compressor};
pub use encoding::{Encoder, EncodingType};

// Re-export analysis entry points for convenience
pub use analysis::{
    analyze_batch, analyze_values, AnalysisRecord, Analyzer, AnalyzerConfig, ScoreWeights,
};
