/// Analysis module
///
/// Answers "which encoding and which compressor should this column use?"
/// by measurement. A column is pushed once through every applicable encoder,
/// every encoded buffer goes through every compressor, and the resulting
/// records are scored and ranked best first.
///
/// ## Pipeline:
///
/// 1. **Selection**: `select_encoders` picks the encodings for the column type
/// 2. **Fan-out**: `accumulate_values` / `accumulate_cursor` feed every value
///    to all encoders in one pass
/// 3. **Matrix**: `CompressionMatrix` compresses every buffer with every
///    compressor and times each call
/// 4. **Scoring**: `Scorer` combines ratio, size rank and latency rank
///
/// ## Usage Example:
///
/// ```ignore
/// use tsprism::analysis::analyze_values;
/// use tsprism::Value;
///
/// let values: Vec<Value> = (0..1000i64).map(Value::Int64).collect();
/// if let Some(records) = analyze_values(&values)? {
///     println!("{}", records[0]);
/// }
/// ```

pub mod analyzer;
pub mod config;
pub mod fanout;
pub mod matrix;
pub mod record;
pub mod scorer;
pub mod selector;

pub use analyzer::{analyze_batch, analyze_values, Analyzer};
pub use config::{AnalyzerConfig, ScoreWeights};
pub use fanout::{accumulate_cursor, accumulate_values, ColumnFanOut, EncoderSpec, FanOut};
pub use matrix::CompressionMatrix;
pub use record::{AnalysisRecord, EncodedColumn, RecordKey};
pub use scorer::Scorer;
pub use selector::{compressor_catalog, new_fan_out, select_encoders, ColumnKind};
