//! Constants used throughout tsprism

/// Weight of the compression ratio contribution
pub const COMPRESSED_WEIGHT: f64 = 10.0;

/// Weight of the compressed-size rank bonus
pub const COMPRESSED_SEQUENCE_WEIGHT: f64 = 10.0;

/// Weight of the compression latency rank bonus
pub const COMPRESSED_COST_WEIGHT: f64 = 20.0;

/// Rank fraction at and beyond which no rank bonus is granted
pub const ZERO_RATE: f64 = 0.8;

/// Number of values per TS_2DIFF block
pub const TS_2DIFF_BLOCK_SIZE: usize = 128;

/// Minimum repeat count written as an RLE run instead of a bit-packed group
pub const RLE_MIN_REPEAT: usize = 8;

/// Values per RLE bit-packed group
pub const RLE_GROUP_SIZE: usize = 8;

/// Initial capacity of an encoder output buffer
pub const ENCODER_BUFFER_CAPACITY: usize = 128;
