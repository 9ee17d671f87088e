/// Compression module
///
/// Byte compressors applied to every encoded buffer during analysis.
///
/// ## Supported Compression Algorithms:
///
/// - **SNAPPY**: Fast byte compressor (`snap` raw format)
/// - **GZIP**: General-purpose deflate (`flate2`)
/// - **LZ4**: LZ-family block compressor (`lz4`)
/// - **UNCOMPRESSED**: Passthrough baseline

pub mod gzip;
pub mod lz4;
pub mod snappy;
pub mod traits;
pub mod types;
pub mod uncompressed;

pub use gzip::GzipCompressor;
pub use self::lz4::Lz4Compressor;
pub use snappy::SnappyCompressor;
pub use traits::Compressor;
pub use types::CompressionType;
pub use uncompressed::NoCompressor;

/// Creates the compressor for a compression type
pub fn new_compressor(compression_type: CompressionType) -> Box<dyn Compressor> {
    match compression_type {
        CompressionType::Snappy => Box::new(SnappyCompressor::new()),
        CompressionType::Gzip => Box::new(GzipCompressor::new()),
        CompressionType::Lz4 => Box::new(Lz4Compressor::new()),
        CompressionType::Uncompressed => Box::new(NoCompressor::new()),
    }
}
