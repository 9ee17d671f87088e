/// Compressor trait
///
/// All byte compressors implement this trait to provide a uniform interface
/// for the compression matrix. Compressors are stateless: a single instance
/// can be shared across threads and reused for any number of buffers.
use crate::common::error::TsPrismResult;
use crate::compression::types::CompressionType;

/// Stateless byte-to-byte transform and its inverse
pub trait Compressor: Send + Sync {
    /// Returns the algorithm identifier
    fn compression_type(&self) -> CompressionType;

    /// Compresses `input` into a new buffer
    ///
    /// The result may be larger than the input for incompressible data.
    fn compress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>>;

    /// Restores the bytes produced by `compress`
    fn uncompress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>>;

    /// Returns the name of this compression algorithm
    fn name(&self) -> &'static str {
        self.compression_type().name()
    }
}
