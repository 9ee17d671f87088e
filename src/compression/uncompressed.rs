/// Uncompressed passthrough "compression"
///
/// Baseline of the compression matrix: it always reports the encoded size
/// unchanged and only costs a copy.
use crate::common::error::TsPrismResult;
use crate::compression::traits::Compressor;
use crate::compression::types::CompressionType;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoCompressor;

impl NoCompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for NoCompressor {
    fn compression_type(&self) -> CompressionType {
        CompressionType::Uncompressed
    }

    fn compress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        Ok(input.to_vec())
    }

    fn uncompress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        Ok(input.to_vec())
    }
}
