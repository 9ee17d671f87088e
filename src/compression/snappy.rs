/// Snappy compressor (raw format, no framing)
use crate::common::error::{TsPrismError, TsPrismResult};
use crate::compression::traits::Compressor;
use crate::compression::types::CompressionType;
use crate::compression_err;

#[derive(Debug, Default, Clone, Copy)]
pub struct SnappyCompressor;

impl SnappyCompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for SnappyCompressor {
    fn compression_type(&self) -> CompressionType {
        CompressionType::Snappy
    }

    fn compress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        snap::raw::Encoder::new()
            .compress_vec(input)
            .map_err(|e| compression_err!("snappy: {}", e))
    }

    fn uncompress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        snap::raw::Decoder::new()
            .decompress_vec(input)
            .map_err(|e| TsPrismError::Decompression(format!("snappy: {}", e)))
    }
}
