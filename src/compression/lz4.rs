/// LZ4 compressor (block format, uncompressed size prepended)
use crate::common::error::{TsPrismError, TsPrismResult};
use crate::compression::traits::Compressor;
use crate::compression::types::CompressionType;
use crate::compression_err;
use lz4::block::CompressionMode;

#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4Compressor;

impl Lz4Compressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for Lz4Compressor {
    fn compression_type(&self) -> CompressionType {
        CompressionType::Lz4
    }

    fn compress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        lz4::block::compress(input, Some(CompressionMode::DEFAULT), true)
            .map_err(|e| compression_err!("lz4: {}", e))
    }

    fn uncompress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        lz4::block::decompress(input, None)
            .map_err(|e| TsPrismError::Decompression(format!("lz4: {}", e)))
    }
}
