/// GZIP compressor (deflate with gzip header and trailer)
use crate::common::error::{TsPrismError, TsPrismResult};
use crate::compression::traits::Compressor;
use crate::compression::types::CompressionType;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy)]
pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    /// Creates a compressor at the default deflate level
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for GzipCompressor {
    fn compression_type(&self) -> CompressionType {
        CompressionType::Gzip
    }

    fn compress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::with_capacity(input.len() / 2 + 32), self.level);
        encoder.write_all(input)?;
        Ok(encoder.finish()?)
    }

    fn uncompress(&self, input: &[u8]) -> TsPrismResult<Vec<u8>> {
        let mut out = Vec::new();
        GzDecoder::new(input)
            .read_to_end(&mut out)
            .map_err(|e| TsPrismError::Decompression(format!("gzip: {}", e)))?;
        Ok(out)
    }
}
