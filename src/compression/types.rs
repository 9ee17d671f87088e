/// Compression types evaluated by the analyzer
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compression algorithm identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressionType {
    /// Snappy raw format - fast byte compressor
    Snappy,

    /// GZIP (deflate) - general-purpose compressor
    /// Best ratio of the catalog, slowest
    Gzip,

    /// LZ4 block format with a 4 byte size prefix
    Lz4,

    /// No compression - input bytes are returned unchanged
    Uncompressed,
}

impl CompressionType {
    /// Returns the canonical name, e.g. `SNAPPY`
    pub fn name(&self) -> &'static str {
        match self {
            CompressionType::Snappy => "SNAPPY",
            CompressionType::Gzip => "GZIP",
            CompressionType::Lz4 => "LZ4",
            CompressionType::Uncompressed => "UNCOMPRESSED",
        }
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
