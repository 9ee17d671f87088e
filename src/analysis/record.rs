/// Analysis records
///
/// `EncodedColumn` is the output of the fan-out stage: one flushed buffer per
/// encoding. `AnalysisRecord` is one measured (encoding, compression) pair.
use crate::compression::types::CompressionType;
use crate::encoding::types::EncodingType;
use crate::types::LogicalType;
use bytes::Bytes;
use serde::{Serialize, Serializer};
use std::fmt;

/// Flushed output of one encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    pub encoding: EncodingType,
    pub bytes: Bytes,
}

impl EncodedColumn {
    pub fn new(encoding: EncodingType, bytes: Bytes) -> Self {
        Self { encoding, bytes }
    }

    /// Encoded byte length before compression
    pub fn origin_size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Identity of a record inside one analysis call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub encoding: EncodingType,
    pub compression: CompressionType,
}

fn serialize_name<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// One measured encoding x compression combination
///
/// `encoded_size` and `uncompressed_size` both repeat `origin_size`: display
/// code reads all three. `score` stays `None` until the record is ranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    #[serde(rename = "typeName", serialize_with = "serialize_name")]
    data_type: LogicalType,
    #[serde(rename = "encodeName", serialize_with = "serialize_name")]
    encoding: EncodingType,
    #[serde(rename = "compressName", serialize_with = "serialize_name")]
    compression: CompressionType,
    origin_size: u64,
    encoded_size: u64,
    uncompressed_size: u64,
    compressed_size: u64,
    /// Nanoseconds spent in one compression call
    compressed_cost: u64,
    score: Option<f64>,
}

impl AnalysisRecord {
    pub fn new(
        data_type: LogicalType,
        encoding: EncodingType,
        compression: CompressionType,
        origin_size: u64,
        compressed_size: u64,
        compressed_cost: u64,
    ) -> Self {
        Self {
            data_type,
            encoding,
            compression,
            origin_size,
            encoded_size: origin_size,
            uncompressed_size: origin_size,
            compressed_size,
            compressed_cost,
            score: None,
        }
    }

    /// Returns the record with its composite score set
    pub fn with_score(self, score: f64) -> Self {
        Self {
            score: Some(score),
            ..self
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            encoding: self.encoding,
            compression: self.compression,
        }
    }

    pub fn data_type(&self) -> LogicalType {
        self.data_type
    }

    pub fn encoding(&self) -> EncodingType {
        self.encoding
    }

    pub fn compression(&self) -> CompressionType {
        self.compression
    }

    pub fn type_name(&self) -> &'static str {
        self.data_type.name()
    }

    pub fn encode_name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn compress_name(&self) -> &'static str {
        self.compression.name()
    }

    pub fn origin_size(&self) -> u64 {
        self.origin_size
    }

    pub fn encoded_size(&self) -> u64 {
        self.encoded_size
    }

    pub fn uncompressed_size(&self) -> u64 {
        self.uncompressed_size
    }

    pub fn compressed_size(&self) -> u64 {
        self.compressed_size
    }

    pub fn compressed_cost(&self) -> u64 {
        self.compressed_cost
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }
}

impl fmt::Display for AnalysisRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "typeName : {} compressName : {} encodeName : {} originSize : {} encodedSize : {} \
             uncompressSize : {} compressedSize : {} compressedCost : {}",
            self.data_type,
            self.compression,
            self.encoding,
            self.origin_size,
            self.encoded_size,
            self.uncompressed_size,
            self.compressed_size,
            self.compressed_cost
        )?;
        if let Some(score) = self.score {
            write!(f, " score : {:.3}", score)?;
        }
        Ok(())
    }
}
