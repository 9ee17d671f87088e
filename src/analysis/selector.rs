/// Codec selection
///
/// Maps a column's logical type to the encodings applicable to it and
/// exposes the type-independent compressor catalog. Each analyzable type is
/// a `ColumnKind`: it knows how to pull its primitive out of a `Value` and
/// how to build its encoders. `new_fan_out` is the only place that branches
/// on the type tag.
use crate::analysis::fanout::{ColumnFanOut, EncoderSpec, FanOut};
use crate::common::error::TsPrismResult;
use crate::compression::types::CompressionType;
use crate::encoding::{
    DictionaryEncoder, Encoder, EncodingType, GorillaEncoder, PlainEncoder, RleEncoder,
    Ts2DiffEncoder,
};
use crate::encoding_err;
use crate::types::{LogicalType, Value};

const INTEGER_ENCODINGS: &[EncodingType] = &[
    EncodingType::Plain,
    EncodingType::Gorilla,
    EncodingType::Rle,
    EncodingType::Ts2Diff,
];

const FLOATING_ENCODINGS: &[EncodingType] = &[EncodingType::Plain, EncodingType::Gorilla];

const TEXT_ENCODINGS: &[EncodingType] = &[EncodingType::Plain, EncodingType::Dictionary];

const COMPRESSOR_CATALOG: &[CompressionType] = &[
    CompressionType::Snappy,
    CompressionType::Gzip,
    CompressionType::Lz4,
    CompressionType::Uncompressed,
];

/// Capability of one analyzable logical type
pub trait ColumnKind: 'static {
    /// Primitive handed to the encoders
    type Native: ?Sized;

    const DATA_TYPE: LogicalType;

    /// Applicable encodings, in evaluation order
    const ENCODINGS: &'static [EncodingType];

    /// Extracts the primitive, failing on a value of another type
    fn extract(value: &Value) -> TsPrismResult<&Self::Native>;

    /// Builds a fresh encoder, `None` if the encoding does not apply
    fn new_encoder(encoding: EncodingType) -> Option<Box<dyn Encoder<Self::Native>>>;

    /// Builds one encoder spec per applicable encoding
    fn encoder_specs() -> TsPrismResult<Vec<EncoderSpec<Self::Native>>> {
        Self::ENCODINGS
            .iter()
            .map(|&encoding| {
                Self::new_encoder(encoding)
                    .map(|encoder| EncoderSpec::new(encoding, encoder))
                    .ok_or_else(|| {
                        encoding_err!("{} does not apply to {}", encoding, Self::DATA_TYPE)
                    })
            })
            .collect()
    }
}

pub struct Int64Kind;

impl ColumnKind for Int64Kind {
    type Native = i64;
    const DATA_TYPE: LogicalType = LogicalType::Int64;
    const ENCODINGS: &'static [EncodingType] = INTEGER_ENCODINGS;

    fn extract(value: &Value) -> TsPrismResult<&i64> {
        value.as_i64()
    }

    fn new_encoder(encoding: EncodingType) -> Option<Box<dyn Encoder<i64>>> {
        match encoding {
            EncodingType::Plain => Some(Box::new(PlainEncoder::new())),
            EncodingType::Gorilla => Some(Box::new(GorillaEncoder::<i64>::new())),
            EncodingType::Rle => Some(Box::new(RleEncoder::<i64>::new())),
            EncodingType::Ts2Diff => Some(Box::new(Ts2DiffEncoder::<i64>::new())),
            EncodingType::Dictionary => None,
        }
    }
}

pub struct Int32Kind;

impl ColumnKind for Int32Kind {
    type Native = i32;
    const DATA_TYPE: LogicalType = LogicalType::Int32;
    const ENCODINGS: &'static [EncodingType] = INTEGER_ENCODINGS;

    fn extract(value: &Value) -> TsPrismResult<&i32> {
        value.as_i32()
    }

    fn new_encoder(encoding: EncodingType) -> Option<Box<dyn Encoder<i32>>> {
        match encoding {
            EncodingType::Plain => Some(Box::new(PlainEncoder::new())),
            EncodingType::Gorilla => Some(Box::new(GorillaEncoder::<i32>::new())),
            EncodingType::Rle => Some(Box::new(RleEncoder::<i32>::new())),
            EncodingType::Ts2Diff => Some(Box::new(Ts2DiffEncoder::<i32>::new())),
            EncodingType::Dictionary => None,
        }
    }
}

pub struct FloatKind;

impl ColumnKind for FloatKind {
    type Native = f32;
    const DATA_TYPE: LogicalType = LogicalType::Float;
    const ENCODINGS: &'static [EncodingType] = FLOATING_ENCODINGS;

    fn extract(value: &Value) -> TsPrismResult<&f32> {
        value.as_f32()
    }

    fn new_encoder(encoding: EncodingType) -> Option<Box<dyn Encoder<f32>>> {
        match encoding {
            EncodingType::Plain => Some(Box::new(PlainEncoder::new())),
            EncodingType::Gorilla => Some(Box::new(GorillaEncoder::<f32>::new())),
            _ => None,
        }
    }
}

pub struct DoubleKind;

impl ColumnKind for DoubleKind {
    type Native = f64;
    const DATA_TYPE: LogicalType = LogicalType::Double;
    const ENCODINGS: &'static [EncodingType] = FLOATING_ENCODINGS;

    fn extract(value: &Value) -> TsPrismResult<&f64> {
        value.as_f64()
    }

    fn new_encoder(encoding: EncodingType) -> Option<Box<dyn Encoder<f64>>> {
        match encoding {
            EncodingType::Plain => Some(Box::new(PlainEncoder::new())),
            EncodingType::Gorilla => Some(Box::new(GorillaEncoder::<f64>::new())),
            _ => None,
        }
    }
}

pub struct TextKind;

impl ColumnKind for TextKind {
    type Native = [u8];
    const DATA_TYPE: LogicalType = LogicalType::Text;
    const ENCODINGS: &'static [EncodingType] = TEXT_ENCODINGS;

    fn extract(value: &Value) -> TsPrismResult<&[u8]> {
        value.as_bytes()
    }

    fn new_encoder(encoding: EncodingType) -> Option<Box<dyn Encoder<[u8]>>> {
        match encoding {
            EncodingType::Plain => Some(Box::new(PlainEncoder::new())),
            EncodingType::Dictionary => Some(Box::new(DictionaryEncoder::new())),
            _ => None,
        }
    }
}

/// Encodings applicable to a logical type, empty if it is not analyzable
pub fn select_encoders(data_type: LogicalType) -> &'static [EncodingType] {
    match data_type {
        LogicalType::Int64 => Int64Kind::ENCODINGS,
        LogicalType::Int32 => Int32Kind::ENCODINGS,
        LogicalType::Float => FloatKind::ENCODINGS,
        LogicalType::Double => DoubleKind::ENCODINGS,
        LogicalType::Text => TextKind::ENCODINGS,
        LogicalType::Boolean | LogicalType::Vector => &[],
    }
}

/// Compressors evaluated for every encoding
pub fn compressor_catalog() -> &'static [CompressionType] {
    COMPRESSOR_CATALOG
}

/// Builds the fan-out for a column type, `None` if it is not analyzable
pub fn new_fan_out(data_type: LogicalType) -> TsPrismResult<Option<Box<dyn ColumnFanOut>>> {
    let fan_out: Box<dyn ColumnFanOut> = match data_type {
        LogicalType::Int64 => Box::new(FanOut::<Int64Kind>::new()?),
        LogicalType::Int32 => Box::new(FanOut::<Int32Kind>::new()?),
        LogicalType::Float => Box::new(FanOut::<FloatKind>::new()?),
        LogicalType::Double => Box::new(FanOut::<DoubleKind>::new()?),
        LogicalType::Text => Box::new(FanOut::<TextKind>::new()?),
        LogicalType::Boolean | LogicalType::Vector => return Ok(None),
    };
    Ok(Some(fan_out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_encoders() {
        let expected = vec![
            EncodingType::Plain,
            EncodingType::Gorilla,
            EncodingType::Rle,
            EncodingType::Ts2Diff,
        ];
        assert_eq!(select_encoders(LogicalType::Int64).to_vec(), expected);
        assert_eq!(select_encoders(LogicalType::Int32).to_vec(), expected);
    }

    #[test]
    fn test_floating_and_text_encoders() {
        let floating = vec![EncodingType::Plain, EncodingType::Gorilla];
        assert_eq!(select_encoders(LogicalType::Float).to_vec(), floating);
        assert_eq!(select_encoders(LogicalType::Double).to_vec(), floating);
        assert_eq!(
            select_encoders(LogicalType::Text).to_vec(),
            vec![EncodingType::Plain, EncodingType::Dictionary]
        );
    }

    #[test]
    fn test_unsupported_types_are_empty() {
        assert!(select_encoders(LogicalType::Boolean).is_empty());
        assert!(select_encoders(LogicalType::Vector).is_empty());
        assert!(new_fan_out(LogicalType::Boolean).unwrap().is_none());
    }

    #[test]
    fn test_selection_is_deterministic() {
        for data_type in [
            LogicalType::Int64,
            LogicalType::Int32,
            LogicalType::Float,
            LogicalType::Double,
            LogicalType::Text,
        ] {
            assert_eq!(select_encoders(data_type), select_encoders(data_type));
            let fan_out = new_fan_out(data_type).unwrap().unwrap();
            assert_eq!(fan_out.encodings(), select_encoders(data_type).to_vec());
        }
    }

    #[test]
    fn test_compressor_catalog() {
        assert_eq!(
            compressor_catalog().to_vec(),
            vec![
                CompressionType::Snappy,
                CompressionType::Gzip,
                CompressionType::Lz4,
                CompressionType::Uncompressed,
            ]
        );
    }

    #[test]
    fn test_kind_rejects_inapplicable_encoding() {
        assert!(Int64Kind::new_encoder(EncodingType::Dictionary).is_none());
        assert!(TextKind::new_encoder(EncodingType::Ts2Diff).is_none());
        assert_eq!(TextKind::encoder_specs().unwrap().len(), 2);
    }
}
