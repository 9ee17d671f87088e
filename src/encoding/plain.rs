/// PLAIN encoding
///
/// Values are written as they are, without any cross-value state:
/// - INT32: zigzag varint
/// - INT64: 8 bytes big-endian
/// - FLOAT / DOUBLE: IEEE 754 bits, big-endian
/// - TEXT: varint length followed by the raw bytes
///
/// This is the baseline every other encoding is compared against.
use crate::common::error::TsPrismResult;
use crate::encoding::traits::Encoder;
use crate::encoding::varint::{write_signed_varint, write_unsigned_varint};
use crate::encoding_err;
use bytes::{BufMut, BytesMut};

/// Maximum accepted length of a single text value
pub const MAX_TEXT_LENGTH: usize = i32::MAX as usize;

/// PLAIN encoder, stateless for every primitive
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainEncoder;

impl PlainEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder<i32> for PlainEncoder {
    fn encode(&mut self, value: &i32, out: &mut BytesMut) -> TsPrismResult<()> {
        write_signed_varint(out, *value as i64);
        Ok(())
    }

    fn flush(self: Box<Self>, _out: &mut BytesMut) -> TsPrismResult<()> {
        Ok(())
    }
}

impl Encoder<i64> for PlainEncoder {
    fn encode(&mut self, value: &i64, out: &mut BytesMut) -> TsPrismResult<()> {
        out.put_i64(*value);
        Ok(())
    }

    fn flush(self: Box<Self>, _out: &mut BytesMut) -> TsPrismResult<()> {
        Ok(())
    }
}

impl Encoder<f32> for PlainEncoder {
    fn encode(&mut self, value: &f32, out: &mut BytesMut) -> TsPrismResult<()> {
        out.put_f32(*value);
        Ok(())
    }

    fn flush(self: Box<Self>, _out: &mut BytesMut) -> TsPrismResult<()> {
        Ok(())
    }
}

impl Encoder<f64> for PlainEncoder {
    fn encode(&mut self, value: &f64, out: &mut BytesMut) -> TsPrismResult<()> {
        out.put_f64(*value);
        Ok(())
    }

    fn flush(self: Box<Self>, _out: &mut BytesMut) -> TsPrismResult<()> {
        Ok(())
    }
}

impl Encoder<[u8]> for PlainEncoder {
    fn encode(&mut self, value: &[u8], out: &mut BytesMut) -> TsPrismResult<()> {
        if value.len() > MAX_TEXT_LENGTH {
            return Err(encoding_err!(
                "text value of {} bytes exceeds the {} byte limit",
                value.len(),
                MAX_TEXT_LENGTH
            ));
        }
        write_unsigned_varint(out, value.len() as u64);
        out.put_slice(value);
        Ok(())
    }

    fn flush(self: Box<Self>, _out: &mut BytesMut) -> TsPrismResult<()> {
        Ok(())
    }
}
