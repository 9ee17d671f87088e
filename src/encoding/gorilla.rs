/// GORILLA encoding
///
/// XOR-based bit packing from "Gorilla: A Fast, Scalable, In-Memory Time
/// Series Database". Each value is XORed with its predecessor:
/// - `0`: identical to the previous value
/// - `10` + meaningful bits: the XOR fits the previous leading/trailing window
/// - `11` + leading zeros + significant length + meaningful bits: new window
///
/// The first value is written in full. Integers use their two's complement
/// bits, floats their IEEE 754 bits. On flush an end marker value is encoded
/// (`MIN` for integers, `NaN` for floats) and the final byte is zero padded.
use crate::common::error::TsPrismResult;
use crate::encoding::bit_writer::BitWriter;
use crate::encoding::traits::Encoder;
use bytes::BytesMut;
use std::marker::PhantomData;

/// Primitive that can be XOR packed
pub trait XorBits: Copy + Send + 'static {
    /// Width of the value in bits (32 or 64)
    const WIDTH: u32;

    /// Bits used for the leading zero count and the significant length
    const FIELD_BITS: u32;

    fn to_bits(self) -> u64;

    fn end_marker() -> Self;
}

impl XorBits for i32 {
    const WIDTH: u32 = 32;
    const FIELD_BITS: u32 = 5;

    fn to_bits(self) -> u64 {
        self as u32 as u64
    }

    fn end_marker() -> Self {
        i32::MIN
    }
}

impl XorBits for i64 {
    const WIDTH: u32 = 64;
    const FIELD_BITS: u32 = 6;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn end_marker() -> Self {
        i64::MIN
    }
}

impl XorBits for f32 {
    const WIDTH: u32 = 32;
    const FIELD_BITS: u32 = 5;

    fn to_bits(self) -> u64 {
        f32::to_bits(self) as u64
    }

    fn end_marker() -> Self {
        f32::NAN
    }
}

impl XorBits for f64 {
    const WIDTH: u32 = 64;
    const FIELD_BITS: u32 = 6;

    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    fn end_marker() -> Self {
        f64::NAN
    }
}

/// GORILLA encoder for one primitive width
pub struct GorillaEncoder<T: XorBits> {
    writer: BitWriter,
    previous: Option<u64>,
    /// (leading zeros, trailing zeros) of the last written window
    window: Option<(u32, u32)>,
    _marker: PhantomData<T>,
}

impl<T: XorBits> GorillaEncoder<T> {
    pub fn new() -> Self {
        Self {
            writer: BitWriter::new(),
            previous: None,
            window: None,
            _marker: PhantomData,
        }
    }

    fn write_value(&mut self, bits: u64, out: &mut BytesMut) {
        let previous = match self.previous {
            None => {
                self.writer.write_bits(bits, T::WIDTH, out);
                self.previous = Some(bits);
                return;
            }
            Some(previous) => previous,
        };
        self.previous = Some(bits);

        let xor = bits ^ previous;
        if xor == 0 {
            self.writer.write_bit(false, out);
            return;
        }
        self.writer.write_bit(true, out);

        let leading = xor.leading_zeros() - (64 - T::WIDTH);
        let trailing = xor.trailing_zeros();

        match self.window {
            Some((stored_leading, stored_trailing))
                if leading >= stored_leading && trailing >= stored_trailing =>
            {
                self.writer.write_bit(false, out);
                let significant = T::WIDTH - stored_leading - stored_trailing;
                self.writer
                    .write_bits(xor >> stored_trailing, significant, out);
            }
            _ => {
                self.writer.write_bit(true, out);
                let significant = T::WIDTH - leading - trailing;
                self.writer.write_bits(leading as u64, T::FIELD_BITS, out);
                // significant is in 1..=WIDTH, stored minus one to fit FIELD_BITS
                self.writer
                    .write_bits((significant - 1) as u64, T::FIELD_BITS, out);
                self.writer.write_bits(xor >> trailing, significant, out);
                self.window = Some((leading, trailing));
            }
        }
    }
}

impl<T: XorBits> Default for GorillaEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: XorBits> Encoder<T> for GorillaEncoder<T> {
    fn encode(&mut self, value: &T, out: &mut BytesMut) -> TsPrismResult<()> {
        self.write_value(value.to_bits(), out);
        Ok(())
    }

    fn flush(mut self: Box<Self>, out: &mut BytesMut) -> TsPrismResult<()> {
        self.write_value(T::end_marker().to_bits(), out);
        self.writer.flush(out);
        Ok(())
    }
}
