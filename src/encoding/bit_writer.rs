//! MSB-first bit packing into a byte buffer

use bytes::{BufMut, BytesMut};

/// Accumulates bits into a pending byte and spills full bytes into `out`
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    pending: u8,
    used: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bit(&mut self, bit: bool, out: &mut BytesMut) {
        if bit {
            self.pending |= 1 << (7 - self.used);
        }
        self.used += 1;
        if self.used == 8 {
            out.put_u8(self.pending);
            self.pending = 0;
            self.used = 0;
        }
    }

    /// Writes the low `count` bits of `value`, most significant first
    pub fn write_bits(&mut self, value: u64, count: u32, out: &mut BytesMut) {
        debug_assert!(count <= 64);
        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 == 1, out);
        }
    }

    /// Pads the pending byte with zeros and spills it
    pub fn flush(&mut self, out: &mut BytesMut) {
        if self.used > 0 {
            out.put_u8(self.pending);
            self.pending = 0;
            self.used = 0;
        }
    }
}

/// Number of bits needed to represent `value`
#[inline]
pub fn bit_width(value: u64) -> u32 {
    64 - value.leading_zeros()
}

/// Packs every value at a fixed `width` and pads the last byte
pub fn pack_bits(values: impl IntoIterator<Item = u64>, width: u32, out: &mut BytesMut) {
    let mut writer = BitWriter::new();
    for value in values {
        writer.write_bits(value, width, out);
    }
    writer.flush(out);
}
