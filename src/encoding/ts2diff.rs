/// TS_2DIFF (delta binary) encoding
///
/// Values are grouped into blocks of `TS_2DIFF_BLOCK_SIZE`. Inside a block
/// each value is replaced by its delta to the previous one; the block
/// minimum delta is subtracted so every adjusted delta is non-negative and
/// can be bit-packed at the width of the largest one.
///
/// Block layout (big-endian):
///
/// ```text
/// u32 count | u32 width | min_delta | first_value | (count - 1) deltas at `width` bits
/// ```
///
/// `min_delta` and `first_value` use the primitive's native width.
/// A block of evenly spaced timestamps packs to a zero width and costs only
/// its header.
use crate::common::constants::TS_2DIFF_BLOCK_SIZE;
use crate::common::error::TsPrismResult;
use crate::encoding::bit_writer::{bit_width, pack_bits};
use crate::encoding::traits::Encoder;
use bytes::{BufMut, BytesMut};

/// Integer primitive accepted by the TS_2DIFF encoder
pub trait DeltaValue: Copy + Ord + Send + 'static {
    const ZERO: Self;

    fn wrapping_sub(self, other: Self) -> Self;

    /// Reinterprets the two's complement bits as an unsigned magnitude
    fn to_unsigned(self) -> u64;

    fn put_be(self, out: &mut BytesMut);
}

impl DeltaValue for i32 {
    const ZERO: Self = 0;

    fn wrapping_sub(self, other: Self) -> Self {
        i32::wrapping_sub(self, other)
    }

    fn to_unsigned(self) -> u64 {
        self as u32 as u64
    }

    fn put_be(self, out: &mut BytesMut) {
        out.put_i32(self);
    }
}

impl DeltaValue for i64 {
    const ZERO: Self = 0;

    fn wrapping_sub(self, other: Self) -> Self {
        i64::wrapping_sub(self, other)
    }

    fn to_unsigned(self) -> u64 {
        self as u64
    }

    fn put_be(self, out: &mut BytesMut) {
        out.put_i64(self);
    }
}

/// TS_2DIFF encoder
pub struct Ts2DiffEncoder<T: DeltaValue> {
    block: Vec<T>,
    deltas: Vec<T>,
}

impl<T: DeltaValue> Ts2DiffEncoder<T> {
    pub fn new() -> Self {
        Self {
            block: Vec::with_capacity(TS_2DIFF_BLOCK_SIZE),
            deltas: Vec::with_capacity(TS_2DIFF_BLOCK_SIZE),
        }
    }

    fn write_block(&mut self, out: &mut BytesMut) {
        if self.block.is_empty() {
            return;
        }

        self.deltas.clear();
        self.deltas.extend(
            self.block
                .windows(2)
                .map(|pair| pair[1].wrapping_sub(pair[0])),
        );
        let min_delta = self.deltas.iter().copied().min().unwrap_or(T::ZERO);
        let width = self
            .deltas
            .iter()
            .map(|d| bit_width(d.wrapping_sub(min_delta).to_unsigned()))
            .max()
            .unwrap_or(0);

        out.put_u32(self.block.len() as u32);
        out.put_u32(width);
        min_delta.put_be(out);
        self.block[0].put_be(out);
        pack_bits(
            self.deltas
                .iter()
                .map(|d| d.wrapping_sub(min_delta).to_unsigned()),
            width,
            out,
        );

        self.block.clear();
    }
}

impl<T: DeltaValue> Default for Ts2DiffEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeltaValue> Encoder<T> for Ts2DiffEncoder<T> {
    fn encode(&mut self, value: &T, out: &mut BytesMut) -> TsPrismResult<()> {
        self.block.push(*value);
        if self.block.len() == TS_2DIFF_BLOCK_SIZE {
            self.write_block(out);
        }
        Ok(())
    }

    fn flush(mut self: Box<Self>, out: &mut BytesMut) -> TsPrismResult<()> {
        self.write_block(out);
        Ok(())
    }
}
