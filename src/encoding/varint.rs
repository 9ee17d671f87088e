//! LEB128 varints and zigzag mapping

use bytes::{BufMut, BytesMut};

/// Writes `value` as an unsigned LEB128 varint, returns the bytes written
pub fn write_unsigned_varint(out: &mut BytesMut, mut value: u64) -> usize {
    let mut written = 1;
    while value >= 0x80 {
        out.put_u8((value as u8) | 0x80);
        value >>= 7;
        written += 1;
    }
    out.put_u8(value as u8);
    written
}

/// Maps signed integers onto unsigned so that small magnitudes stay small
#[inline]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Writes `value` zigzag mapped as a varint
pub fn write_signed_varint(out: &mut BytesMut, value: i64) -> usize {
    write_unsigned_varint(out, zigzag_encode(value))
}
