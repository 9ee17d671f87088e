/// Encoder trait
///
/// Every encoding scheme implements this trait once per primitive it accepts.
/// Encoders may hold running state (previous value, pending run, open block)
/// and write into a caller-owned buffer.
use crate::common::error::TsPrismResult;
use bytes::BytesMut;

/// Stateful value encoder for primitives of type `T`
pub trait Encoder<T: ?Sized>: Send {
    /// Appends one value
    ///
    /// Encoders that buffer internally may write nothing to `out` until
    /// a block fills up or `flush` is called.
    fn encode(&mut self, value: &T, out: &mut BytesMut) -> TsPrismResult<()>;

    /// Writes all pending state to `out`
    ///
    /// Consumes the encoder: no value can be appended after a flush.
    fn flush(self: Box<Self>, out: &mut BytesMut) -> TsPrismResult<()>;
}
