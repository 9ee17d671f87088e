/// Encoding module
///
/// Value encoders turn a stream of typed primitives into a compact byte
/// representation. They are the first stage of every analysis: each column
/// is fed to all encoders applicable to its type before any compressor runs.
///
/// ## Supported Encodings:
///
/// - **PLAIN**: Values as they are (baseline)
/// - **GORILLA**: XOR bit packing for gauges and floats
/// - **RLE**: Run-length / bit-packing hybrid for repeated integers
/// - **TS_2DIFF**: Block delta bit packing for timestamps and counters
/// - **DICTIONARY**: Distinct value table for low-cardinality text
///
/// ## Usage Example:
///
/// ```ignore
/// use tsprism::encoding::*;
///
/// let mut out = BytesMut::new();
/// let mut encoder: Box<dyn Encoder<i64>> = Box::new(Ts2DiffEncoder::new());
/// encoder.encode(&1, &mut out)?;
/// encoder.encode(&2, &mut out)?;
/// encoder.flush(&mut out)?;
/// ```

pub mod bit_writer;
pub mod dictionary;
pub mod gorilla;
pub mod plain;
pub mod rle;
pub mod traits;
pub mod ts2diff;
pub mod types;
pub mod varint;

pub use dictionary::DictionaryEncoder;
pub use gorilla::{GorillaEncoder, XorBits};
pub use plain::PlainEncoder;
pub use rle::{RleEncoder, RleValue};
pub use traits::Encoder;
pub use ts2diff::{DeltaValue, Ts2DiffEncoder};
pub use types::EncodingType;
