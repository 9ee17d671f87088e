/// DICTIONARY encoding
///
/// Dictionary encoding maps values to integer indices, storing the unique values
/// in a dictionary and replacing each occurrence with its index.
///
/// Layout written on flush:
///
/// ```text
/// varint(entry_count) (varint(len) bytes)*  RLE page of i32 indices
/// ```
///
/// Best for:
/// - Low-cardinality text (e.g., device states, region codes)
/// - Categorical labels
///
/// Compression ratio:
/// - Low cardinality: 10-1000x, the index page collapses into RLE runs
/// - High cardinality: ~1x or may expand
use crate::common::error::TsPrismResult;
use crate::encoding::plain::MAX_TEXT_LENGTH;
use crate::encoding::rle::RleEncoder;
use crate::encoding::traits::Encoder;
use crate::encoding::varint::write_unsigned_varint;
use crate::encoding_err;
use bytes::{BufMut, BytesMut};
use std::collections::HashMap;

/// DICTIONARY encoder for text values
pub struct DictionaryEncoder {
    entries: Vec<Vec<u8>>,
    lookup: HashMap<Vec<u8>, i32>,
    indices: RleEncoder<i32>,
}

impl DictionaryEncoder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            lookup: HashMap::new(),
            indices: RleEncoder::new(),
        }
    }

    /// Number of distinct values seen so far
    pub fn dictionary_size(&self) -> usize {
        self.entries.len()
    }

    fn index_of(&mut self, value: &[u8]) -> TsPrismResult<i32> {
        if let Some(&index) = self.lookup.get(value) {
            return Ok(index);
        }
        if value.len() > MAX_TEXT_LENGTH {
            return Err(encoding_err!(
                "text value of {} bytes exceeds the {} byte limit",
                value.len(),
                MAX_TEXT_LENGTH
            ));
        }
        let index = i32::try_from(self.entries.len())
            .map_err(|_| encoding_err!("dictionary is full"))?;
        self.entries.push(value.to_vec());
        self.lookup.insert(value.to_vec(), index);
        Ok(index)
    }
}

impl Default for DictionaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder<[u8]> for DictionaryEncoder {
    fn encode(&mut self, value: &[u8], _out: &mut BytesMut) -> TsPrismResult<()> {
        let index = self.index_of(value)?;
        self.indices.push(index);
        Ok(())
    }

    fn flush(self: Box<Self>, out: &mut BytesMut) -> TsPrismResult<()> {
        let DictionaryEncoder {
            entries, indices, ..
        } = *self;

        write_unsigned_varint(out, entries.len() as u64);
        for entry in &entries {
            write_unsigned_varint(out, entry.len() as u64);
            out.put_slice(entry);
        }
        Box::new(indices).flush(out)
    }
}
