/// Encode fan-out
///
/// Streams a column once and feeds every value to all applicable encoders in
/// the same step. Each encoder writes into its own buffer; after the stream
/// ends every encoder is flushed exactly once.
use crate::analysis::record::EncodedColumn;
use crate::analysis::selector::{new_fan_out, ColumnKind};
use crate::common::constants::ENCODER_BUFFER_CAPACITY;
use crate::common::error::{TsPrismError, TsPrismResult};
use crate::encoding::{Encoder, EncodingType};
use crate::types::{LogicalType, Value, ValueCursor};
use bytes::BytesMut;
use tracing::debug;

/// One encoding with its running encoder and exclusively owned output buffer
pub struct EncoderSpec<T: ?Sized> {
    encoding: EncodingType,
    encoder: Box<dyn Encoder<T>>,
    buffer: BytesMut,
}

impl<T: ?Sized> EncoderSpec<T> {
    pub fn new(encoding: EncodingType, encoder: Box<dyn Encoder<T>>) -> Self {
        Self {
            encoding,
            encoder,
            buffer: BytesMut::with_capacity(ENCODER_BUFFER_CAPACITY),
        }
    }

    pub fn encoding(&self) -> EncodingType {
        self.encoding
    }

    pub fn feed(&mut self, value: &T) -> TsPrismResult<()> {
        self.encoder.encode(value, &mut self.buffer)
    }

    /// Flushes the encoder and hands over the buffer
    pub fn finalize(self) -> TsPrismResult<EncodedColumn> {
        let EncoderSpec {
            encoding,
            encoder,
            mut buffer,
        } = self;
        encoder.flush(&mut buffer)?;
        Ok(EncodedColumn::new(encoding, buffer.freeze()))
    }
}

/// Type-erased fan-out over one column
pub trait ColumnFanOut {
    fn data_type(&self) -> LogicalType;

    /// Encodings fed by this fan-out, in order
    fn encodings(&self) -> Vec<EncodingType>;

    /// Feeds one value to every encoder
    fn push(&mut self, value: &Value) -> TsPrismResult<()>;

    /// Number of values pushed so far
    fn value_count(&self) -> usize;

    /// Flushes every encoder once
    fn finish(self: Box<Self>) -> TsPrismResult<Vec<EncodedColumn>>;
}

/// Fan-out for one column kind
pub struct FanOut<K: ColumnKind> {
    specs: Vec<EncoderSpec<K::Native>>,
    value_count: usize,
}

impl<K: ColumnKind> FanOut<K> {
    pub fn new() -> TsPrismResult<Self> {
        Ok(Self {
            specs: K::encoder_specs()?,
            value_count: 0,
        })
    }
}

impl<K: ColumnKind> ColumnFanOut for FanOut<K> {
    fn data_type(&self) -> LogicalType {
        K::DATA_TYPE
    }

    fn encodings(&self) -> Vec<EncodingType> {
        self.specs.iter().map(EncoderSpec::encoding).collect()
    }

    fn push(&mut self, value: &Value) -> TsPrismResult<()> {
        let native = K::extract(value)?;
        for spec in &mut self.specs {
            spec.feed(native)?;
        }
        self.value_count += 1;
        Ok(())
    }

    fn value_count(&self) -> usize {
        self.value_count
    }

    fn finish(self: Box<Self>) -> TsPrismResult<Vec<EncodedColumn>> {
        self.specs.into_iter().map(EncoderSpec::finalize).collect()
    }
}

/// Flushes a fed fan-out, `None` when no value was pushed
fn drain(fan_out: Box<dyn ColumnFanOut>) -> TsPrismResult<Option<Vec<EncodedColumn>>> {
    if fan_out.value_count() == 0 {
        debug!(data_type = %fan_out.data_type(), "empty column, nothing to analyze");
        return Ok(None);
    }
    debug!(
        data_type = %fan_out.data_type(),
        value_count = fan_out.value_count(),
        "flushing encoders"
    );
    fan_out.finish().map(Some)
}

/// Encodes a materialized column with every applicable encoder
///
/// The column type is taken from the first value. Returns `None` for an empty
/// slice or a type that is not analyzable.
pub fn accumulate_values(values: &[Value]) -> TsPrismResult<Option<Vec<EncodedColumn>>> {
    let data_type = match values.first() {
        Some(first) => first.logical_type(),
        None => {
            debug!("empty column, nothing to analyze");
            return Ok(None);
        }
    };
    let mut fan_out = match new_fan_out(data_type)? {
        Some(fan_out) => fan_out,
        None => {
            debug!(%data_type, "type is not analyzable");
            return Ok(None);
        }
    };

    for value in values {
        fan_out.push(value)?;
    }
    drain(fan_out)
}

/// Encodes the values remaining under a cursor with every applicable encoder
pub fn accumulate_cursor<C: ValueCursor + ?Sized>(
    cursor: &mut C,
) -> TsPrismResult<Option<Vec<EncodedColumn>>> {
    let data_type = cursor.data_type();
    let mut fan_out = match new_fan_out(data_type)? {
        Some(fan_out) => fan_out,
        None => {
            debug!(%data_type, "type is not analyzable");
            return Ok(None);
        }
    };

    while cursor.has_current() {
        let value = cursor.current().ok_or_else(|| {
            TsPrismError::Cursor(format!(
                "{} cursor has no value at position {}",
                data_type,
                fan_out.value_count()
            ))
        })?;
        fan_out.push(value)?;
        cursor.advance();
    }
    drain(fan_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BatchData;

    /// Claims three values but loses the second one
    struct GappyCursor {
        values: Vec<Option<Value>>,
        position: usize,
    }

    impl ValueCursor for GappyCursor {
        fn data_type(&self) -> LogicalType {
            LogicalType::Int64
        }

        fn has_current(&self) -> bool {
            self.position < self.values.len()
        }

        fn current(&self) -> Option<&Value> {
            self.values.get(self.position).and_then(Option::as_ref)
        }

        fn advance(&mut self) {
            self.position += 1;
        }
    }

    #[test]
    fn test_every_encoder_sees_every_value() {
        let values: Vec<Value> = (0..300i64).map(Value::Int64).collect();
        let columns = accumulate_values(&values).unwrap().unwrap();

        let encodings: Vec<_> = columns.iter().map(|c| c.encoding).collect();
        assert_eq!(
            encodings,
            vec![
                EncodingType::Plain,
                EncodingType::Gorilla,
                EncodingType::Rle,
                EncodingType::Ts2Diff,
            ]
        );
        // plain int64 is 8 bytes per value, so it saw all 300 values
        assert_eq!(columns[0].origin_size(), 2400);
        assert!(columns.iter().all(|c| c.origin_size() > 0));
    }

    #[test]
    fn test_flush_writes_pending_state() {
        // RLE and dictionary write nothing until flushed
        let values = vec![Value::from("on"); 50];
        let columns = accumulate_values(&values).unwrap().unwrap();
        assert_eq!(columns[1].encoding, EncodingType::Dictionary);
        assert!(columns[1].origin_size() > 0);
    }

    #[test]
    fn test_empty_and_unsupported() {
        assert!(accumulate_values(&[]).unwrap().is_none());
        assert!(accumulate_values(&[Value::Boolean(true)]).unwrap().is_none());

        let mut empty = BatchData::new(LogicalType::Double);
        assert!(accumulate_cursor(&mut empty).unwrap().is_none());
    }

    #[test]
    fn test_type_mismatch_aborts() {
        let values = vec![Value::Int32(1), Value::Int32(2), Value::Int64(3)];
        let err = accumulate_values(&values).unwrap_err();
        assert!(matches!(err, TsPrismError::TypeMismatch { .. }));
    }

    #[test]
    fn test_cursor_without_current_value_fails() {
        let mut cursor = GappyCursor {
            values: vec![Some(Value::Int64(1)), None, Some(Value::Int64(3))],
            position: 0,
        };
        let err = accumulate_cursor(&mut cursor).unwrap_err();
        assert!(matches!(err, TsPrismError::Cursor(_)));
        assert_eq!(cursor.position, 1);
    }

    #[test]
    fn test_cursor_matches_slice() {
        let values: Vec<Value> = (0..500).map(|i| Value::Double((i as f64).sin())).collect();
        let mut batch = BatchData::with_values(LogicalType::Double, values.clone());

        let from_cursor = accumulate_cursor(&mut batch).unwrap().unwrap();
        let from_slice = accumulate_values(&values).unwrap().unwrap();
        assert_eq!(from_cursor, from_slice);
        assert!(!batch.has_current());
    }

    #[test]
    fn test_spec_finalize_consumes() {
        let mut spec = EncoderSpec::<i64>::new(
            EncodingType::Plain,
            Box::new(crate::encoding::PlainEncoder::new()),
        );
        spec.feed(&1).unwrap();
        spec.feed(&2).unwrap();
        let column = spec.finalize().unwrap();
        assert_eq!(column.origin_size(), 16);
    }
}
