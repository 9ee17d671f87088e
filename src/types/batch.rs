/// Push-style value sources
///
/// A `ValueCursor` is the interface page readers expose: a cursor that is
/// positioned on a current value and advanced explicitly. `BatchData` is the
/// in-memory implementation used for a decoded data page.
use crate::types::logical_type::LogicalType;
use crate::types::value::Value;

/// Cursor over a column's values
pub trait ValueCursor {
    /// Logical type shared by every value of the column
    fn data_type(&self) -> LogicalType;

    /// Returns whether the cursor is positioned on a value
    fn has_current(&self) -> bool;

    /// Returns the current value, `None` once exhausted
    fn current(&self) -> Option<&Value>;

    /// Moves to the next value
    fn advance(&mut self);
}

/// One decoded page of values with a read position
#[derive(Debug, Clone)]
pub struct BatchData {
    data_type: LogicalType,
    values: Vec<Value>,
    position: usize,
}

impl BatchData {
    /// Creates an empty batch for the given type
    pub fn new(data_type: LogicalType) -> Self {
        Self {
            data_type,
            values: Vec::new(),
            position: 0,
        }
    }

    /// Creates a batch from already decoded values
    pub fn with_values(data_type: LogicalType, values: Vec<Value>) -> Self {
        Self {
            data_type,
            values,
            position: 0,
        }
    }

    /// Appends a value at the end of the batch
    pub fn put(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Number of values in the batch, regardless of the read position
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rewinds the read position to the first value
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl ValueCursor for BatchData {
    fn data_type(&self) -> LogicalType {
        self.data_type
    }

    fn has_current(&self) -> bool {
        self.position < self.values.len()
    }

    fn current(&self) -> Option<&Value> {
        self.values.get(self.position)
    }

    fn advance(&mut self) {
        if self.position < self.values.len() {
            self.position += 1;
        }
    }
}
