use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical types identify the value domain of one time-series column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    /// 64-bit signed integer
    Int64,
    /// 32-bit signed integer
    Int32,
    /// 32-bit floating point
    Float,
    /// 64-bit double precision
    Double,
    /// Variable length binary text
    Text,
    /// Boolean type (not analyzable)
    Boolean,
    /// Aligned multi-measurement type (not analyzable)
    Vector,
}

impl LogicalType {
    /// Returns the canonical upper-case name, e.g. `INT64`
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Int64 => "INT64",
            LogicalType::Int32 => "INT32",
            LogicalType::Float => "FLOAT",
            LogicalType::Double => "DOUBLE",
            LogicalType::Text => "TEXT",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::Vector => "VECTOR",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
