use crate::common::error::{TsPrismError, TsPrismResult};
use crate::types::logical_type::LogicalType;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed primitive read from a time-series column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit signed integer
    Int64(i64),
    /// 32-bit signed integer
    Int32(i32),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit double precision
    Double(f64),
    /// Binary text
    Text(Bytes),
    /// Boolean value
    Boolean(bool),
}

impl Value {
    /// Creates a text value from anything convertible into bytes
    pub fn text(value: impl Into<Bytes>) -> Self {
        Value::Text(value.into())
    }

    /// Get the logical type of this value
    pub fn logical_type(&self) -> LogicalType {
        match self {
            Value::Int64(_) => LogicalType::Int64,
            Value::Int32(_) => LogicalType::Int32,
            Value::Float(_) => LogicalType::Float,
            Value::Double(_) => LogicalType::Double,
            Value::Text(_) => LogicalType::Text,
            Value::Boolean(_) => LogicalType::Boolean,
        }
    }

    pub fn as_i64(&self) -> TsPrismResult<&i64> {
        match self {
            Value::Int64(v) => Ok(v),
            other => Err(other.mismatch(LogicalType::Int64)),
        }
    }

    pub fn as_i32(&self) -> TsPrismResult<&i32> {
        match self {
            Value::Int32(v) => Ok(v),
            other => Err(other.mismatch(LogicalType::Int32)),
        }
    }

    pub fn as_f32(&self) -> TsPrismResult<&f32> {
        match self {
            Value::Float(v) => Ok(v),
            other => Err(other.mismatch(LogicalType::Float)),
        }
    }

    pub fn as_f64(&self) -> TsPrismResult<&f64> {
        match self {
            Value::Double(v) => Ok(v),
            other => Err(other.mismatch(LogicalType::Double)),
        }
    }

    pub fn as_bytes(&self) -> TsPrismResult<&[u8]> {
        match self {
            Value::Text(v) => Ok(v.as_ref()),
            other => Err(other.mismatch(LogicalType::Text)),
        }
    }

    fn mismatch(&self, expected: LogicalType) -> TsPrismError {
        TsPrismError::TypeMismatch {
            expected: expected.name().to_string(),
            found: self.logical_type().name().to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int64(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", String::from_utf8_lossy(v)),
            Value::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(Bytes::copy_from_slice(v.as_bytes()))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}
