//! Type system module
//!
//! This module contains the core type system components:
//! - LogicalType: the value domain tag of a column
//! - Value: single typed primitives
//! - BatchData / ValueCursor: push-style value sources

pub mod batch;
pub mod logical_type;
pub mod value;

// Re-export main types for convenience
pub use batch::{BatchData, ValueCursor};
pub use logical_type::LogicalType;
pub use value::Value;
