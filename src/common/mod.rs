//! Common utilities and shared components

pub mod constants;
pub mod error;

pub use constants::*;
pub use error::*;
