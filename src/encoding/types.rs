/// Encoding schemes known to the analyzer
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value encoding identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingType {
    /// Fixed width or varint values, no transformation
    Plain,

    /// XOR with the previous value, leading/trailing zero window
    /// Best for: slowly changing gauges, repeated floats
    Gorilla,

    /// Run-length / bit-packing hybrid
    /// Best for: low-cardinality integers, long constant stretches
    Rle,

    /// Delta against the previous value, bit-packed per block above the block minimum
    /// Best for: timestamps and monotonically increasing counters
    Ts2Diff,

    /// Distinct values table plus RLE-coded indices
    /// Best for: low-cardinality text
    Dictionary,
}

impl EncodingType {
    /// Returns the canonical name, e.g. `TS_2DIFF`
    pub fn name(&self) -> &'static str {
        match self {
            EncodingType::Plain => "PLAIN",
            EncodingType::Gorilla => "GORILLA",
            EncodingType::Rle => "RLE",
            EncodingType::Ts2Diff => "TS_2DIFF",
            EncodingType::Dictionary => "DICTIONARY",
        }
    }
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_type_name() {
        assert_eq!(EncodingType::Plain.name(), "PLAIN");
        assert_eq!(EncodingType::Gorilla.name(), "GORILLA");
        assert_eq!(EncodingType::Rle.name(), "RLE");
        assert_eq!(EncodingType::Ts2Diff.to_string(), "TS_2DIFF");
        assert_eq!(EncodingType::Dictionary.to_string(), "DICTIONARY");
    }
}
