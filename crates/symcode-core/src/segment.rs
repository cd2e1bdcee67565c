//! Input segments with per-segment ECI designators.

use serde::{Deserialize, Serialize};

/// Symbology-independent cap on the combined input length in bytes.
pub const MAX_DATA_LEN: usize = 17400;

/// One span of input bytes tagged with an ECI designator.
///
/// Single-segment input is the common case; multiple segments carry mixed
/// character encodings within one symbol. `eci == 0` means "no explicit
/// designator" (the symbology's default interpretation applies).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub data: Vec<u8>,
    pub eci: u32,
}

impl Segment {
    /// Segment without an explicit ECI designator.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            eci: 0,
        }
    }

    pub fn with_eci(data: impl Into<Vec<u8>>, eci: u32) -> Self {
        Self {
            data: data.into(),
            eci,
        }
    }
}
