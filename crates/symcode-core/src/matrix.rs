//! Fixed-capacity, bit-packed module matrix.
//!
//! Encoders write the machine-readable symbol here, one bit per module in
//! row-major order. Capacity is bounded by design: [`ROWS_MAX`] rows of
//! [`COLS_BYTES`] packed bytes each, so a row never exceeds [`COLS_MAX`]
//! modules. Encoders that would overflow must fail before writing.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Maximum number of rows in an encoded symbol.
pub const ROWS_MAX: usize = 178;
/// Packed bytes per row.
pub const COLS_BYTES: usize = 178;
/// Maximum number of modules per row.
pub const COLS_MAX: usize = COLS_BYTES * 8;

/// Row-major bit matrix with fixed capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitMatrix {
    #[serde(with = "packed_rows")]
    rows: Vec<[u8; COLS_BYTES]>,
    width: usize,
}

/// Serde representation of the packed rows: a sequence of byte sequences.
/// Serde has no derive support for 178-byte arrays, and the wire form should
/// not depend on the internal row capacity anyway.
mod packed_rows {
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::COLS_BYTES;

    pub fn serialize<S>(rows: &[[u8; COLS_BYTES]], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(rows.len()))?;
        for row in rows {
            seq.serialize_element(&row[..])?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<[u8; COLS_BYTES]>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<Vec<u8>> = Vec::deserialize(deserializer)?;
        raw.into_iter()
            .map(|bytes| {
                if bytes.len() > COLS_BYTES {
                    return Err(D::Error::invalid_length(
                        bytes.len(),
                        &"at most 178 packed bytes per row",
                    ));
                }
                let mut row = [0u8; COLS_BYTES];
                row[..bytes.len()].copy_from_slice(&bytes);
                Ok(row)
            })
            .collect()
    }
}

impl BitMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Width in modules of the widest row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Module state at `(row, col)`. Out-of-range coordinates read as unset.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows.len() || col >= COLS_MAX {
            return false;
        }
        self.rows[row][col / 8] & (0x80 >> (col % 8)) != 0
    }

    /// Append a row from an iterator of module states.
    ///
    /// Fails with [`Error::DataTooLong`] if the matrix is already at row
    /// capacity or the row is wider than [`COLS_MAX`]; nothing is written in
    /// that case.
    pub fn push_row(&mut self, modules: impl IntoIterator<Item = bool>) -> Result<(), Error> {
        if self.rows.len() == ROWS_MAX {
            return Err(Error::DataTooLong {
                length: ROWS_MAX + 1,
                max: ROWS_MAX,
            });
        }

        let mut packed = [0u8; COLS_BYTES];
        let mut len = 0usize;
        for module in modules {
            if len == COLS_MAX {
                return Err(Error::DataTooLong {
                    length: len + 1,
                    max: COLS_MAX,
                });
            }
            if module {
                packed[len / 8] |= 0x80 >> (len % 8);
            }
            len += 1;
        }

        self.rows.push(packed);
        self.width = self.width.max(len);
        Ok(())
    }

    /// Append a row given as a `'0'`/`'1'` module pattern.
    pub fn push_pattern(&mut self, pattern: &str) -> Result<(), Error> {
        self.push_row(pattern.bytes().map(|b| b == b'1'))
    }

    /// Drop all rows, keeping the allocation.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.width = 0;
    }

    /// Iterate over the set-module runs of one row as `(start, len)` pairs.
    ///
    /// Runs are maximal: adjacent set modules are always reported as one run.
    pub fn runs(&self, row: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        let mut col = 0usize;
        std::iter::from_fn(move || {
            while col < width && !self.get(row, col) {
                col += 1;
            }
            if col >= width {
                return None;
            }
            let start = col;
            while col < width && self.get(row, col) {
                col += 1;
            }
            Some((start, col - start))
        })
    }
}
