//! Error, warning and status taxonomy shared by the whole engine.
//!
//! The external contract is a two-band numeric status: `0` success, `1..=4`
//! warnings (output was produced and is usable), `>=5` errors (no usable
//! output). [`Error`] covers the error band, [`Warning`] the warning band,
//! and [`Status`] is what a successful encode/render returns to the caller.

use thiserror::Error;

/// Numeric status codes of the two-band contract.
pub mod status {
    pub const OK: u32 = 0;
    /// An out-of-range option was replaced by its documented default.
    pub const WARN_INVALID_OPTION: u32 = 2;
    /// An ECI escape was inserted to represent the input.
    pub const WARN_USES_ECI: u32 = 3;
    /// Output violates the symbology's compliance rule but was produced.
    pub const WARN_NONCOMPLIANT: u32 = 4;
    pub const ERR_TOO_LONG: u32 = 5;
    pub const ERR_INVALID_DATA: u32 = 6;
    pub const ERR_INVALID_CHECK: u32 = 7;
    pub const ERR_INVALID_OPTION: u32 = 8;
    pub const ERR_ENCODING_PROBLEM: u32 = 9;
    pub const ERR_FILE_ACCESS: u32 = 10;
    pub const ERR_MEMORY: u32 = 11;
    pub const ERR_FILE_WRITE: u32 = 12;
    pub const ERR_ECI_REQUIRED: u32 = 13;
    pub const ERR_NONCOMPLIANT: u32 = 14;
}

/// Hard failures: no usable output was produced.
///
/// Every variant carries enough context to render a human-readable
/// diagnostic; the numeric code is recovered through [`Error::status`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("symbology {0} is not a valid id in this build")]
    InvalidSymbology(u32),

    #[error("input too long ({length} > maximum {max})")]
    DataTooLong { length: usize, max: usize },

    #[error("invalid input data: {0}")]
    InvalidData(String),

    #[error("check character mismatch: expected '{expected}', found '{found}'")]
    InvalidCheck { expected: char, found: char },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("no representation for U+{codepoint:04X} in the symbology character set")]
    EncodingProblem { codepoint: u32 },

    #[error("cannot read input file '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("output of {requested} bytes exceeds the allocation ceiling of {limit}")]
    Memory { requested: usize, limit: usize },

    #[error("cannot write output file '{path}': {reason}")]
    FileWrite { path: String, reason: String },

    #[error("input requires an ECI escape: {0}")]
    EciRequired(String),

    #[error("symbology compliance rule violated: {0}")]
    NonCompliant(String),
}

impl Error {
    /// Numeric code in the error band (`>= 5`).
    pub fn status(&self) -> u32 {
        match self {
            // InvalidSymbology has no dedicated slot in the original code
            // table; it reports as a fatal option error.
            Error::InvalidSymbology(_) => status::ERR_INVALID_OPTION,
            Error::DataTooLong { .. } => status::ERR_TOO_LONG,
            Error::InvalidData(_) => status::ERR_INVALID_DATA,
            Error::InvalidCheck { .. } => status::ERR_INVALID_CHECK,
            Error::InvalidOption(_) => status::ERR_INVALID_OPTION,
            Error::EncodingProblem { .. } => status::ERR_ENCODING_PROBLEM,
            Error::FileAccess { .. } => status::ERR_FILE_ACCESS,
            Error::Memory { .. } => status::ERR_MEMORY,
            Error::FileWrite { .. } => status::ERR_FILE_WRITE,
            Error::EciRequired(_) => status::ERR_ECI_REQUIRED,
            Error::NonCompliant(_) => status::ERR_NONCOMPLIANT,
        }
    }
}

/// A recoverable diagnostic: the engine substituted a safe default (or noted
/// a compliance deviation) and kept going.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub code: u32,
    pub message: String,
}

impl Warning {
    pub fn option_defaulted(message: impl Into<String>) -> Self {
        Self {
            code: status::WARN_INVALID_OPTION,
            message: message.into(),
        }
    }

    pub fn uses_eci(message: impl Into<String>) -> Self {
        Self {
            code: status::WARN_USES_ECI,
            message: message.into(),
        }
    }

    pub fn non_compliant(message: impl Into<String>) -> Self {
        Self {
            code: status::WARN_NONCOMPLIANT,
            message: message.into(),
        }
    }
}

/// Outcome of a successful operation: clean, or produced-with-warnings.
///
/// Warnings accumulate: the worst (highest) code wins and messages are
/// joined so none is silently dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub code: u32,
    pub message: String,
}

impl Status {
    pub fn ok() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.code == status::OK
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.code != status::OK
    }

    /// Fold one warning into the accumulated status.
    pub fn absorb(&mut self, warning: Warning) {
        if warning.code > self.code {
            self.code = warning.code;
        }
        if self.message.is_empty() {
            self.message = warning.message;
        } else {
            self.message.push_str("; ");
            self.message.push_str(&warning.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_stay_in_the_error_band() {
        let errs = [
            Error::InvalidSymbology(999),
            Error::DataTooLong { length: 10, max: 5 },
            Error::InvalidData("x".into()),
            Error::InvalidCheck { expected: '4', found: '5' },
            Error::InvalidOption("x".into()),
            Error::EncodingProblem { codepoint: 0x20AC },
            Error::Memory { requested: 1, limit: 0 },
            Error::EciRequired("x".into()),
            Error::NonCompliant("x".into()),
        ];
        for e in errs {
            assert!(e.status() >= status::ERR_TOO_LONG, "{e}");
        }
    }

    #[test]
    fn status_accumulates_worst_code_and_all_messages() {
        let mut s = Status::ok();
        s.absorb(Warning::option_defaulted("option_2 out of range, using 0"));
        s.absorb(Warning::non_compliant("height below minimum"));
        s.absorb(Warning::option_defaulted("option_3 ignored"));
        assert_eq!(s.code, status::WARN_NONCOMPLIANT);
        assert!(s.message.contains("option_2"));
        assert!(s.message.contains("height"));
        assert!(s.message.contains("option_3"));
    }
}
