//! Linear symbology encoders.
//!
//! Each encoder consumes normalized input bytes plus the symbol's tuning
//! options and produces a one-row module matrix together with the
//! human-readable text. Encoders never touch the symbol directly; the
//! dispatcher owns copy-back so a failed encode cannot leave partial state.

pub mod code39;
pub mod msi;
