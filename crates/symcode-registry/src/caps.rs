//! Capability flag bits.
//!
//! A symbology's capability word is the OR of these bits. Queries intersect
//! the word with a caller-supplied request mask; a zero request means
//! "return everything".

/// Prints human-readable text beneath/beside the symbol.
pub const HRT: u32 = 1 << 0;
/// Rows of several symbols can be stacked into one symbol.
pub const STACKABLE: u32 = 1 << 1;
/// Accepts add-on data (EAN/UPC +2/+5 style extensions).
pub const EXTENDABLE: u32 = 1 << 2;
/// Can carry a 2D composite component.
pub const COMPOSITE: u32 = 1 << 3;
/// Supports Extended Channel Interpretation escapes.
pub const ECI: u32 = 1 << 4;
/// Accepts GS1 application-identifier data.
pub const GS1: u32 = 1 << 5;
/// Can be rendered in dotty (one dot per module) mode.
pub const DOTTY: u32 = 1 << 6;
/// Aspect ratio is fixed by the standard.
pub const FIXED_RATIO: u32 = 1 << 7;
/// Can encode a reader-initialisation sequence.
pub const READER_INIT: u32 = 1 << 8;
/// Full multibyte (Kanji/Hanzi) compaction available.
pub const FULL_MULTIBYTE: u32 = 1 << 9;
/// Caller-selectable mask pattern.
pub const MASK: u32 = 1 << 10;
/// Standard mandates quiet zones.
pub const QUIET_ZONES: u32 = 1 << 11;
/// Structured append (multi-symbol payload split) available.
pub const STRUCTAPP: u32 = 1 << 12;
/// Standard mandates a minimum-height/proportion rule.
pub const COMPLIANT_HEIGHT: u32 = 1 << 13;
