//! Core types for the symcode barcode engine.
//!
//! This crate is intentionally small and purely in-memory. It does *not*
//! depend on any concrete symbology encoder or raster codec: it defines the
//! symbol state one encode operation mutates, the bit matrix encoders write
//! into, the vector scene and raster buffer renderers emit, and the shared
//! error/status taxonomy.

mod error;
mod logger;
mod matrix;
mod scene;
mod segment;
mod symbol;

pub use error::{Error, Status, Warning, status};
pub use matrix::{BitMatrix, COLS_BYTES, COLS_MAX, ROWS_MAX};
pub use scene::{Circle, ColourIndex, Hexagon, Raster, Rect, TextString, VectorScene};
pub use segment::{Segment, MAX_DATA_LEN};
pub use symbol::{Encoded, InputMode, Symbol, output_options, DEFAULT_HEIGHT};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
