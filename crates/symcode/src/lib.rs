//! High-level facade for the `symcode-*` workspace: a multi-symbology
//! barcode encoding and rendering engine.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - the encode dispatcher (validation, GS1/Unicode/ECI input
//!   normalization, encoder routing, post-encode policy)
//! - the boundary operations: encode from a buffer, a file or pre-split
//!   segments, render to a raster buffer or vector scene, and (feature
//!   `image`) write the rendered symbol to a file.
//!
//! ## Quickstart
//!
//! ```
//! use symcode::{ops, Symbol};
//!
//! # fn main() -> Result<(), symcode::Error> {
//! let mut symbol = Symbol::new();
//! symbol.symbology = 47; // MSI Plessey
//! ops::encode(&mut symbol, b"123456789012")?;
//! assert_eq!(symbol.text, "1234567890128"); // Mod-10 check digit appended
//!
//! ops::buffer_vector(&mut symbol, 0)?;
//! let scene = symbol.vector.as_ref().unwrap();
//! assert!(!scene.rects.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`symcode_core`] (re-exported at the root): symbol state, bit matrix,
//!   scene primitives, error/status taxonomy.
//! - [`registry`]: symbology ids, names, capability flags, version profiles.
//! - [`linear`]: the worked linear encoders (MSI Plessey, Code 39).
//! - [`render`]: vector scene construction and rasterization.
//! - [`ops`]: the boundary operations consumed by bindings and tooling.
//!
//! ## Concurrency
//!
//! The engine is a pure, synchronous computation library. Distinct
//! [`Symbol`] values are fully independent; the registry is initialized once
//! and read-only afterwards. One symbol must not be mutated from two threads
//! at once, which `&mut` receivers enforce at compile time.

pub use symcode_linear as linear;
pub use symcode_registry as registry;
pub use symcode_render as render;

pub use symcode_core::{
    output_options, status, BitMatrix, Circle, ColourIndex, Encoded, Error, Hexagon, InputMode,
    Raster, Rect, Segment, Status, Symbol, TextString, VectorScene, Warning, COLS_MAX,
    DEFAULT_HEIGHT, MAX_DATA_LEN, ROWS_MAX,
};
pub use symcode_registry::{caps, version, Profile, Registry, Symbology};
pub use symcode_render::Rotation;

pub use symcode_core::init_with_level;
#[cfg(feature = "tracing")]
pub use symcode_core::init_tracing;

mod dispatch;
pub mod gs1;
pub mod ops;

/// True if `symbology` is a usable id in this build.
pub fn valid_id(symbology: u32) -> bool {
    registry::registry().is_valid_id(symbology)
}

/// Canonical short name of a symbology id.
pub fn barcode_name(symbology: u32) -> Result<&'static str, registry::RegistryError> {
    registry::registry().barcode_name(symbology)
}

/// Capability flags of a symbology, intersected with `requested` (zero
/// requests all).
pub fn cap(symbology: u32, requested: u32) -> u32 {
    registry::registry().cap(symbology, requested)
}
