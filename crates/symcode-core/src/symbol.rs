//! The symbol: state of one encode request and its results.

use serde::{Deserialize, Serialize};

use crate::{BitMatrix, Raster, VectorScene, Warning};

/// Default bar height in modules when the caller leaves `height == 0`.
pub const DEFAULT_HEIGHT: i32 = 50;

/// Output option bit flags for [`Symbol::output_options`].
pub mod output_options {
    /// Bind the symbol with horizontal boundary bars.
    pub const BIND: u32 = 2;
    /// Draw a full box around the symbol.
    pub const BOX: u32 = 4;
    /// Write render output to stdout instead of `outfile`.
    pub const STDOUT: u32 = 8;
    /// Encode a reader-initialisation sequence.
    pub const READER_INIT: u32 = 16;
    /// Render human-readable text at reduced size.
    pub const SMALL_TEXT: u32 = 32;
    /// Render one dot per module instead of bars (dotty-capable symbologies
    /// only).
    pub const DOTTY_MODE: u32 = 256;
    /// Force symbology-mandated quiet zones on.
    pub const QUIET_ZONES: u32 = 2048;
    /// Suppress quiet zones even where the symbology mandates them.
    pub const NO_QUIET_ZONES: u32 = 4096;
    /// Treat compliance-rule violations as hard errors instead of warnings.
    pub const COMPLIANT_HEIGHT: u32 = 8192;
}

/// How raw input bytes are interpreted before encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Bytes pass through untouched.
    #[default]
    Data,
    /// Input is UTF-8 and is transcoded to the symbology's native charset,
    /// falling back to ECI escapes where the symbology supports them.
    Unicode,
    /// Input is GS1 application-identifier data in bracket notation.
    Gs1,
}

/// State of one encode operation: configuration in, matrix/geometry out.
///
/// A symbol is created empty, configured by direct field assignment, and may
/// be re-encoded any number of times; each encode resets the previous
/// matrix, geometry and diagnostics. Dropping the symbol releases every
/// internally allocated buffer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    /// Numeric symbology id; must be valid in the active registry profile.
    pub symbology: u32,
    /// Requested bar height in modules; `0` selects the default.
    pub height: i32,
    /// Horizontal whitespace added on each side, in modules.
    pub whitespace_width: i32,
    /// Boundary bar / box thickness in modules.
    pub border_width: i32,
    /// Bit flags from [`output_options`].
    pub output_options: u32,
    /// Foreground colour, `RRGGBB` or `RRGGBBAA` hex.
    pub fgcolour: String,
    /// Background colour, `RRGGBB` or `RRGGBBAA` hex.
    pub bgcolour: String,
    /// Output path used by the print operation.
    pub outfile: String,
    /// Raster scale factor: pixels per module.
    pub scale: f32,
    /// Symbology-specific tuning value (semantics defined per symbology).
    pub option_1: i32,
    pub option_2: i32,
    pub option_3: i32,
    /// Show the human-readable text when rendering.
    pub show_hrt: bool,
    pub input_mode: InputMode,
    /// Default ECI designator applied to segments without one.
    pub eci: u32,
    /// Primary message for symbologies with a structured primary part.
    pub primary: String,

    /// Human-readable representation of the last successful encode. May
    /// differ from the raw input after check-digit computation.
    pub text: String,
    /// Diagnostic of the most recent operation; authoritative only when that
    /// operation returned a warning or error.
    pub errtxt: String,
    /// The encoded module matrix.
    pub encoded: BitMatrix,
    /// Per-row height overrides, parallel to the matrix rows.
    pub row_height: Vec<i32>,
    /// Vector scene, populated by a vector render.
    pub vector: Option<VectorScene>,
    /// Raster buffer, populated by a raster render.
    pub bitmap: Option<Raster>,
}

impl Default for Symbol {
    fn default() -> Self {
        Self {
            symbology: 0,
            height: 0,
            whitespace_width: 0,
            border_width: 0,
            output_options: 0,
            fgcolour: "000000".into(),
            bgcolour: "FFFFFF".into(),
            outfile: String::new(),
            scale: 1.0,
            option_1: -1,
            option_2: 0,
            option_3: 0,
            show_hrt: true,
            input_mode: InputMode::Data,
            eci: 0,
            primary: String::new(),
            text: String::new(),
            errtxt: String::new(),
            encoded: BitMatrix::new(),
            row_height: Vec::new(),
            vector: None,
            bitmap: None,
        }
    }
}

impl Symbol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to defaults, keeping the value itself alive.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop encode results and diagnostics, keeping the configuration.
    ///
    /// A failed encode leaves the previous successful output in place;
    /// callers that want a clean slate between jobs clear it explicitly.
    pub fn clear_output(&mut self) {
        self.text.clear();
        self.errtxt.clear();
        self.encoded.clear();
        self.row_height.clear();
        self.reset_render();
    }

    /// Release rendered geometry without touching the encoded matrix.
    pub fn reset_render(&mut self) {
        self.vector = None;
        self.bitmap = None;
    }

    /// True if a quiet zone must be drawn, honouring the suppress flag.
    pub fn quiet_zones_enabled(&self, symbology_default: bool) -> bool {
        if self.output_options & output_options::NO_QUIET_ZONES != 0 {
            return false;
        }
        symbology_default || self.output_options & output_options::QUIET_ZONES != 0
    }
}

/// What a symbology encoder hands back to the dispatcher.
#[derive(Clone, Debug, Default)]
pub struct Encoded {
    pub matrix: BitMatrix,
    /// Per-row heights; empty means "use the symbol default for every row".
    pub row_height: Vec<i32>,
    pub text: String,
    /// Recoverable diagnostics collected while encoding.
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_to_defaults() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        sym.option_2 = 2;
        sym.text = "123".into();
        sym.encoded.push_pattern("101").unwrap();
        sym.bitmap = Some(Raster::default());
        sym.reset();
        assert_eq!(sym.symbology, 0);
        assert_eq!(sym.option_2, 0);
        assert!(sym.text.is_empty());
        assert!(sym.encoded.is_empty());
        assert!(sym.bitmap.is_none());
    }

    #[test]
    fn clear_output_keeps_configuration() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        sym.option_2 = 1;
        sym.text = "stale".into();
        sym.errtxt = "stale".into();
        sym.encoded.push_pattern("101").unwrap();
        sym.vector = Some(VectorScene::default());
        sym.clear_output();
        assert_eq!(sym.symbology, 47);
        assert_eq!(sym.option_2, 1);
        assert!(sym.text.is_empty());
        assert!(sym.errtxt.is_empty());
        assert!(sym.encoded.is_empty());
        assert!(sym.vector.is_none());
    }

    #[test]
    fn quiet_zone_suppression_wins() {
        let mut sym = Symbol::new();
        assert!(sym.quiet_zones_enabled(true));
        assert!(!sym.quiet_zones_enabled(false));
        sym.output_options |= output_options::QUIET_ZONES;
        assert!(sym.quiet_zones_enabled(false));
        sym.output_options |= output_options::NO_QUIET_ZONES;
        assert!(!sym.quiet_zones_enabled(true));
    }
}
