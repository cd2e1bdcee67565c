//! Abstract render output: vector scene primitives and the raster buffer.
//!
//! The render pipeline emits one of these two models; persisting them (PNG,
//! SVG, printer formats) is the job of external codec collaborators. All
//! scene coordinates are in module units before scaling.

use serde::{Deserialize, Serialize};

/// Colour plane selector for a primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourIndex {
    #[default]
    Foreground,
    Background,
    /// Index into a symbology-specific multi-colour palette.
    Plane(u8),
}

/// Axis-aligned filled rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub colour: ColourIndex,
}

/// Regular hexagon, flat-topped at `rotation == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    /// Rotation in degrees, one of 0/90/180/270.
    pub rotation: u16,
}

/// Filled circle (`width == 0.0`) or ring outline of the given line width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    pub width: f32,
    #[serde(default)]
    pub colour: ColourIndex,
}

/// Baseline-anchored human-readable text run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextString {
    /// Horizontal centre of the run.
    pub x: f32,
    /// Baseline y.
    pub y: f32,
    pub font_size: f32,
    /// Width the run should be fitted into.
    pub width: f32,
    pub text: String,
    /// Rotation in degrees, one of 0/90/180/270.
    pub rotation: u16,
}

/// Owned scene graph of the four primitive kinds.
///
/// The original engine chained primitives through per-kind linked lists;
/// owned growable sequences give the same model without traversal-to-free
/// logic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorScene {
    /// Total width in module units, quiet zones included.
    pub width: f32,
    /// Total height in module units, quiet zones and text included.
    pub height: f32,
    pub rects: Vec<Rect>,
    pub hexagons: Vec<Hexagon>,
    pub strings: Vec<TextString>,
    pub circles: Vec<Circle>,
}

impl VectorScene {
    /// Total primitive count across all kinds.
    pub fn primitive_count(&self) -> usize {
        self.rects.len() + self.hexagons.len() + self.strings.len() + self.circles.len()
    }
}

/// Packed raster buffer, `width * height * channels` bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    /// 3 for RGB, 4 for RGBA.
    pub channels: usize,
    pub data: Vec<u8>,
}

impl Raster {
    /// Pixel bytes at `(x, y)`, or `None` out of range.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y * self.width + x) * self.channels;
        self.data.get(at..at + self.channels)
    }
}
