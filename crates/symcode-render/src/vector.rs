//! Vector scene construction from the encoded matrix.

use log::debug;

use symcode_core::{
    output_options, Circle, Error, Hexagon, Rect, Symbol, TextString, VectorScene, DEFAULT_HEIGHT,
};
use symcode_registry::{caps, registry, Symbology};

/// Output rotation in degrees, clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

/// Dot diameter in module units for dotty rendering.
const DOT_DIAMETER: f32 = 0.8;
/// Gap between the symbol and the human-readable text, in modules.
const TEXT_GAP: f32 = 1.0;

/// Build the vector scene for an encoded symbol.
///
/// Walks the matrix row by row and run-length-merges adjacent set modules
/// into single rectangles; dotty mode emits one circle per set module
/// instead. Quiet zones, boundary bars and the human-readable text are added
/// around the data region, then the whole scene is rotated.
pub fn render_vector(symbol: &Symbol, rotation: Rotation) -> Result<VectorScene, Error> {
    if symbol.encoded.is_empty() {
        return Err(Error::InvalidData(
            "nothing to render: encode a symbol first".into(),
        ));
    }

    let resolved = registry().resolve(symbol.symbology);
    let cap_word = resolved.map(|s| s.capabilities()).unwrap_or(0);

    let dotty = symbol.output_options & output_options::DOTTY_MODE != 0;
    if dotty && cap_word & caps::DOTTY == 0 {
        return Err(Error::InvalidOption(
            "selected symbology cannot be rendered as dots".into(),
        ));
    }
    // MaxiCode modules sit on a hexagonal grid, odd rows offset half a module.
    let hex_grid = resolved == Some(Symbology::MaxiCode);

    let mandated_quiet = resolved.map(|s| s.quiet_zone_modules()).unwrap_or(0);
    let quiet = if symbol.quiet_zones_enabled(mandated_quiet > 0) {
        mandated_quiet.max(1)
    } else {
        0
    };

    let boxed = symbol.output_options & output_options::BOX != 0;
    let bound = boxed || symbol.output_options & output_options::BIND != 0;
    let border = if bound { symbol.border_width.max(0) as f32 } else { 0.0 };

    let hspace = symbol.whitespace_width.max(0) as f32 + quiet as f32;
    let xoff = hspace + if boxed { border } else { 0.0 };
    let data_width = symbol.encoded.width() as f32;
    let total_width = data_width + 2.0 * xoff;

    let rows = symbol.encoded.rows();
    let base_height = if symbol.height > 0 { symbol.height } else { DEFAULT_HEIGHT };
    let default_row_height = (base_height / rows as i32).max(1) as f32;

    let mut scene = VectorScene {
        width: total_width,
        ..VectorScene::default()
    };

    let mut y = border;
    for row in 0..rows {
        let h = symbol
            .row_height
            .get(row)
            .copied()
            .filter(|&h| h > 0)
            .map(|h| h as f32)
            .unwrap_or(default_row_height);

        if hex_grid {
            let row_shift = if row % 2 == 1 { 0.5 } else { 0.0 };
            for col in 0..symbol.encoded.width() {
                if symbol.encoded.get(row, col) {
                    scene.hexagons.push(Hexagon {
                        x: xoff + col as f32 + 0.5 + row_shift,
                        y: y + h / 2.0,
                        diameter: 1.0,
                        rotation: 0,
                    });
                }
            }
        } else if dotty {
            for col in 0..symbol.encoded.width() {
                if symbol.encoded.get(row, col) {
                    scene.circles.push(Circle {
                        x: xoff + col as f32 + 0.5,
                        y: y + h / 2.0,
                        diameter: DOT_DIAMETER,
                        width: 0.0,
                        colour: Default::default(),
                    });
                }
            }
        } else {
            for (start, len) in symbol.encoded.runs(row) {
                scene.rects.push(Rect {
                    x: xoff + start as f32,
                    y,
                    width: len as f32,
                    height: h,
                    colour: Default::default(),
                });
            }
        }
        y += h;
    }
    let symbol_height = y - border;

    if bound {
        scene.rects.push(Rect {
            x: 0.0,
            y: 0.0,
            width: total_width,
            height: border,
            colour: Default::default(),
        });
        scene.rects.push(Rect {
            x: 0.0,
            y: border + symbol_height,
            width: total_width,
            height: border,
            colour: Default::default(),
        });
    }
    let content_height = symbol_height + 2.0 * border;
    if boxed {
        for x in [0.0, total_width - border] {
            scene.rects.push(Rect {
                x,
                y: 0.0,
                width: border,
                height: content_height,
                colour: Default::default(),
            });
        }
    }

    scene.height = content_height;
    if symbol.show_hrt && !symbol.text.is_empty() {
        let font_size = if symbol.output_options & output_options::SMALL_TEXT != 0 {
            5.0
        } else {
            7.0
        };
        scene.strings.push(TextString {
            x: total_width / 2.0,
            y: content_height + TEXT_GAP + font_size,
            font_size,
            width: data_width,
            text: symbol.text.clone(),
            rotation: 0,
        });
        scene.height += TEXT_GAP + font_size;
    }

    debug!(
        "vector scene: {}x{} modules, {} primitives",
        scene.width,
        scene.height,
        scene.primitive_count()
    );
    Ok(rotate_scene(scene, rotation))
}

fn rotate_scene(scene: VectorScene, rotation: Rotation) -> VectorScene {
    if rotation == Rotation::R0 {
        return scene;
    }
    let (w, h) = (scene.width, scene.height);
    let mut out = scene.clone();
    match rotation {
        Rotation::R0 => unreachable!(),
        Rotation::R90 | Rotation::R270 => {
            out.width = h;
            out.height = w;
        }
        Rotation::R180 => {}
    }

    let point = |x: f32, y: f32| -> (f32, f32) {
        match rotation {
            Rotation::R0 => (x, y),
            Rotation::R90 => (h - y, x),
            Rotation::R180 => (w - x, h - y),
            Rotation::R270 => (y, w - x),
        }
    };
    let degrees: u16 = match rotation {
        Rotation::R0 => 0,
        Rotation::R90 => 90,
        Rotation::R180 => 180,
        Rotation::R270 => 270,
    };

    out.rects = scene
        .rects
        .iter()
        .map(|r| {
            let (x, y, width, height) = match rotation {
                Rotation::R0 => (r.x, r.y, r.width, r.height),
                Rotation::R90 => (h - (r.y + r.height), r.x, r.height, r.width),
                Rotation::R180 => (w - (r.x + r.width), h - (r.y + r.height), r.width, r.height),
                Rotation::R270 => (r.y, w - (r.x + r.width), r.height, r.width),
            };
            Rect { x, y, width, height, colour: r.colour }
        })
        .collect();
    out.circles = scene
        .circles
        .iter()
        .map(|c| {
            let (x, y) = point(c.x, c.y);
            Circle { x, y, ..*c }
        })
        .collect();
    out.hexagons = scene
        .hexagons
        .iter()
        .map(|hex| {
            let (x, y) = point(hex.x, hex.y);
            Hexagon {
                x,
                y,
                diameter: hex.diameter,
                rotation: (hex.rotation + degrees) % 360,
            }
        })
        .collect();
    out.strings = scene
        .strings
        .iter()
        .map(|s| {
            let (x, y) = point(s.x, s.y);
            TextString {
                x,
                y,
                rotation: (s.rotation + degrees) % 360,
                ..s.clone()
            }
        })
        .collect();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcode_core::output_options;

    fn msi_symbol(data: &[u8]) -> Symbol {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        let enc = symcode_linear::msi::encode(data, 0).unwrap();
        sym.encoded = enc.matrix;
        sym.text = enc.text;
        sym
    }

    #[test]
    fn bars_are_run_length_merged() {
        let mut sym = Symbol::new();
        sym.symbology = 47;
        sym.show_hrt = false;
        sym.encoded.push_pattern("1110011").unwrap();
        let scene = render_vector(&sym, Rotation::R0).unwrap();
        assert_eq!(scene.rects.len(), 2, "two runs, two rectangles");
        assert_eq!(scene.rects[0].width, 3.0);
        assert_eq!(scene.rects[1].width, 2.0);
    }

    #[test]
    fn text_is_emitted_and_suppressible() {
        let sym = msi_symbol(b"1234567");
        let scene = render_vector(&sym, Rotation::R0).unwrap();
        assert_eq!(scene.strings.len(), 1);
        assert_eq!(scene.strings[0].text, "12345674");

        let mut quiet = msi_symbol(b"1234567");
        quiet.show_hrt = false;
        let scene = render_vector(&quiet, Rotation::R0).unwrap();
        assert!(scene.strings.is_empty());
        assert!(scene.height < 60.0);
    }

    #[test]
    fn whitespace_offsets_the_data_region() {
        let mut sym = msi_symbol(b"1");
        sym.show_hrt = false;
        sym.whitespace_width = 4;
        let scene = render_vector(&sym, Rotation::R0).unwrap();
        assert_eq!(scene.width, sym.encoded.width() as f32 + 8.0);
        assert!(scene.rects.iter().all(|r| r.x >= 4.0));
    }

    #[test]
    fn bind_and_box_add_border_rects() {
        let mut sym = msi_symbol(b"1");
        sym.show_hrt = false;
        sym.border_width = 2;
        sym.output_options |= output_options::BIND;
        let bind_rects = render_vector(&sym, Rotation::R0).unwrap().rects.len();
        sym.output_options |= output_options::BOX;
        let box_rects = render_vector(&sym, Rotation::R0).unwrap().rects.len();
        assert_eq!(box_rects, bind_rects + 2);
    }

    #[test]
    fn rotation_swaps_the_bounding_extent() {
        let sym = msi_symbol(b"1234567");
        let flat = render_vector(&sym, Rotation::R0).unwrap();
        let turned = render_vector(&sym, Rotation::R90).unwrap();
        assert_eq!(turned.width, flat.height);
        assert_eq!(turned.height, flat.width);
        assert_eq!(turned.rects.len(), flat.rects.len());

        let upside = render_vector(&sym, Rotation::R180).unwrap();
        assert_eq!(upside.width, flat.width);
        assert_eq!(upside.strings[0].rotation, 180);
    }

    #[test]
    fn dotty_requires_the_capability() {
        let mut sym = msi_symbol(b"1");
        sym.output_options |= output_options::DOTTY_MODE;
        assert!(matches!(
            render_vector(&sym, Rotation::R0),
            Err(Error::InvalidOption(_))
        ));

        // Hand-built matrix under a dotty-capable id renders as circles.
        let mut dotty = Symbol::new();
        dotty.symbology = 58;
        dotty.output_options |= output_options::DOTTY_MODE;
        dotty.show_hrt = false;
        dotty.encoded.push_pattern("101").unwrap();
        dotty.encoded.push_pattern("010").unwrap();
        dotty.row_height = vec![1, 1];
        let scene = render_vector(&dotty, Rotation::R0).unwrap();
        assert!(scene.rects.is_empty());
        assert_eq!(scene.circles.len(), 3);
    }

    #[test]
    fn hexagonal_grid_symbology_emits_offset_hexagons() {
        let mut sym = Symbol::new();
        sym.symbology = 57;
        sym.show_hrt = false;
        sym.encoded.push_pattern("101").unwrap();
        sym.encoded.push_pattern("010").unwrap();
        sym.row_height = vec![1, 1];
        let scene = render_vector(&sym, Rotation::R0).unwrap();
        assert!(scene.rects.is_empty());
        assert_eq!(scene.hexagons.len(), 3);
        assert_eq!(scene.hexagons[0].x, 0.5, "even rows sit on the grid");
        assert_eq!(scene.hexagons[2].x, 2.0, "odd rows shift half a module");

        let turned = render_vector(&sym, Rotation::R90).unwrap();
        assert_eq!(turned.hexagons.len(), 3);
        assert_eq!(turned.hexagons[0].rotation, 90);
    }

    #[test]
    fn rendering_an_empty_symbol_fails() {
        let sym = Symbol::new();
        assert!(matches!(
            render_vector(&sym, Rotation::R0),
            Err(Error::InvalidData(_))
        ));
    }
}
