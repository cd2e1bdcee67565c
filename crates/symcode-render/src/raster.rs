//! Rasterization of the vector scene into a packed pixel buffer.

use log::debug;

use symcode_core::{Circle, ColourIndex, Error, Hexagon, Raster, Rect, Symbol};

use crate::{render_vector, Rotation};

/// Allocation ceiling for one raster buffer, in bytes. Requests above this
/// fail with a memory error instead of silently truncating.
pub const MAX_RASTER_BYTES: usize = 1 << 28;

/// Parse an `RRGGBB` or `RRGGBBAA` hex colour into RGBA bytes.
pub fn parse_colour(colour: &str) -> Result<[u8; 4], Error> {
    let bad = || Error::InvalidOption(format!("malformed colour '{colour}', expected RRGGBB[AA]"));
    if colour.len() != 6 && colour.len() != 8 {
        return Err(bad());
    }
    let mut out = [0u8, 0, 0, 255];
    for (i, chunk) in colour.as_bytes().chunks(2).enumerate() {
        let hex = std::str::from_utf8(chunk).map_err(|_| bad())?;
        out[i] = u8::from_str_radix(hex, 16).map_err(|_| bad())?;
    }
    Ok(out)
}

/// Rasterize the symbol's scene at `symbol.scale` pixels per module.
///
/// Builds the unrotated vector scene, paints it, then rotates the pixel
/// buffer. Text runs are not painted here; glyph rendering belongs to the
/// font collaborator consuming the vector scene.
pub fn render_raster(symbol: &Symbol, rotation: Rotation) -> Result<Raster, Error> {
    let scale = symbol.scale;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidOption(format!(
            "scale must be positive, got {scale}"
        )));
    }

    let fg = parse_colour(&symbol.fgcolour)?;
    let bg = parse_colour(&symbol.bgcolour)?;
    let channels = if fg[3] != 255 || bg[3] != 255 { 4 } else { 3 };

    let scene = render_vector(symbol, Rotation::R0)?;
    let width = ((scene.width * scale).ceil() as usize).max(1);
    let height = ((scene.height * scale).ceil() as usize).max(1);

    let requested = width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(channels))
        .ok_or(Error::Memory {
            requested: usize::MAX,
            limit: MAX_RASTER_BYTES,
        })?;
    if requested > MAX_RASTER_BYTES {
        return Err(Error::Memory {
            requested,
            limit: MAX_RASTER_BYTES,
        });
    }

    let mut raster = Raster {
        width,
        height,
        channels,
        data: bg[..channels].repeat(width * height),
    };

    for rect in &scene.rects {
        paint_rect(&mut raster, rect, scale, ink(rect.colour, &fg, &bg, channels));
    }
    for circle in &scene.circles {
        paint_circle(&mut raster, circle, scale, ink(circle.colour, &fg, &bg, channels));
    }
    for hexagon in &scene.hexagons {
        paint_hexagon(&mut raster, hexagon, scale, &fg[..channels]);
    }
    if !scene.strings.is_empty() {
        debug!(
            "skipping {} text run(s): glyph rendering is delegated to the vector consumer",
            scene.strings.len()
        );
    }

    Ok(rotate_raster(raster, rotation))
}

/// Pixel bytes for a primitive's colour index. Plane indices select the
/// foreground until a multi-colour palette symbology is compiled in.
fn ink<'a>(colour: ColourIndex, fg: &'a [u8; 4], bg: &'a [u8; 4], channels: usize) -> &'a [u8] {
    match colour {
        ColourIndex::Background => &bg[..channels],
        ColourIndex::Foreground | ColourIndex::Plane(_) => &fg[..channels],
    }
}

fn put(raster: &mut Raster, x: usize, y: usize, px: &[u8]) {
    let at = (y * raster.width + x) * raster.channels;
    raster.data[at..at + px.len()].copy_from_slice(px);
}

fn paint_rect(raster: &mut Raster, rect: &Rect, scale: f32, px: &[u8]) {
    let x0 = ((rect.x * scale).round() as usize).min(raster.width);
    let x1 = (((rect.x + rect.width) * scale).round() as usize).min(raster.width);
    let y0 = ((rect.y * scale).round() as usize).min(raster.height);
    let y1 = (((rect.y + rect.height) * scale).round() as usize).min(raster.height);
    for y in y0..y1 {
        for x in x0..x1 {
            put(raster, x, y, px);
        }
    }
}

fn paint_circle(raster: &mut Raster, circle: &Circle, scale: f32, px: &[u8]) {
    let cx = circle.x * scale;
    let cy = circle.y * scale;
    let r = circle.diameter / 2.0 * scale;
    let inner = if circle.width > 0.0 {
        (r - circle.width * scale).max(0.0)
    } else {
        0.0
    };
    let (x0, x1) = span(cx, r, raster.width);
    let (y0, y1) = span(cy, r, raster.height);
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d2 = dx * dx + dy * dy;
            if d2 <= r * r && d2 >= inner * inner {
                put(raster, x, y, px);
            }
        }
    }
}

fn paint_hexagon(raster: &mut Raster, hexagon: &Hexagon, scale: f32, px: &[u8]) {
    let cx = hexagon.x * scale;
    let cy = hexagon.y * scale;
    let r = hexagon.diameter / 2.0 * scale;
    let pointy = hexagon.rotation % 180 == 90;
    let (x0, x1) = span(cx, r, raster.width);
    let (y0, y1) = span(cy, r, raster.height);
    let s3 = 3.0_f32.sqrt();
    for y in y0..y1 {
        for x in x0..x1 {
            let (mut dx, mut dy) = (
                (x as f32 + 0.5 - cx).abs(),
                (y as f32 + 0.5 - cy).abs(),
            );
            if pointy {
                std::mem::swap(&mut dx, &mut dy);
            }
            // flat-topped regular hexagon with circumradius r
            if dx <= r && dy <= s3 / 2.0 * r && s3 * dx + dy <= s3 * r {
                put(raster, x, y, px);
            }
        }
    }
}

fn span(centre: f32, radius: f32, limit: usize) -> (usize, usize) {
    let lo = ((centre - radius).floor().max(0.0)) as usize;
    let hi = (((centre + radius).ceil()) as usize).min(limit);
    (lo.min(limit), hi)
}

fn rotate_raster(src: Raster, rotation: Rotation) -> Raster {
    if rotation == Rotation::R0 {
        return src;
    }
    let (w, h, c) = (src.width, src.height, src.channels);
    let (out_w, out_h) = match rotation {
        Rotation::R90 | Rotation::R270 => (h, w),
        _ => (w, h),
    };
    let mut out = Raster {
        width: out_w,
        height: out_h,
        channels: c,
        data: vec![0; out_w * out_h * c],
    };
    for y in 0..h {
        for x in 0..w {
            let (nx, ny) = match rotation {
                Rotation::R0 => (x, y),
                Rotation::R90 => (h - 1 - y, x),
                Rotation::R180 => (w - 1 - x, h - 1 - y),
                Rotation::R270 => (y, w - 1 - x),
            };
            let from = (y * w + x) * c;
            let to = (ny * out_w + nx) * c;
            out.data[to..to + c].copy_from_slice(&src.data[from..from + c]);
        }
    }
    out
}
