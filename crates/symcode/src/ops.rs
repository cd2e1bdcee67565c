//! Boundary operations: the engine's calling surface.
//!
//! Input can arrive three ways (raw buffer, file contents, pre-split ECI
//! segments); output leaves as a raster buffer, a vector scene, or a file
//! written through the image codec collaborator.

use std::path::Path;

use symcode_core::{Error, Segment, Status, Symbol};
use symcode_render::{render_raster, render_vector, Rotation};

use crate::dispatch;

fn fail(symbol: &mut Symbol, err: Error) -> Error {
    symbol.errtxt = err.to_string();
    err
}

/// Encode a raw data buffer, applying the symbol's input mode and default
/// ECI designator.
pub fn encode(symbol: &mut Symbol, data: &[u8]) -> Result<Status, Error> {
    let eci = symbol.eci;
    dispatch::encode_segments(symbol, &[Segment::with_eci(data.to_vec(), eci)])
}

/// Encode the byte-for-byte contents of a file.
pub fn encode_file(symbol: &mut Symbol, path: impl AsRef<Path>) -> Result<Status, Error> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| {
        let err = Error::FileAccess {
            path: path.display().to_string(),
            source,
        };
        fail(symbol, err)
    })?;
    encode(symbol, &data)
}

/// Encode pre-split ECI segments.
pub fn encode_segments(symbol: &mut Symbol, segments: &[Segment]) -> Result<Status, Error> {
    dispatch::encode_segments(symbol, segments)
}

/// Populate the symbol's raster buffer from the encoded matrix.
pub fn buffer(symbol: &mut Symbol, rotation: i32) -> Result<Status, Error> {
    let rot = Rotation::try_from(rotation).map_err(|e| fail(symbol, e))?;
    let raster = render_raster(symbol, rot).map_err(|e| fail(symbol, e))?;
    symbol.vector = None;
    symbol.bitmap = Some(raster);
    Ok(Status::ok())
}

/// Populate the symbol's vector scene from the encoded matrix.
pub fn buffer_vector(symbol: &mut Symbol, rotation: i32) -> Result<Status, Error> {
    let rot = Rotation::try_from(rotation).map_err(|e| fail(symbol, e))?;
    let scene = render_vector(symbol, rot).map_err(|e| fail(symbol, e))?;
    symbol.bitmap = None;
    symbol.vector = Some(scene);
    Ok(Status::ok())
}

/// Render and write the symbol to `symbol.outfile`, format inferred from the
/// file extension.
#[cfg(feature = "image")]
pub fn print(symbol: &mut Symbol, rotation: i32) -> Result<Status, Error> {
    let path = if symbol.outfile.is_empty() {
        "out.png".to_string()
    } else {
        symbol.outfile.clone()
    };
    let extension = Path::new(&path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png" | "bmp" | "gif" | "jpg" | "jpeg" | "tiff" | "tif") => {}
        other => {
            let err = Error::InvalidOption(format!(
                "unknown output format '{}'",
                other.unwrap_or("")
            ));
            return Err(fail(symbol, err));
        }
    }

    let rot = Rotation::try_from(rotation).map_err(|e| fail(symbol, e))?;
    let raster = render_raster(symbol, rot).map_err(|e| fail(symbol, e))?;
    let colour = match raster.channels {
        4 => image::ColorType::Rgba8,
        _ => image::ColorType::Rgb8,
    };
    image::save_buffer(
        &path,
        &raster.data,
        raster.width as u32,
        raster.height as u32,
        colour,
    )
    .map_err(|e| {
        let err = Error::FileWrite {
            path: path.clone(),
            reason: e.to_string(),
        };
        fail(symbol, err)
    })?;
    symbol.vector = None;
    symbol.bitmap = Some(raster);
    Ok(Status::ok())
}

/// Encode and rasterize in one call.
pub fn encode_and_buffer(symbol: &mut Symbol, data: &[u8], rotation: i32) -> Result<Status, Error> {
    let status = encode(symbol, data)?;
    buffer(symbol, rotation)?;
    Ok(status)
}

/// Encode and build the vector scene in one call.
pub fn encode_and_buffer_vector(
    symbol: &mut Symbol,
    data: &[u8],
    rotation: i32,
) -> Result<Status, Error> {
    let status = encode(symbol, data)?;
    buffer_vector(symbol, rotation)?;
    Ok(status)
}

/// Encode and write the output file in one call.
#[cfg(feature = "image")]
pub fn encode_and_print(symbol: &mut Symbol, data: &[u8], rotation: i32) -> Result<Status, Error> {
    let status = encode(symbol, data)?;
    print(symbol, rotation)?;
    Ok(status)
}

/// Encode a file's contents and rasterize in one call.
pub fn encode_file_and_buffer(
    symbol: &mut Symbol,
    path: impl AsRef<Path>,
    rotation: i32,
) -> Result<Status, Error> {
    let status = encode_file(symbol, path)?;
    buffer(symbol, rotation)?;
    Ok(status)
}

/// Encode a file's contents and build the vector scene in one call.
pub fn encode_file_and_buffer_vector(
    symbol: &mut Symbol,
    path: impl AsRef<Path>,
    rotation: i32,
) -> Result<Status, Error> {
    let status = encode_file(symbol, path)?;
    buffer_vector(symbol, rotation)?;
    Ok(status)
}

/// Encode a file's contents and write the output file in one call.
#[cfg(feature = "image")]
pub fn encode_file_and_print(
    symbol: &mut Symbol,
    path: impl AsRef<Path>,
    rotation: i32,
) -> Result<Status, Error> {
    let status = encode_file(symbol, path)?;
    print(symbol, rotation)?;
    Ok(status)
}
