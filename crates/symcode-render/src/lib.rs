//! Render pipeline: encoded matrix to vector scene or raster buffer.
//!
//! The vector path walks the module matrix and emits geometric primitives;
//! the raster path rasterizes that scene at the requested scale. Neither
//! writes files — persisting the output is an external codec's job.

mod raster;
mod vector;

pub use raster::{parse_colour, render_raster, MAX_RASTER_BYTES};
pub use vector::{render_vector, Rotation};

use symcode_core::Error;

impl TryFrom<i32> for Rotation {
    type Error = Error;

    fn try_from(degrees: i32) -> Result<Self, Error> {
        match degrees.rem_euclid(360) {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            other => Err(Error::InvalidOption(format!(
                "rotation must be a multiple of 90 degrees, got {other}"
            ))),
        }
    }
}
