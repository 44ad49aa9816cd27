use anyhow::{Context, Result};
use dicom::object::DefaultDicomObject;
use dicom::pixeldata::PixelDecoder;
use dicom_pixeldata::PixelRepresentation;
use ndarray::ArrayD;

/// Frame dimensions carried alongside the pixel array so the encoder does not have to
/// re-derive them from the array shape.
#[derive(Debug, Clone, Copy)]
pub struct FrameGeometry {
    pub rows: u32,
    pub columns: u32,
    pub samples_per_pixel: u16,
}

/// Decoded pixel data before 8-bit normalization. Anything that is not already
/// unsigned 8-bit is widened to f32 so a single rescale path handles it.
pub enum RawPixels {
    Unsigned8(ArrayD<u8>),
    Float(ArrayD<f32>),
}

/// Decode the pixel data element into an ndarray, branching on the stored dtype the
/// same way the transfer-syntax layer reports it.
pub fn decode_raw(obj: &DefaultDicomObject) -> Result<(RawPixels, FrameGeometry)> {
    let decoded = obj
        .decode_pixel_data()
        .context("Failed to decode pixel data")?;

    let geometry = FrameGeometry {
        rows: decoded.rows(),
        columns: decoded.columns(),
        samples_per_pixel: decoded.samples_per_pixel(),
    };

    let bits_allocated = decoded.bits_allocated();
    let pixel_representation = decoded.pixel_representation();

    let raw = if pixel_representation == PixelRepresentation::Unsigned {
        if bits_allocated <= 8 {
            // Already in the output dtype; the normalizer passes this through untouched.
            RawPixels::Unsigned8(
                decoded
                    .to_ndarray::<u8>()
                    .context("Failed to convert to u8 ndarray")?
                    .into_dyn(),
            )
        } else if bits_allocated <= 16 {
            RawPixels::Float(
                decoded
                    .to_ndarray::<u16>()
                    .context("Failed to convert to u16 ndarray")?
                    .mapv(|v| v as f32)
                    .into_dyn(),
            )
        } else {
            RawPixels::Float(
                decoded
                    .to_ndarray::<u32>()
                    .context("Failed to convert to u32 ndarray")?
                    .mapv(|v| v as f32)
                    .into_dyn(),
            )
        }
    } else if bits_allocated <= 8 {
        RawPixels::Float(
            decoded
                .to_ndarray::<i8>()
                .context("Failed to convert to i8 ndarray")?
                .mapv(|v| v as f32)
                .into_dyn(),
        )
    } else if bits_allocated <= 16 {
        RawPixels::Float(
            decoded
                .to_ndarray::<i16>()
                .context("Failed to convert to i16 ndarray")?
                .mapv(|v| v as f32)
                .into_dyn(),
        )
    } else {
        RawPixels::Float(
            decoded
                .to_ndarray::<i32>()
                .context("Failed to convert to i32 ndarray")?
                .mapv(|v| v as f32)
                .into_dyn(),
        )
    };

    Ok((raw, geometry))
}

/// Collapse decoded pixels into the 0-255 range. Unsigned 8-bit input is returned
/// unchanged; everything else is min-max rescaled. A constant (or empty) image maps
/// to all zeros rather than dividing by zero.
pub fn normalize(raw: RawPixels) -> ArrayD<u8> {
    match raw {
        RawPixels::Unsigned8(arr) => arr,
        RawPixels::Float(arr) => rescale_to_u8(&arr),
    }
}

fn rescale_to_u8(arr: &ArrayD<f32>) -> ArrayD<u8> {
    let min_val = arr.iter().fold(f32::INFINITY, |a, &b| a.min(b));
    let max_val = arr.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));

    if arr.is_empty() || min_val == max_val {
        return ArrayD::zeros(arr.raw_dim());
    }

    // Truncating cast on purpose: matches the usual float-to-u8 conversion, so the
    // maximum maps to exactly 255 and everything else rounds toward zero.
    arr.mapv(|v| ((v - min_val) / (max_val - min_val) * 255.0) as u8)
}
