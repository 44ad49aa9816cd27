//
// encode.rs
// dicom2json
//
// Renders the normalized pixel array as an in-memory PNG and wraps it in the base64 payload.
//
// Thales Matheus Mendonça Santos - August 2026

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use ndarray::ArrayD;
use std::io::Cursor;

use crate::models::ImagePayload;
use crate::pixels::FrameGeometry;

/// Encode the first frame as PNG and base64 it into the record's image payload.
pub fn to_payload(pixels: &ArrayD<u8>, geometry: &FrameGeometry) -> Result<ImagePayload> {
    let png = first_frame_png(pixels, geometry)?;
    Ok(ImagePayload {
        data: STANDARD.encode(&png),
        width: geometry.columns,
        height: geometry.rows,
    })
}

/// Build a PNG from the leading frame of the normalized array. Grayscale and RGB are
/// the only sample layouts the record supports.
pub fn first_frame_png(pixels: &ArrayD<u8>, geometry: &FrameGeometry) -> Result<Vec<u8>> {
    let frame_len =
        geometry.rows as usize * geometry.columns as usize * geometry.samples_per_pixel as usize;
    let frame: Vec<u8> = pixels.iter().copied().take(frame_len).collect();
    if frame.len() < frame_len {
        bail!(
            "Pixel data ended early: expected {} bytes per frame, found {}",
            frame_len,
            frame.len()
        );
    }

    let image = match geometry.samples_per_pixel {
        1 => DynamicImage::ImageLuma8(
            GrayImage::from_raw(geometry.columns, geometry.rows, frame)
                .context("Pixel buffer does not match the grayscale frame dimensions")?,
        ),
        3 => DynamicImage::ImageRgb8(
            RgbImage::from_raw(geometry.columns, geometry.rows, frame)
                .context("Pixel buffer does not match the RGB frame dimensions")?,
        ),
        other => bail!("Unsupported samples per pixel: {}", other),
    };

    encode_png(&image)
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn geometry(rows: u32, columns: u32, samples: u16) -> FrameGeometry {
        FrameGeometry {
            rows,
            columns,
            samples_per_pixel: samples,
        }
    }

    #[test]
    fn test_payload_roundtrips_through_png() {
        let pixels = arr2(&[[0u8, 64, 128], [192, 255, 7]]).into_dyn();
        let payload = to_payload(&pixels, &geometry(2, 3, 1)).expect("payload");

        assert_eq!(payload.width, 3);
        assert_eq!(payload.height, 2);

        let png = STANDARD.decode(&payload.data).expect("base64");
        let decoded = image::load_from_memory(&png).expect("png");
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.to_luma8().into_raw(), vec![0, 64, 128, 192, 255, 7]);
    }

    #[test]
    fn test_rgb_frames_are_supported() {
        let pixels = ArrayD::from_shape_vec(
            ndarray::IxDyn(&[1, 2, 3]),
            vec![255u8, 0, 0, 0, 0, 255],
        )
        .unwrap();
        let payload = to_payload(&pixels, &geometry(1, 2, 3)).expect("payload");

        let png = STANDARD.decode(&payload.data).expect("base64");
        let decoded = image::load_from_memory(&png).expect("png").to_rgb8();
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_unexpected_sample_layout_is_rejected() {
        let pixels = ArrayD::zeros(ndarray::IxDyn(&[2, 2, 2]));
        let err = to_payload(&pixels, &geometry(2, 2, 2)).unwrap_err();
        assert!(err.to_string().contains("samples per pixel"));
    }

    #[test]
    fn test_short_pixel_buffer_is_rejected() {
        let pixels = arr2(&[[1u8, 2]]).into_dyn();
        assert!(to_payload(&pixels, &geometry(2, 2, 1)).is_err());
    }
}
