//! Icon encoding for countdown records.
//!
//! Uploaded photos are decoded in whatever raster format they arrive in,
//! shrunk to icon size, and kept as base64 PNG so the progress canvas can
//! embed them without touching the original file again.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::imageops::FilterType;
use thiserror::Error;

/// Default bounding box for countdown icons.
pub const DEFAULT_ICON_SIZE: (u32, u32) = (50, 50);

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no image data")]
    Empty,
    #[error("unrecognized or corrupt image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to encode icon: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("failed to decode icon: {0}")]
    Png(#[from] png::DecodingError),
    #[error("icon is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("icon has unsupported layout {color:?}/{depth:?}")]
    UnsupportedLayout {
        color: png::ColorType,
        depth: png::BitDepth,
    },
}

/// Decoded RGBA8 pixels of an icon, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Turns uploaded photos into embeddable icons.
#[derive(Debug, Clone, Copy)]
pub struct ImageEncoder {
    max_size: (u32, u32),
}

impl Default for ImageEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_SIZE)
    }
}

impl ImageEncoder {
    pub fn new(max_size: (u32, u32)) -> Self {
        Self {
            max_size: (max_size.0.max(1), max_size.1.max(1)),
        }
    }

    pub fn max_size(&self) -> (u32, u32) {
        self.max_size
    }

    /// Decode `raw`, shrink it to fit `max_size` and return base64 PNG.
    pub fn encode(&self, raw: &[u8]) -> Result<String, DecodeError> {
        if raw.is_empty() {
            return Err(DecodeError::Empty);
        }

        let decoded = image::load_from_memory(raw)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = fit_within(rgba.dimensions(), self.max_size);
        let icon = if (width, height) == rgba.dimensions() {
            rgba
        } else {
            image::imageops::resize(&rgba, width, height, FilterType::Lanczos3)
        };
        log::debug!(
            "encoded icon {}x{} -> {}x{}",
            decoded.width(),
            decoded.height(),
            width,
            height
        );

        let png_bytes = write_png(icon.width(), icon.height(), icon.as_raw())?;
        Ok(STANDARD.encode(png_bytes))
    }
}

/// `data:` URL for an icon produced by [`ImageEncoder::encode`].
pub fn data_url(encoded: &str) -> String {
    format!("data:image/png;base64,{encoded}")
}

/// Reverse of [`ImageEncoder::encode`]: base64 PNG back to RGBA pixels.
pub fn decode_icon(encoded: &str) -> Result<IconPixels, DecodeError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let decoder = png::Decoder::new(&bytes[..]);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
        return Err(DecodeError::UnsupportedLayout {
            color: info.color_type,
            depth: info.bit_depth,
        });
    }
    buf.truncate(info.buffer_size());

    Ok(IconPixels {
        width: info.width,
        height: info.height,
        rgba: buf,
    })
}

/// Largest size with the same aspect ratio that fits in `max`.
/// Never upscales and never returns a zero dimension.
pub fn fit_within(size: (u32, u32), max: (u32, u32)) -> (u32, u32) {
    let (width, height) = size;
    if width <= max.0 && height <= max.1 {
        return size;
    }

    let scale = f64::min(max.0 as f64 / width as f64, max.1 as f64 / height as f64);
    let fit = |v: u32, limit: u32| ((v as f64 * scale).round() as u32).clamp(1, limit);
    (fit(width, max.0), fit(height, max.1))
}

fn write_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn sample(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 90]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, format)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        assert_eq!(fit_within((200, 100), (50, 50)), (50, 25));
        assert_eq!(fit_within((100, 400), (50, 50)), (13, 50));
    }

    #[test]
    fn fit_never_upscales() {
        assert_eq!(fit_within((20, 10), (50, 50)), (20, 10));
        assert_eq!(fit_within((50, 50), (50, 50)), (50, 50));
    }

    #[test]
    fn fit_keeps_thin_images_visible() {
        assert_eq!(fit_within((5000, 1), (50, 50)), (50, 1));
    }

    #[test]
    fn encodes_jpeg_into_small_rgba_png() {
        let encoder = ImageEncoder::default();
        let encoded = encoder.encode(&sample(120, 80, ImageFormat::Jpeg)).unwrap();
        let icon = decode_icon(&encoded).unwrap();
        assert_eq!((icon.width, icon.height), (50, 33));
        assert_eq!(icon.rgba.len(), (50 * 33 * 4) as usize);
        assert!(icon.rgba.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn small_png_keeps_its_size() {
        let encoded = ImageEncoder::default()
            .encode(&sample(16, 12, ImageFormat::Png))
            .unwrap();
        let icon = decode_icon(&encoded).unwrap();
        assert_eq!((icon.width, icon.height), (16, 12));
        assert_eq!(&icon.rgba[..4], &[200, 40, 90, 255]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = ImageEncoder::default()
            .encode(b"definitely not an image")
            .unwrap_err();
        assert!(matches!(err, DecodeError::Image(_)));
    }

    #[test]
    fn empty_input_is_a_decode_error() {
        assert!(matches!(
            ImageEncoder::default().encode(&[]),
            Err(DecodeError::Empty)
        ));
    }

    #[test]
    fn bad_base64_is_rejected() {
        assert!(matches!(decode_icon("%%%"), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn data_url_prefix() {
        assert_eq!(data_url("AAAA"), "data:image/png;base64,AAAA");
    }
}
