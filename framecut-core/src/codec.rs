//! PNG decode and encode at the file boundary

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::png::{PngDecoder, PngEncoder};
use image::{ColorType, DynamicImage, ImageEncoder, RgbaImage};

use crate::error::FramecutError;

/// Decode a PNG file.
///
/// The file handle is released as soon as decoding finishes.
pub fn load_png(path: impl AsRef<Path>) -> Result<DynamicImage, FramecutError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FramecutError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decode_error = |source: image::ImageError| FramecutError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let decoder = PngDecoder::new(BufReader::new(file)).map_err(decode_error)?;
    DynamicImage::from_decoder(decoder).map_err(decode_error)
}

/// Encode `image` as an 8-bit RGBA PNG, creating or truncating `path`.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), FramecutError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| FramecutError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(|source| FramecutError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|source| FramecutError::Write {
        path: path.to_path_buf(),
        source,
    })
}
