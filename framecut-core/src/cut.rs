//! Per-file pipeline: decode, scan, clamp, crop, encode

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};

use crate::bounds::{has_content, scan_bounds};
use crate::codec::{load_png, save_png};
use crate::error::FramecutError;
use crate::frame::{clamp_frame, crop};
use crate::naming::{output_path, DEFAULT_MARKER};
use crate::types::{BoundingBox, CropRect};

/// Options applied to every file of a run
#[derive(Debug, Clone, PartialEq)]
pub struct CutOptions {
    /// Requested transparent frame in pixels (clamped per image)
    pub frame: u32,
    /// Write back to the input path instead of a marked copy
    pub overwrite: bool,
    /// Marker inserted before the extension of the output name
    pub marker: String,
    /// Reject fully transparent images instead of writing a 1x1 result
    pub strict: bool,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            frame: 0,
            overwrite: false,
            marker: DEFAULT_MARKER.to_string(),
            strict: false,
        }
    }
}

impl CutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame(mut self, frame: u32) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// In-memory result of cutting one image
pub struct Cut<P: Pixel> {
    pub bounds: BoundingBox,
    /// Frame actually applied after clamping
    pub frame: u32,
    pub rect: CropRect,
    pub image: ImageBuffer<P, Vec<P::Subpixel>>,
}

/// Outcome of [`cut_file`]
#[derive(Debug, Clone, PartialEq)]
pub struct CutReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bounds: BoundingBox,
    pub frame: u32,
    pub width: u32,
    pub height: u32,
}

/// Cut the transparent border of an in-memory image.
pub fn cut_image<I: GenericImageView>(image: &I, frame: u32) -> Cut<I::Pixel> {
    let (width, height) = image.dimensions();
    let bounds = scan_bounds(image);
    let applied = clamp_frame(&bounds, width, height, frame);
    let rect = CropRect::around(&bounds, applied);

    log::debug!(
        "Frame {} clamped to {}, cropping {}x{} at ({}, {})",
        frame,
        applied,
        rect.width,
        rect.height,
        rect.x,
        rect.y
    );

    Cut {
        bounds,
        frame: applied,
        rect,
        image: crop(image, rect),
    }
}

/// Cut a PNG file and write the result next to it, or over it.
///
/// Decoding widens to 16-bit RGBA so faint alpha in 16-bit files still
/// counts as content; the output is always 8-bit RGBA.
pub fn cut_file(path: impl AsRef<Path>, options: &CutOptions) -> Result<CutReport, FramecutError> {
    let input = path.as_ref();
    let source = load_png(input)?.into_rgba16();

    if !has_content(&source) {
        if options.strict {
            return Err(FramecutError::NoContent(input.to_path_buf()));
        }
        log::warn!("{} is fully transparent, writing a single pixel", input.display());
    }

    let cut = cut_image(&source, options.frame);
    drop(source);

    let output = output_path(input, options.overwrite, &options.marker);
    let image = DynamicImage::ImageRgba16(cut.image).into_rgba8();
    save_png(&image, &output)?;

    log::info!(
        "Cut {} -> {} ({}x{}, frame {})",
        input.display(),
        output.display(),
        image.width(),
        image.height(),
        cut.frame
    );

    Ok(CutReport {
        input: input.to_path_buf(),
        output,
        bounds: cut.bounds,
        frame: cut.frame,
        width: image.width(),
        height: image.height(),
    })
}
