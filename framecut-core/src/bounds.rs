//! Content bounds detection
//!
//! Each edge of the bounding box is found by its own directional scan that
//! stops at the first row or column holding a non-transparent pixel.

use image::{GenericImageView, Pixel, Primitive};

use crate::types::BoundingBox;

/// Whether a pixel has any opacity at all.
///
/// Pixel types without an alpha channel are always opaque.
fn is_opaque<P: Pixel>(pixel: P) -> bool {
    pixel.to_rgba().0[3] != <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE
}

fn row_has_content<I: GenericImageView>(image: &I, y: u32) -> bool {
    (0..image.width()).any(|x| is_opaque(image.get_pixel(x, y)))
}

fn column_has_content<I: GenericImageView>(image: &I, x: u32) -> bool {
    (0..image.height()).any(|y| is_opaque(image.get_pixel(x, y)))
}

/// Top-down scan for the first row with content.
pub fn first_opaque_row<I: GenericImageView>(image: &I) -> Option<u32> {
    (0..image.height()).find(|&y| row_has_content(image, y))
}

/// Bottom-up scan for the last row with content.
pub fn last_opaque_row<I: GenericImageView>(image: &I) -> Option<u32> {
    (0..image.height()).rev().find(|&y| row_has_content(image, y))
}

/// Left-to-right scan for the first column with content.
pub fn first_opaque_column<I: GenericImageView>(image: &I) -> Option<u32> {
    (0..image.width()).find(|&x| column_has_content(image, x))
}

/// Right-to-left scan for the last column with content.
pub fn last_opaque_column<I: GenericImageView>(image: &I) -> Option<u32> {
    (0..image.width()).rev().find(|&x| column_has_content(image, x))
}

/// Whether the image holds at least one non-transparent pixel.
pub fn has_content<I: GenericImageView>(image: &I) -> bool {
    first_opaque_row(image).is_some()
}

/// Compute the bounding box of all non-transparent pixels.
///
/// A scan that finds nothing leaves its bound at 0, so a fully transparent
/// image yields `BoundingBox::default()`.
pub fn scan_bounds<I: GenericImageView>(image: &I) -> BoundingBox {
    let bounds = BoundingBox {
        min_y: first_opaque_row(image).unwrap_or(0),
        max_y: last_opaque_row(image).unwrap_or(0),
        min_x: first_opaque_column(image).unwrap_or(0),
        max_x: last_opaque_column(image).unwrap_or(0),
    };

    log::debug!(
        "Scanned {}x{}: x={}..={}, y={}..={}",
        image.width(),
        image.height(),
        bounds.min_x,
        bounds.max_x,
        bounds.min_y,
        bounds.max_y
    );

    bounds
}
