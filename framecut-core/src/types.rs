//! Geometry shared by the scanner and the cropper

/// Smallest rectangle holding every pixel with non-zero alpha.
///
/// Bounds are inclusive. A fully transparent image yields the all-zero box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the box in pixels
    pub fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x) + 1
    }

    /// Height of the box in pixels
    pub fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y) + 1
    }
}

/// Region of the source image copied into the output.
///
/// `x`/`y` are in source coordinates, `width`/`height` are the output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Expand `bounds` by `frame` pixels on every side.
    ///
    /// `frame` must already be clamped, so it never exceeds `min_x` or `min_y`.
    pub fn around(bounds: &BoundingBox, frame: u32) -> Self {
        Self {
            x: bounds.min_x - frame,
            y: bounds.min_y - frame,
            width: bounds.width() + 2 * frame,
            height: bounds.height() + 2 * frame,
        }
    }
}
