//! Frame clamping and region copy

use image::{imageops, GenericImageView, ImageBuffer, Pixel};

use crate::types::{BoundingBox, CropRect};

/// Reduce the requested frame so the crop stays near the image.
///
/// The four checks run in a fixed order on the same value and each one
/// replaces it outright: the right and bottom checks reset the frame to the
/// image dimension, the left and top checks reset it to the distance from
/// the edge. Only the last two can lower it, so the result never exceeds
/// `min_x` or `min_y`. The right and bottom edges of the resulting crop may
/// still overhang the image.
pub fn clamp_frame(bounds: &BoundingBox, width: u32, height: u32, frame: u32) -> u32 {
    let mut frame = frame;

    if u64::from(bounds.max_x) + u64::from(frame) > u64::from(width) {
        frame = width;
    }
    if u64::from(bounds.max_y) + u64::from(frame) > u64::from(height) {
        frame = height;
    }
    if bounds.min_x < frame {
        frame = bounds.min_x;
    }
    if bounds.min_y < frame {
        frame = bounds.min_y;
    }

    frame
}

/// Copy `rect` of `image` into a newly allocated buffer.
///
/// Pixels are copied as-is, without blending. Parts of `rect` outside the
/// source are left fully transparent.
pub fn crop<I>(image: &I, rect: CropRect) -> ImageBuffer<I::Pixel, Vec<<I::Pixel as Pixel>::Subpixel>>
where
    I: GenericImageView,
{
    let mut dest = ImageBuffer::new(rect.width, rect.height);
    imageops::replace(&mut dest, image, -i64::from(rect.x), -i64::from(rect.y));
    dest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::scan_bounds;
    use image::{Rgba, RgbaImage};

    const SOLID: Rgba<u8> = Rgba([10, 200, 30, 255]);

    #[test]
    fn test_zero_frame_is_untouched() {
        let bounds = BoundingBox::new(3, 3, 5, 5);
        assert_eq!(clamp_frame(&bounds, 10, 10, 0), 0);
    }

    #[test]
    fn test_frame_that_fits() {
        let bounds = BoundingBox::new(3, 4, 5, 6);
        assert_eq!(clamp_frame(&bounds, 10, 10, 2), 2);
    }

    #[test]
    fn test_left_edge_limits_frame() {
        let bounds = BoundingBox::new(1, 4, 5, 6);
        assert_eq!(clamp_frame(&bounds, 10, 10, 3), 1);
    }

    #[test]
    fn test_top_edge_applied_last() {
        let bounds = BoundingBox::new(2, 1, 5, 6);
        assert_eq!(clamp_frame(&bounds, 10, 10, 3), 1);
    }

    #[test]
    fn test_full_rows_scenario() {
        // 10x10 with rows 3..=5 opaque: 10, then 10, then min_x = 0
        let bounds = BoundingBox::new(0, 3, 9, 5);
        assert_eq!(clamp_frame(&bounds, 10, 10, 2), 0);
    }

    #[test]
    fn test_right_edge_raises_then_left_lowers() {
        // right check jumps to 10, left check drops to 9, top check to 5
        let bounds = BoundingBox::new(9, 5, 9, 5);
        assert_eq!(clamp_frame(&bounds, 10, 10, 3), 5);
    }

    #[test]
    fn test_result_never_exceeds_min_bounds() {
        for frame in 0..40 {
            for min in 0..6 {
                let bounds = BoundingBox::new(min, 5 - min, 8, 7);
                let applied = clamp_frame(&bounds, 12, 9, frame);
                assert!(applied <= bounds.min_x);
                assert!(applied <= bounds.min_y);
            }
        }
    }

    #[test]
    fn test_huge_frame_does_not_overflow() {
        let bounds = BoundingBox::new(2, 2, 4, 4);
        assert_eq!(clamp_frame(&bounds, 8, 8, u32::MAX), 2);
    }

    #[test]
    fn test_crop_copies_region() {
        let mut img = RgbaImage::new(6, 6);
        img.put_pixel(2, 3, SOLID);
        img.put_pixel(4, 3, Rgba([1, 2, 3, 128]));

        let out = crop(&img, CropRect { x: 2, y: 3, width: 3, height: 1 });
        assert_eq!(out.dimensions(), (3, 1));
        assert_eq!(*out.get_pixel(0, 0), SOLID);
        assert_eq!(*out.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(2, 0), Rgba([1, 2, 3, 128]));
    }

    #[test]
    fn test_crop_overhang_is_transparent() {
        let img = RgbaImage::from_pixel(4, 4, SOLID);
        let out = crop(&img, CropRect { x: 3, y: 2, width: 3, height: 3 });
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(*out.get_pixel(0, 0), SOLID);
        assert_eq!(*out.get_pixel(0, 1), SOLID);
        assert_eq!(*out.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(0, 2), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_crop_with_frame_keeps_padding() {
        let mut img = RgbaImage::new(10, 10);
        img.put_pixel(4, 4, SOLID);
        img.put_pixel(5, 5, SOLID);

        let bounds = scan_bounds(&img);
        let frame = clamp_frame(&bounds, 10, 10, 2);
        let out = crop(&img, CropRect::around(&bounds, frame));

        assert_eq!(frame, 2);
        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!(*out.get_pixel(2, 2), SOLID);
        assert_eq!(*out.get_pixel(3, 3), SOLID);
        assert_eq!(out.get_pixel(0, 0).0[3], 0);
    }
}
