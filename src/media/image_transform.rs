// SPDX-License-Identifier: MPL-2.0
//! Quarter-turn rotation of decoded pixels.

use crate::domain::editing::RotationAngle;
use crate::domain::geometry::Size;
use image_rs::{imageops, RgbaImage};

/// Rotates `image` clockwise by `angle`.
///
/// Returns a copy for a zero angle so callers always own the result.
#[must_use]
pub fn rotate(image: &RgbaImage, angle: RotationAngle) -> RgbaImage {
    match angle.degrees() {
        90 => imageops::rotate90(image),
        180 => imageops::rotate180(image),
        270 => imageops::rotate270(image),
        _ => image.clone(),
    }
}

/// Size of an image of `size` after rotating it by `angle`.
#[must_use]
pub fn rotated_size(size: Size, angle: RotationAngle) -> Size {
    if angle.is_quarter_turn() {
        Size::new(size.height, size.width)
    } else {
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    fn marked(width: u32, height: u32) -> RgbaImage {
        let mut image = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image
    }

    #[test]
    fn rotate_right_moves_top_left_to_top_right() {
        let rotated = rotate(&marked(4, 3), RotationAngle::ZERO.rotate_right());
        assert_eq!(rotated.dimensions(), (3, 4));
        assert_eq!(rotated.get_pixel(2, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn rotate_left_moves_top_left_to_bottom_left() {
        let rotated = rotate(&marked(4, 3), RotationAngle::ZERO.rotate_left());
        assert_eq!(rotated.dimensions(), (3, 4));
        assert_eq!(rotated.get_pixel(0, 3).0, [255, 0, 0, 255]);
    }

    #[test]
    fn half_turn_keeps_dimensions() {
        let rotated = rotate(&marked(4, 3), RotationAngle::new(180));
        assert_eq!(rotated.dimensions(), (4, 3));
        assert_eq!(rotated.get_pixel(3, 2).0, [255, 0, 0, 255]);
    }

    #[test]
    fn rotated_size_swaps_on_quarter_turns() {
        let size = Size::new(4.0, 3.0);
        assert_eq!(rotated_size(size, RotationAngle::new(90)), Size::new(3.0, 4.0));
        assert_eq!(rotated_size(size, RotationAngle::new(180)), size);
    }
}
