// SPDX-License-Identifier: MPL-2.0
//! Image transformation primitives for rotate, flip, and crop operations.

use crate::media::image::ImageData;
use image_rs::{DynamicImage, GenericImageView};

/// Rotate an image 90 degrees counter-clockwise (left).
pub fn rotate_left(image: &DynamicImage) -> DynamicImage {
    image.rotate270()
}

/// Rotate an image 90 degrees clockwise (right).
pub fn rotate_right(image: &DynamicImage) -> DynamicImage {
    image.rotate90()
}

/// Flip an image horizontally (mirror left-to-right).
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Flip an image vertically (mirror top-to-bottom).
pub fn flip_vertical(image: &DynamicImage) -> DynamicImage {
    image.flipv()
}

/// Convert a `DynamicImage` back to `ImageData` for display.
pub fn dynamic_to_image_data(dynamic: &DynamicImage) -> ImageData {
    let (width, height) = dynamic.dimensions();
    let pixels = dynamic.to_rgba8().into_vec();
    ImageData::from_rgba(width, height, pixels)
}

/// Crop the image to the specified rectangle.
///
/// The rectangle coordinates are clamped to the image boundaries.
/// If the resulting crop area is invalid (zero width or height), returns None.
pub fn crop(image: &DynamicImage, x: u32, y: u32, width: u32, height: u32) -> Option<DynamicImage> {
    let img_width = image.width();
    let img_height = image.height();

    // Clamp coordinates to image boundaries
    let x = x.min(img_width.saturating_sub(1));
    let y = y.min(img_height.saturating_sub(1));

    // Calculate available width and height from the crop start point
    let max_width = img_width.saturating_sub(x);
    let max_height = img_height.saturating_sub(y);

    let width = width.min(max_width).max(1);
    let height = height.min(max_height).max(1);

    if max_width == 0 || max_height == 0 {
        return None;
    }

    Some(image.crop_imm(x, y, width, height))
}
