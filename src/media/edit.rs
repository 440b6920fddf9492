// SPDX-License-Identifier: MPL-2.0
//! Edit operations over a working image.
//!
//! An edit session holds a `DynamicImage` and applies operations to it one at
//! a time. Crops arrive either as pixel rectangles or as container-space
//! selections that are first mapped through the crop geometry.

use crate::domain::geometry::{map_to_image_coordinates, CropRegion, PixelRect};
use crate::error::Result;
use crate::media::image_transform;
use image_rs::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};

/// A single edit applied to a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOperation {
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    Crop(PixelRect),
}

/// Applies one operation, returning the transformed image.
///
/// A crop that collapses entirely (the rectangle has no overlap with the
/// image) leaves the image unchanged rather than failing.
#[must_use]
pub fn apply(image: &DynamicImage, operation: EditOperation) -> DynamicImage {
    match operation {
        EditOperation::RotateLeft => image_transform::rotate_left(image),
        EditOperation::RotateRight => image_transform::rotate_right(image),
        EditOperation::FlipHorizontal => image_transform::flip_horizontal(image),
        EditOperation::FlipVertical => image_transform::flip_vertical(image),
        EditOperation::Crop(rect) => {
            image_transform::crop(image, rect.x, rect.y, rect.width, rect.height)
                .unwrap_or_else(|| image.clone())
        }
    }
}

/// Applies a sequence of operations in order.
#[must_use]
pub fn apply_all(image: &DynamicImage, operations: &[EditOperation]) -> DynamicImage {
    operations
        .iter()
        .fold(image.clone(), |current, operation| apply(&current, *operation))
}

/// Crops the image to a container-space selection: maps the selection into
/// pixel space (correcting for letterboxing), then crops.
pub fn crop_to_selection(image: &DynamicImage, region: CropRegion) -> Result<DynamicImage> {
    let rect = map_to_image_coordinates(region, image.width(), image.height())?;
    Ok(apply(image, EditOperation::Crop(rect)))
}
