// SPDX-License-Identifier: MPL-2.0
//! Image loading, saving, and the editing pipeline.

pub mod edit;
pub mod image;
pub mod image_transform;

pub use edit::EditOperation;
pub use image::{load_dynamic, load_image, save_image, ImageData};
