// SPDX-License-Identifier: MPL-2.0
//! Image loading and saving.

use crate::error::Result;
use chrono::{DateTime, Utc};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded image ready for display: an Iced handle plus its dimensions.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes an image file into a `DynamicImage` for editing.
pub fn load_dynamic(path: &Path) -> Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

/// Loads an image file for display.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let dynamic = load_dynamic(path)?;
    let (width, height) = dynamic.dimensions();
    let pixels = dynamic.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Writes an image to disk. JPEG output honors the requested quality; other
/// formats are encoded by extension via the image crate's defaults.
pub fn save_image(image: &DynamicImage, path: &Path, jpeg_quality: u8) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let is_jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "jpg" | "jpeg"))
        .unwrap_or(false);

    if is_jpeg {
        let file = fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        let encoder = image_rs::codecs::jpeg::JpegEncoder::new_with_quality(writer, jpeg_quality);
        // JPEG has no alpha channel
        image.to_rgb8().write_with_encoder(encoder)?;
    } else {
        image.save(path)?;
    }
    Ok(())
}

/// Builds the output path for an edited copy of a photo: a sibling JPEG named
/// after the save moment, so successive edits never overwrite each other.
#[must_use]
pub fn edited_photo_path(original: &Path, moment: DateTime<Utc>) -> PathBuf {
    let file_name = format!("edit_{}.jpg", moment.format("%Y%m%d_%H%M%S%3f"));
    match original.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Backup location for a photo file: the same path with `.bak` appended.
#[must_use]
pub fn backup_path_for(original: &Path) -> PathBuf {
    let mut name = original.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}
