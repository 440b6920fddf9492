// SPDX-License-Identifier: MPL-2.0
//! Editing session for a single photo.
//!
//! Owns the working bitmap, the display copy, and the interactive crop
//! selection. Overlay events arrive already expressed in container
//! coordinates; the session keeps the latest emitted region so a crop can be
//! applied at any moment.

use crate::domain::geometry::{CropRegion, CropSelection, SelectionRect};
use crate::domain::library::PhotoId;
use crate::error::{Error, Result};
use crate::media::image::{self, ImageData};
use crate::media::{edit, image_transform, EditOperation};
use crate::ui::overlay::OverlayEvent;
use image_rs::DynamicImage;
use std::path::Path;

#[derive(Debug)]
pub struct EditorSession {
    pub photo_id: PhotoId,
    working: DynamicImage,
    display: ImageData,
    selection: CropSelection,
    region: Option<CropRegion>,
    dirty: bool,
    saving: bool,
}

impl EditorSession {
    /// Loads the photo's file and starts a session over it.
    pub fn open(photo_id: PhotoId, path: &Path) -> Result<Self> {
        let working = image::load_dynamic(path)?;
        let display = image_transform::dynamic_to_image_data(&working);
        Ok(Self {
            photo_id,
            working,
            display,
            selection: CropSelection::new(),
            region: None,
            dirty: false,
            saving: false,
        })
    }

    #[must_use]
    pub fn display(&self) -> &ImageData {
        &self.display
    }

    #[must_use]
    pub fn selection_rect(&self) -> Option<SelectionRect> {
        self.selection.rect()
    }

    #[must_use]
    pub fn crop_region(&self) -> Option<CropRegion> {
        self.region
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    pub fn mark_saved(&mut self) {
        self.saving = false;
        self.dirty = false;
    }

    /// A clone of the working bitmap, for handing to a background save.
    #[must_use]
    pub fn working_image(&self) -> DynamicImage {
        self.working.clone()
    }

    /// Routes an overlay event into the crop selection.
    pub fn handle_overlay(&mut self, event: OverlayEvent) {
        match event {
            OverlayEvent::Resized { width, height } => {
                self.region = self.selection.set_container_size(width, height);
            }
            OverlayEvent::Pressed { x, y } => self.selection.drag_start(x, y),
            OverlayEvent::Dragged { dx, dy } => {
                if let Some(region) = self.selection.drag_by(dx, dy) {
                    self.region = Some(region);
                }
            }
            OverlayEvent::Released => self.selection.drag_end(),
        }
    }

    pub fn rotate_left(&mut self) {
        self.apply_operation(EditOperation::RotateLeft);
    }

    pub fn rotate_right(&mut self) {
        self.apply_operation(EditOperation::RotateRight);
    }

    pub fn flip_horizontal(&mut self) {
        self.apply_operation(EditOperation::FlipHorizontal);
    }

    pub fn flip_vertical(&mut self) {
        self.apply_operation(EditOperation::FlipVertical);
    }

    /// Crops the working image to the current selection, mapped from
    /// container space into the bitmap's pixel space.
    pub fn apply_crop(&mut self) -> Result<()> {
        let Some(region) = self.region else {
            return Err(Error::Image("no crop selection yet".to_string()));
        };
        self.working = edit::crop_to_selection(&self.working, region)?;
        self.refresh_display();
        Ok(())
    }

    fn apply_operation(&mut self, operation: EditOperation) {
        self.working = edit::apply(&self.working, operation);
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        self.display = image_transform::dynamic_to_image_data(&self.working);
        self.dirty = true;
    }
}
