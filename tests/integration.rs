// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows: interactive selection through the geometry mapper onto
//! real pixels, and a library round trip through an edit save.

use chrono::Utc;
use image_rs::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use photo_lens::domain::geometry::{map_to_image_coordinates, CropSelection, PixelRect};
use photo_lens::library::Library;
use photo_lens::media::{edit, image, EditOperation};
use tempfile::tempdir;

fn black_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
        width,
        height,
        Rgba([0u8, 0, 0, 255]),
    ))
}

#[test]
fn dragging_selection_to_full_surface_crops_whole_image() {
    // A 200x100 photo shown in a 400x400 surface sits letterboxed between
    // y=100 and y=300. Expanding the selection over the whole surface must
    // still crop exactly the whole photo.
    let photo = black_image(200, 100);

    let mut selection = CropSelection::new();
    selection.set_container_size(400.0, 400.0);

    // Drag the top-left corner to the surface origin...
    selection.drag_start(40.0, 40.0);
    selection.drag_by(-40.0, -40.0);
    selection.drag_end();
    // ...and the bottom-right corner to the far surface corner.
    selection.drag_start(360.0, 360.0);
    selection.drag_by(40.0, 40.0);
    selection.drag_end();

    let region = selection.region().expect("region");
    assert_eq!((region.x, region.y), (0, 0));
    assert_eq!((region.width, region.height), (400, 400));

    let cropped = edit::crop_to_selection(&photo, region).expect("crop");
    assert_eq!(cropped.width(), 200);
    assert_eq!(cropped.height(), 100);
}

#[test]
fn selection_drags_land_on_the_expected_source_pixels() {
    // 100x100 photo displayed at 4x in a 400x400 surface. Paint the source
    // block (50,50)..(75,75) white; it is displayed at (200,200)..(300,300).
    let mut buffer = ImageBuffer::from_pixel(100, 100, Rgba([0u8, 0, 0, 255]));
    for x in 50..75 {
        for y in 50..75 {
            buffer.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    let photo = DynamicImage::ImageRgba8(buffer);

    let mut selection = CropSelection::new();
    selection.set_container_size(400.0, 400.0);
    // default rect (40,40)..(360,360)

    // Pull the top-left corner onto the white block's displayed origin.
    selection.drag_start(40.0, 40.0);
    selection.drag_by(160.0, 160.0);
    selection.drag_end();
    // Pull the bottom-right corner onto its displayed end.
    selection.drag_start(360.0, 360.0);
    selection.drag_by(-60.0, -60.0);
    selection.drag_end();

    let region = selection.region().expect("region");
    assert_eq!((region.x, region.y), (200, 200));
    assert_eq!((region.width, region.height), (100, 100));

    let rect = map_to_image_coordinates(region, 100, 100).expect("mapping");
    assert_eq!(
        rect,
        PixelRect {
            x: 50,
            y: 50,
            width: 25,
            height: 25
        }
    );

    let cropped = edit::crop_to_selection(&photo, region).expect("crop");
    assert_eq!((cropped.width(), cropped.height()), (25, 25));
    let pixels = cropped.to_rgba8();
    for (_, _, pixel) in pixels.enumerate_pixels() {
        assert_eq!(pixel.0, [255, 255, 255, 255]);
    }
}

#[test]
fn library_survives_an_edit_save_cycle() {
    let dir = tempdir().expect("temp dir");
    let data_dir = dir.path().join("data");

    // Import a photo file.
    let original_path = dir.path().join("holiday.png");
    image::save_image(&black_image(10, 6), &original_path, 95).expect("write original");

    let mut library = Library::new();
    let photo_id = library.add_photo(original_path.clone(), "Holiday", None, Utc::now());
    library.toggle_favorite(&photo_id);

    // Edit: rotate and write the result next to the original.
    let working = image::load_dynamic(&original_path).expect("load");
    let rotated = edit::apply(&working, EditOperation::RotateRight);
    let edited_path = image::edited_photo_path(&original_path, Utc::now());
    image::save_image(&rotated, &edited_path, 95).expect("write edited");

    assert!(library.update_photo_path(&photo_id, edited_path.clone()));
    library.save_to(Some(data_dir.clone())).expect("persist");

    // A fresh process sees the edited file and the favorite flag.
    let (reloaded, warning) = Library::load_from(Some(data_dir));
    assert!(warning.is_none());
    let photo = reloaded.photo(&photo_id).expect("photo");
    assert_eq!(photo.path, edited_path);
    assert!(photo.favorite);

    let reopened = image::load_dynamic(&photo.path).expect("reopen");
    assert_eq!((reopened.width(), reopened.height()), (6, 10));
}
