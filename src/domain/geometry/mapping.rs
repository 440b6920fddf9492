// SPDX-License-Identifier: MPL-2.0
//! Letterbox-aware mapping from container coordinates to image pixels.
//!
//! A photo displayed with a "contain" fit is uniformly scaled and centered,
//! leaving letterbox bars on two sides when the aspect ratios differ. The
//! functions here derive that placement and invert it, turning a crop
//! selection made over the container into a rectangle on the original bitmap.

use crate::domain::geometry::selection::CropRegion;
use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// The sub-rectangle of the container actually covered by the rendered image,
/// plus the uniform scale factor that produced it. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

/// Crop rectangle in image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Computes where a `image_width` x `image_height` bitmap lands inside a
/// container under centered contain-fit scaling.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidDimensions`] when any dimension is zero.
pub fn display_bounds(
    container_width: u32,
    container_height: u32,
    image_width: u32,
    image_height: u32,
) -> Result<DisplayBounds, GeometryError> {
    if container_width == 0 || container_height == 0 || image_width == 0 || image_height == 0 {
        return Err(GeometryError::InvalidDimensions {
            container_width,
            container_height,
            image_width,
            image_height,
        });
    }

    let scale = (f64::from(container_width) / f64::from(image_width))
        .min(f64::from(container_height) / f64::from(image_height));
    let scaled_width = f64::from(image_width) * scale;
    let scaled_height = f64::from(image_height) * scale;

    Ok(DisplayBounds {
        offset_x: (f64::from(container_width) - scaled_width) / 2.0,
        offset_y: (f64::from(container_height) - scaled_height) / 2.0,
        width: scaled_width,
        height: scaled_height,
        scale,
    })
}

/// Maps a container-space crop region onto the original bitmap.
///
/// The selection is shifted by the letterbox offset, divided by the display
/// scale, truncated to integers, and clamped so the result always lies inside
/// the image: origin in `[0, dimension - 1]`, extent in
/// `[1, dimension - origin]`. A selection reaching into the letterbox bars
/// silently shrinks to the nearest valid crop; it is not an error.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidDimensions`] when the region's container
/// dimensions or the image dimensions are zero.
pub fn map_to_image_coordinates(
    region: CropRegion,
    image_width: u32,
    image_height: u32,
) -> Result<PixelRect, GeometryError> {
    let bounds = display_bounds(
        region.container_width,
        region.container_height,
        image_width,
        image_height,
    )?;

    let image_x = (f64::from(region.x) - bounds.offset_x) / bounds.scale;
    let image_y = (f64::from(region.y) - bounds.offset_y) / bounds.scale;
    let mapped_width = f64::from(region.width) / bounds.scale;
    let mapped_height = f64::from(region.height) / bounds.scale;

    let x = (image_x as i64).clamp(0, i64::from(image_width) - 1) as u32;
    let y = (image_y as i64).clamp(0, i64::from(image_height) - 1) as u32;
    let width = (mapped_width as i64).clamp(1, i64::from(image_width - x)) as u32;
    let height = (mapped_height as i64).clamp(1, i64::from(image_height - y)) as u32;

    Ok(PixelRect {
        x,
        y,
        width,
        height,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    fn region(x: u32, y: u32, width: u32, height: u32, cw: u32, ch: u32) -> CropRegion {
        CropRegion {
            x,
            y,
            width,
            height,
            container_width: cw,
            container_height: ch,
        }
    }

    // -------------------------------------------------------------------------
    // DisplayBounds
    // -------------------------------------------------------------------------

    #[test]
    fn wide_image_letterboxes_top_and_bottom() {
        let bounds = display_bounds(400, 400, 200, 100).expect("bounds");

        assert_abs_diff_eq!(bounds.scale, 2.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.width, 400.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.height, 200.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.offset_x, 0.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.offset_y, 100.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn tall_image_letterboxes_left_and_right() {
        let bounds = display_bounds(300, 300, 300, 600).expect("bounds");

        assert_abs_diff_eq!(bounds.scale, 0.5, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.width, 150.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.height, 300.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.offset_x, 75.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.offset_y, 0.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn matching_aspect_ratio_has_no_offset() {
        let bounds = display_bounds(200, 200, 100, 100).expect("bounds");

        assert_abs_diff_eq!(bounds.offset_x, 0.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.offset_y, 0.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(bounds.scale, 2.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        for (cw, ch, iw, ih) in [
            (0, 400, 200, 100),
            (400, 0, 200, 100),
            (400, 400, 0, 100),
            (400, 400, 200, 0),
        ] {
            let err = display_bounds(cw, ch, iw, ih).expect_err("zero must fail");
            assert!(matches!(err, GeometryError::InvalidDimensions { .. }));
        }
    }

    // -------------------------------------------------------------------------
    // Mapping
    // -------------------------------------------------------------------------

    #[test]
    fn full_container_maps_to_full_image() {
        // Letterboxed in both orientations plus the aligned case. Truncation
        // of a non-dyadic scale may land one pixel short of the far edge.
        for (cw, ch, iw, ih) in [
            (400, 400, 200, 100),
            (300, 300, 300, 600),
            (640, 480, 640, 480),
            (123, 457, 31, 97),
        ] {
            let rect = map_to_image_coordinates(region(0, 0, cw, ch, cw, ch), iw, ih)
                .expect("mapping");
            assert_eq!((rect.x, rect.y), (0, 0), "{}x{} in {}x{}", iw, ih, cw, ch);
            assert!(iw - rect.width <= 1, "width {} for image {}", rect.width, iw);
            assert!(ih - rect.height <= 1, "height {} for image {}", rect.height, ih);
        }
    }

    #[test]
    fn selection_over_letterbox_bars_clamps_to_image() {
        // 200x100 image in a 400x400 container: scale 2, bars above and below.
        let rect = map_to_image_coordinates(region(0, 0, 400, 400, 400, 400), 200, 100)
            .expect("mapping");

        assert_eq!(rect, PixelRect { x: 0, y: 0, width: 200, height: 100 });
    }

    #[test]
    fn top_half_of_displayed_image_maps_through_scale_division() {
        // 300x600 image in a 300x300 container: scale 0.5, bars at the sides.
        let rect = map_to_image_coordinates(region(75, 0, 150, 150, 300, 300), 300, 600)
            .expect("mapping");

        assert_eq!(rect, PixelRect { x: 0, y: 0, width: 300, height: 300 });
    }

    #[test]
    fn selection_entirely_inside_a_bar_shrinks_to_image_edge() {
        // Selection sits fully within the top letterbox bar.
        let rect = map_to_image_coordinates(region(0, 0, 400, 50, 400, 400), 200, 100)
            .expect("mapping");

        assert_eq!(rect.y, 0);
        assert_eq!(rect.width, 200);
        assert_eq!(rect.height, 25);
    }

    #[test]
    fn upscaled_display_divides_back_to_source_pixels() {
        // 100x100 image shown at 4x in a 400x400 container.
        let rect = map_to_image_coordinates(region(200, 200, 100, 100, 400, 400), 100, 100)
            .expect("mapping");

        assert_eq!(rect, PixelRect { x: 50, y: 50, width: 25, height: 25 });
    }

    #[test]
    fn extent_never_collapses_below_one_pixel() {
        // A 1-unit selection at 4x display scale maps to a quarter pixel.
        let rect = map_to_image_coordinates(region(0, 0, 1, 1, 400, 400), 100, 100)
            .expect("mapping");

        assert_eq!(rect.width, 1);
        assert_eq!(rect.height, 1);
    }

    #[test]
    fn origin_clamps_inside_image() {
        // Selection starting at the far edge of the container.
        let rect = map_to_image_coordinates(region(399, 399, 1, 1, 400, 400), 100, 100)
            .expect("mapping");

        assert_eq!(rect.x, 99);
        assert_eq!(rect.y, 99);
        assert_eq!(rect.width, 1);
        assert_eq!(rect.height, 1);
    }

    #[test]
    fn invalid_dimensions_propagate_from_mapping() {
        let err = map_to_image_coordinates(region(0, 0, 100, 100, 400, 400), 0, 100)
            .expect_err("zero image width must fail");
        assert!(matches!(err, GeometryError::InvalidDimensions { .. }));

        let err = map_to_image_coordinates(region(0, 0, 100, 100, 0, 400), 100, 100)
            .expect_err("zero container width must fail");
        assert!(matches!(err, GeometryError::InvalidDimensions { .. }));
    }
}
