// SPDX-License-Identifier: MPL-2.0
//! Interactive crop selection state machine.
//!
//! `CropSelection` owns the crop rectangle in container coordinates and
//! updates it from pointer drags. It is a plain state object: the host input
//! loop feeds it the container size and drag events, and forwards the
//! returned [`CropRegion`] to whoever needs to map it onto the bitmap.

// =============================================================================
// Selection Bounds
// =============================================================================

/// Bounds and tuning constants for the crop selection.
pub mod selection_bounds {
    /// Smallest selection edge length, in container units.
    pub const MIN_CROP_SIZE: f32 = 100.0;
    /// Radius of the circular hotspot around each drag handle.
    pub const HANDLE_HIT_RADIUS: f32 = 48.0;
    /// Fraction of the short container side used for the initial square.
    pub const DEFAULT_SIZE_FRACTION: f32 = 0.8;
}

use selection_bounds::{DEFAULT_SIZE_FRACTION, HANDLE_HIT_RADIUS, MIN_CROP_SIZE};

// =============================================================================
// Handle
// =============================================================================

/// The part of the crop rectangle a drag is attached to.
///
/// Corners resize two edges, edge midpoints resize one, `Center` moves the
/// whole rectangle. `None` means the drag started outside every hotspot and
/// is ignored until the next drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handle {
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

// =============================================================================
// SelectionRect
// =============================================================================

/// Axis-aligned selection rectangle in container coordinates.
///
/// Invariant after every update: `left <= right`, `top <= bottom`, both
/// edges at least [`selection_bounds::MIN_CROP_SIZE`] long whenever the
/// container can accommodate that, and the whole rectangle inside
/// `[0, container_width] x [0, container_height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl SelectionRect {
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Reference point of a handle on this rectangle, if the handle has one.
    #[must_use]
    pub fn handle_point(&self, handle: Handle) -> Option<(f32, f32)> {
        let mid_x = (self.left + self.right) / 2.0;
        let mid_y = (self.top + self.bottom) / 2.0;
        match handle {
            Handle::TopLeft => Some((self.left, self.top)),
            Handle::TopRight => Some((self.right, self.top)),
            Handle::BottomLeft => Some((self.left, self.bottom)),
            Handle::BottomRight => Some((self.right, self.bottom)),
            Handle::Top => Some((mid_x, self.top)),
            Handle::Bottom => Some((mid_x, self.bottom)),
            Handle::Left => Some((self.left, mid_y)),
            Handle::Right => Some((self.right, mid_y)),
            Handle::Center | Handle::None => None,
        }
    }
}

// =============================================================================
// CropRegion
// =============================================================================

/// Integer snapshot of the selection, emitted after every change.
///
/// Carries the container dimensions alongside the rectangle so a caller can
/// always map into image-pixel space without tracking separate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub container_width: u32,
    pub container_height: u32,
}

// =============================================================================
// CropSelection
// =============================================================================

/// Crop selection state: the rectangle, the container it lives in, and the
/// handle a drag is currently attached to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CropSelection {
    container: Option<(f32, f32)>,
    rect: Option<SelectionRect>,
    active_handle: Handle,
}

impl CropSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a (re)layout of the container and derives the default
    /// selection: a centered square with side `0.8 * min(width, height)`.
    ///
    /// Returns the freshly emitted region so callers can preview the crop
    /// before any interaction. A non-positive dimension clears the selection.
    pub fn set_container_size(&mut self, width: f32, height: f32) -> Option<CropRegion> {
        self.active_handle = Handle::None;
        if width <= 0.0 || height <= 0.0 {
            self.container = None;
            self.rect = None;
            return None;
        }

        self.container = Some((width, height));
        let side = width.min(height) * DEFAULT_SIZE_FRACTION;
        let x = (width - side) / 2.0;
        let y = (height - side) / 2.0;
        self.rect = Some(SelectionRect {
            left: x,
            top: y,
            right: x + side,
            bottom: y + side,
        });
        self.region()
    }

    /// Hit-tests the drag start point and latches the matching handle.
    ///
    /// Corners win over edge midpoints, which win over the interior (a move
    /// of the whole rectangle). A start point outside every hotspot and
    /// outside the rectangle latches `Handle::None`, making the following
    /// drag a no-op.
    pub fn drag_start(&mut self, x: f32, y: f32) {
        let Some(rect) = self.rect else {
            self.active_handle = Handle::None;
            return;
        };

        const CANDIDATES: [Handle; 8] = [
            Handle::TopLeft,
            Handle::TopRight,
            Handle::BottomLeft,
            Handle::BottomRight,
            Handle::Top,
            Handle::Bottom,
            Handle::Left,
            Handle::Right,
        ];

        for handle in CANDIDATES {
            if let Some((hx, hy)) = rect.handle_point(handle) {
                if is_near(x, y, hx, hy, HANDLE_HIT_RADIUS) {
                    self.active_handle = handle;
                    return;
                }
            }
        }

        self.active_handle = if rect.contains(x, y) {
            Handle::Center
        } else {
            Handle::None
        };
    }

    /// Applies an incremental drag delta to the active handle.
    ///
    /// Resized edges clamp independently: never below the minimum crop size,
    /// never outside the container. A `Center` drag translates rigidly and is
    /// clamped so the rectangle exactly touches the bound it would cross.
    /// Returns the emitted region, or `None` when nothing changed
    /// (`Handle::None`, or no selection yet).
    pub fn drag_by(&mut self, dx: f32, dy: f32) -> Option<CropRegion> {
        let (container_w, container_h) = self.container?;
        let rect = self.rect?;

        let new_rect = match self.active_handle {
            Handle::TopLeft => SelectionRect {
                left: clamp_low_edge(rect.left + dx, rect.right),
                top: clamp_low_edge(rect.top + dy, rect.bottom),
                ..rect
            },
            Handle::TopRight => SelectionRect {
                top: clamp_low_edge(rect.top + dy, rect.bottom),
                right: clamp_high_edge(rect.right + dx, rect.left, container_w),
                ..rect
            },
            Handle::BottomLeft => SelectionRect {
                left: clamp_low_edge(rect.left + dx, rect.right),
                bottom: clamp_high_edge(rect.bottom + dy, rect.top, container_h),
                ..rect
            },
            Handle::BottomRight => SelectionRect {
                right: clamp_high_edge(rect.right + dx, rect.left, container_w),
                bottom: clamp_high_edge(rect.bottom + dy, rect.top, container_h),
                ..rect
            },
            Handle::Top => SelectionRect {
                top: clamp_low_edge(rect.top + dy, rect.bottom),
                ..rect
            },
            Handle::Bottom => SelectionRect {
                bottom: clamp_high_edge(rect.bottom + dy, rect.top, container_h),
                ..rect
            },
            Handle::Left => SelectionRect {
                left: clamp_low_edge(rect.left + dx, rect.right),
                ..rect
            },
            Handle::Right => SelectionRect {
                right: clamp_high_edge(rect.right + dx, rect.left, container_w),
                ..rect
            },
            Handle::Center => translate_clamped(rect, dx, dy, container_w, container_h),
            Handle::None => return None,
        };

        self.rect = Some(new_rect);
        self.region()
    }

    /// Ends the drag. Only the active handle is reset; the rectangle stays.
    pub fn drag_end(&mut self) {
        self.active_handle = Handle::None;
    }

    #[must_use]
    pub fn active_handle(&self) -> Handle {
        self.active_handle
    }

    #[must_use]
    pub fn rect(&self) -> Option<SelectionRect> {
        self.rect
    }

    /// Current selection as integer units, truncated.
    #[must_use]
    pub fn region(&self) -> Option<CropRegion> {
        let (container_w, container_h) = self.container?;
        let rect = self.rect?;
        Some(CropRegion {
            x: rect.left as u32,
            y: rect.top as u32,
            width: rect.width() as u32,
            height: rect.height() as u32,
            container_width: container_w as u32,
            container_height: container_h as u32,
        })
    }
}

/// Clamps a left/top edge into `[0, opposite - MIN_CROP_SIZE]`.
///
/// The upper bound collapses to the lower one when the container is too small
/// to honor the minimum size, keeping the bounds invariant over the size one.
fn clamp_low_edge(value: f32, opposite: f32) -> f32 {
    value.clamp(0.0, (opposite - MIN_CROP_SIZE).max(0.0))
}

/// Clamps a right/bottom edge into `[opposite + MIN_CROP_SIZE, limit]`.
fn clamp_high_edge(value: f32, opposite: f32, limit: f32) -> f32 {
    value.clamp((opposite + MIN_CROP_SIZE).min(limit), limit)
}

/// Translates the rectangle rigidly, clamping the translation so every edge
/// stays inside `[0, container]`.
fn translate_clamped(
    rect: SelectionRect,
    dx: f32,
    dy: f32,
    container_w: f32,
    container_h: f32,
) -> SelectionRect {
    let width = rect.width();
    let height = rect.height();

    let mut new_left = rect.left + dx;
    let mut new_top = rect.top + dy;

    if new_left < 0.0 {
        new_left = 0.0;
    }
    if new_top < 0.0 {
        new_top = 0.0;
    }
    if new_left + width > container_w {
        new_left = container_w - width;
    }
    if new_top + height > container_h {
        new_top = container_h - height;
    }

    SelectionRect {
        left: new_left,
        top: new_top,
        right: new_left + width,
        bottom: new_top + height,
    }
}

fn is_near(x: f32, y: f32, px: f32, py: f32, radius: f32) -> bool {
    let dx = x - px;
    let dy = y - py;
    dx * dx + dy * dy < radius * radius
}

// =============================================================================
// Tests
// =============================================================================
