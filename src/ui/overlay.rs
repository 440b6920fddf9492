// SPDX-License-Identifier: MPL-2.0
//! Crop overlay renderer for interactive crop selection.
//!
//! The canvas program reports container layout and pointer gestures as
//! [`OverlayEvent`]s; the application routes them into a
//! [`crate::domain::geometry::CropSelection`] and hands the renderer the
//! current rectangle back for drawing.

use crate::domain::geometry::{Handle, SelectionRect};
use crate::ui::theme;
use iced::widget::canvas::{Frame, LineDash, Path, Stroke};

/// Radius of the drawn handle markers (the hit area is larger; see
/// [`crate::domain::geometry::selection_bounds::HANDLE_HIT_RADIUS`]).
const HANDLE_MARKER_RADIUS: f32 = 8.0;

/// Pointer and layout events published by the overlay surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    /// The drawing surface was laid out (or re-laid out) at this size.
    Resized { width: f32, height: f32 },
    /// A drag started at this point, in container coordinates.
    Pressed { x: f32, y: f32 },
    /// Incremental drag movement since the previous pointer position.
    Dragged { dx: f32, dy: f32 },
    /// The drag ended (button released or pointer left the surface).
    Released,
}

/// Transient canvas state: the pointer position while a drag is in flight,
/// and the last layout size reported to the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayState {
    drag_from: Option<iced::Point>,
    reported_size: Option<(f32, f32)>,
}

/// Canvas program used to draw and interact with the crop overlay.
pub struct CropOverlayRenderer {
    /// Current selection in container coordinates, if one exists.
    pub rect: Option<SelectionRect>,
}

impl iced::widget::canvas::Program<OverlayEvent> for CropOverlayRenderer {
    type State = OverlayState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<OverlayEvent>> {
        use iced::widget::Action;

        // A fresh layout size is reported before any interaction is handled,
        // so the selection always re-derives its default rectangle first.
        let size = (bounds.width, bounds.height);
        if state.reported_size != Some(size) {
            state.reported_size = Some(size);
            state.drag_from = None;
            return Some(
                Action::publish(OverlayEvent::Resized {
                    width: bounds.width,
                    height: bounds.height,
                })
                .and_capture(),
            );
        }

        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    state.drag_from = Some(position);
                    return Some(
                        Action::publish(OverlayEvent::Pressed {
                            x: position.x,
                            y: position.y,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                let Some(previous) = state.drag_from else {
                    return None;
                };

                // If cursor is outside bounds during move, end the drag
                let Some(position) = cursor.position_in(bounds) else {
                    state.drag_from = None;
                    return Some(Action::publish(OverlayEvent::Released).and_capture());
                };

                state.drag_from = Some(position);
                return Some(
                    Action::publish(OverlayEvent::Dragged {
                        dx: position.x - previous.x,
                        dy: position.y - previous.y,
                    })
                    .and_capture(),
                );
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left))
            | iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                if state.drag_from.take().is_some() {
                    return Some(Action::publish(OverlayEvent::Released).and_capture());
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let Some(rect) = self.rect else {
            return vec![frame.into_geometry()];
        };

        draw_dimming(&mut frame, bounds, rect);

        // Dashed selection outline
        let outline = Path::rectangle(
            iced::Point::new(rect.left, rect.top),
            iced::Size::new(rect.width(), rect.height()),
        );
        frame.stroke(
            &outline,
            Stroke {
                line_dash: LineDash {
                    segments: &[10.0, 10.0],
                    offset: 0,
                },
                ..Stroke::default()
                    .with_width(2.0)
                    .with_color(theme::crop_overlay_outline_color())
            },
        );

        // Handle markers at the four corners and four edge midpoints
        const MARKED_HANDLES: [Handle; 8] = [
            Handle::TopLeft,
            Handle::Top,
            Handle::TopRight,
            Handle::Right,
            Handle::BottomRight,
            Handle::Bottom,
            Handle::BottomLeft,
            Handle::Left,
        ];
        for handle in MARKED_HANDLES {
            if let Some((hx, hy)) = rect.handle_point(handle) {
                let marker = Path::circle(iced::Point::new(hx, hy), HANDLE_MARKER_RADIUS);
                frame.fill(&marker, theme::crop_overlay_handle_color());
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Darkens the four regions of the surface outside the selection.
fn draw_dimming(frame: &mut Frame, bounds: iced::Rectangle, rect: SelectionRect) {
    let dim = theme::crop_overlay_outside_color();
    let surface_width = bounds.width;
    let surface_height = bounds.height;

    // Top band
    if rect.top > 0.0 {
        frame.fill_rectangle(
            iced::Point::ORIGIN,
            iced::Size::new(surface_width, rect.top),
            dim,
        );
    }

    // Bottom band
    if rect.bottom < surface_height {
        frame.fill_rectangle(
            iced::Point::new(0.0, rect.bottom),
            iced::Size::new(surface_width, surface_height - rect.bottom),
            dim,
        );
    }

    // Left band
    if rect.left > 0.0 {
        frame.fill_rectangle(
            iced::Point::new(0.0, rect.top),
            iced::Size::new(rect.left, rect.height()),
            dim,
        );
    }

    // Right band
    if rect.right < surface_width {
        frame.fill_rectangle(
            iced::Point::new(rect.right, rect.top),
            iced::Size::new(surface_width - rect.right, rect.height()),
            dim,
        );
    }
}
