// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen from application state. The screens stay thin:
//! the gallery is a searchable list with per-photo actions, the editor is the
//! image surface with the crop overlay stacked on top of it.

use super::{App, EditorMessage, Message, Screen};
use crate::ui::overlay::CropOverlayRenderer;
use crate::ui::theme;
use iced::widget::{
    button, container, image, scrollable, text, text_input, Canvas, Column, Row, Stack,
};
use iced::{Alignment, Background, Border, Element, Length};

/// Renders the current application view based on the active screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match app.screen {
        Screen::Gallery => view_gallery(app),
        Screen::Editor => view_editor(app),
    };

    let mut column = Column::new().push(
        container(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(status) = &app.status {
        column = column.push(
            container(
                text(status.as_str())
                    .size(13)
                    .color(theme::muted_text_color()),
            )
            .padding([4, 8])
            .width(Length::Fill),
        );
    }

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar<'a>(content: Row<'a, Message>) -> Element<'a, Message> {
    container(content.align_y(Alignment::Center).spacing(8).padding(8))
        .width(Length::Fill)
        .style(|_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(theme::toolbar_background())),
            border: Border {
                width: 0.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn view_gallery(app: &App) -> Element<'_, Message> {
    let header = toolbar(
        Row::new()
            .push(text("Photo Lens").size(20))
            .push(
                text_input("Search by title", &app.search_query)
                    .on_input(Message::SearchChanged)
                    .width(Length::Fixed(240.0)),
            )
            .push(
                button(text("Add photos").size(14))
                    .padding([8, 12])
                    .on_press(Message::AddPhotosPressed),
            )
            .push(
                button(text("Theme").size(14))
                    .padding([8, 12])
                    .on_press(Message::ToggleThemeMode),
            ),
    );

    let photos = app.library.search(&app.search_query);
    let mut list = Column::new().spacing(4).padding(8);
    if photos.is_empty() {
        list = list.push(
            text("No photos yet. Add some to get started.").color(theme::muted_text_color()),
        );
    }
    for photo in photos {
        let favorite_label = if photo.favorite { "★" } else { "☆" };
        list = list.push(
            Row::new()
                .push(text(photo.title.as_str()).width(Length::Fill))
                .push(
                    button(text(favorite_label).size(14))
                        .on_press(Message::ToggleFavorite(photo.id.clone())),
                )
                .push(
                    button(text("Edit").size(14)).on_press(Message::OpenEditor(photo.id.clone())),
                )
                .push(
                    button(text("Remove").size(14))
                        .on_press(Message::RemovePhoto(photo.id.clone())),
                )
                .spacing(8)
                .align_y(Alignment::Center),
        );
    }

    Column::new()
        .push(header)
        .push(
            scrollable(list)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_editor(app: &App) -> Element<'_, Message> {
    let Some(session) = app.editor.as_ref() else {
        // Fallback if editor state is missing
        return container(text("Editor error"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let save_button = {
        let base = button(text("Save").size(14)).padding([8, 12]);
        if session.is_saving() || !session.is_dirty() {
            base
        } else {
            base.on_press(Message::Editor(EditorMessage::Save))
        }
    };

    let header = toolbar(
        Row::new()
            .push(
                button(text("← Back").size(14))
                    .padding([8, 12])
                    .on_press(Message::Editor(EditorMessage::Close)),
            )
            .push(
                button(text("⟲ Rotate").size(14))
                    .padding([8, 12])
                    .on_press(Message::Editor(EditorMessage::RotateLeft)),
            )
            .push(
                button(text("⟳ Rotate").size(14))
                    .padding([8, 12])
                    .on_press(Message::Editor(EditorMessage::RotateRight)),
            )
            .push(
                button(text("Flip H").size(14))
                    .padding([8, 12])
                    .on_press(Message::Editor(EditorMessage::FlipHorizontal)),
            )
            .push(
                button(text("Flip V").size(14))
                    .padding([8, 12])
                    .on_press(Message::Editor(EditorMessage::FlipVertical)),
            )
            .push(
                button(text("Apply crop").size(14))
                    .padding([8, 12])
                    .on_press(Message::Editor(EditorMessage::ApplyCrop)),
            )
            .push(save_button),
    );

    // The image is displayed with "contain" fit, so the overlay's container
    // coordinates line up with the letterbox math in the crop mapper.
    let display = session.display();
    let image_widget = image(display.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(iced::ContentFit::Contain);

    let overlay: Element<'_, Message> = Element::from(
        Canvas::new(CropOverlayRenderer {
            rect: session.selection_rect(),
        })
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .map(|event| Message::Editor(EditorMessage::Overlay(event)));

    let surface: Element<'_, Message> = Stack::new().push(image_widget).push(overlay).into();

    Column::new()
        .push(header)
        .push(
            container(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(8),
        )
        .into()
}
