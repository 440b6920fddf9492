// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and editor
//! screens.
//!
//! The `App` struct wires the library store, preferences, and the editing
//! session together, and translates messages into side effects like library
//! persistence or background image saving. Policy decisions (where edited
//! files land, when the library is persisted) stay close to the update loop
//! so user-facing behavior is easy to audit.

pub mod editor;
mod message;
mod view;

pub use message::{EditorMessage, Flags, Message};

use crate::config::{self, Config};
use crate::library::Library;
use crate::media::image::{self, backup_path_for, edited_photo_path};
use chrono::Utc;
use editor::EditorSession;
use iced::{Element, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

/// Which screen is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Editor,
}

/// Root application state bridging the store, preferences, and editing.
pub struct App {
    config: Config,
    library: Library,
    library_dir: Option<PathBuf>,
    screen: Screen,
    editor: Option<EditorSession>,
    search_query: String,
    status: Option<String>,
}

/// Builds the window settings.
fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state: loads preferences and the library, and
    /// imports any photos passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let (mut library, warning) = Library::load_from(flags.library_dir.clone());
        if let Some(ref warning) = warning {
            eprintln!("{warning}");
        }

        let mut imported = false;
        for path in flags.photo_paths {
            let title = photo_title_for(&path);
            library.add_photo(path, title, None, Utc::now());
            imported = true;
        }

        let app = Self {
            config,
            library,
            library_dir: flags.library_dir,
            screen: Screen::Gallery,
            editor: None,
            search_query: String::new(),
            status: warning,
        };
        if imported {
            app.persist_library();
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Photo Lens".to_string()
    }

    fn theme(&self) -> Theme {
        self.config.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.search_query = query;
                Task::none()
            }
            Message::ToggleFavorite(id) => {
                if self.library.toggle_favorite(&id).is_some() {
                    self.persist_library();
                }
                Task::none()
            }
            Message::RemovePhoto(id) => {
                if self.library.remove_photo(&id) {
                    self.persist_library();
                }
                Task::none()
            }
            Message::AddPhotosPressed => Task::perform(pick_photo_files(), Message::PhotosPicked),
            Message::PhotosPicked(paths) => {
                if !paths.is_empty() {
                    for path in paths {
                        let title = photo_title_for(&path);
                        self.library.add_photo(path, title, None, Utc::now());
                    }
                    self.persist_library();
                }
                Task::none()
            }
            Message::OpenEditor(id) => {
                let Some(photo) = self.library.photo(&id) else {
                    return Task::none();
                };
                match EditorSession::open(photo.id.clone(), &photo.path) {
                    Ok(session) => {
                        self.editor = Some(session);
                        self.screen = Screen::Editor;
                        self.status = None;
                    }
                    Err(err) => {
                        eprintln!("Failed to open photo for editing: {:?}", err);
                        self.status = Some(format!("Could not open photo: {err}"));
                    }
                }
                Task::none()
            }
            Message::ToggleThemeMode => {
                self.config.theme_mode = self.config.theme_mode.next();
                if let Err(error) = config::save(&self.config) {
                    eprintln!("Failed to save config: {:?}", error);
                }
                Task::none()
            }
            Message::Editor(editor_message) => self.update_editor(editor_message),
        }
    }

    fn update_editor(&mut self, message: EditorMessage) -> Task<Message> {
        let Some(session) = self.editor.as_mut() else {
            return Task::none();
        };

        match message {
            EditorMessage::Overlay(event) => {
                session.handle_overlay(event);
                Task::none()
            }
            EditorMessage::RotateLeft => {
                session.rotate_left();
                Task::none()
            }
            EditorMessage::RotateRight => {
                session.rotate_right();
                Task::none()
            }
            EditorMessage::FlipHorizontal => {
                session.flip_horizontal();
                Task::none()
            }
            EditorMessage::FlipVertical => {
                session.flip_vertical();
                Task::none()
            }
            EditorMessage::ApplyCrop => {
                if let Err(err) = session.apply_crop() {
                    eprintln!("Failed to apply crop: {:?}", err);
                    self.status = Some(format!("Crop failed: {err}"));
                }
                Task::none()
            }
            EditorMessage::Save => self.start_background_save(),
            EditorMessage::Saved(Ok((photo_id, path))) => {
                if self.library.update_photo_path(&photo_id, path) {
                    self.persist_library();
                }
                if let Some(session) = self.editor.as_mut() {
                    session.mark_saved();
                }
                self.status = Some("Saved".to_string());
                Task::none()
            }
            EditorMessage::Saved(Err(reason)) => {
                eprintln!("Failed to save edited photo: {reason}");
                if let Some(session) = self.editor.as_mut() {
                    session.set_saving(false);
                }
                self.status = Some(format!("Save failed: {reason}"));
                Task::none()
            }
            EditorMessage::Close => {
                self.editor = None;
                self.screen = Screen::Gallery;
                Task::none()
            }
        }
    }

    /// Dispatches the save to a background task. The edited image is written
    /// next to the original and the library repoints the record when the
    /// completion message arrives.
    fn start_background_save(&mut self) -> Task<Message> {
        let Some(session) = self.editor.as_mut() else {
            return Task::none();
        };
        if session.is_saving() {
            return Task::none();
        }
        let Some(photo) = self.library.photo(&session.photo_id) else {
            return Task::none();
        };

        session.set_saving(true);
        let image = session.working_image();
        let photo_id = session.photo_id.clone();
        let original_path = photo.path.clone();
        let backup = self.config.auto_backup_enabled();
        let quality = self.config.jpeg_quality();

        Task::perform(
            async move {
                let target = edited_photo_path(&original_path, Utc::now());
                if backup {
                    // Snapshot the pre-edit file before the library record is
                    // repointed at the edited copy.
                    let backup_path = backup_path_for(&original_path);
                    if let Err(err) = std::fs::copy(&original_path, &backup_path) {
                        eprintln!("Failed to back up original photo: {err}");
                    }
                }
                image::save_image(&image, &target, quality)
                    .map(|()| (photo_id, target))
                    .map_err(|err| err.to_string())
            },
            |result| Message::Editor(EditorMessage::Saved(result)),
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn persist_library(&self) {
        if let Err(error) = self.library.save_to(self.library_dir.clone()) {
            eprintln!("Failed to save library: {:?}", error);
        }
    }
}

/// Opens the native file picker filtered to supported image types.
async fn pick_photo_files() -> Vec<PathBuf> {
    let picked = rfd::AsyncFileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp"])
        .pick_files()
        .await;
    picked
        .map(|handles| {
            handles
                .into_iter()
                .map(|handle| handle.path().to_path_buf())
                .collect()
        })
        .unwrap_or_default()
}

/// Derives a display title from the file name.
fn photo_title_for(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
