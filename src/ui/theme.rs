// SPDX-License-Identifier: MPL-2.0
//! Theme mode and shared UI colors.

use iced::Color;
use serde::{Deserialize, Serialize};

/// User-selectable theme mode. `System` follows the desktop preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Cycles Light -> Dark -> System, for a single toggle button.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

/// Dimming fill drawn over the area outside the crop selection.
pub fn crop_overlay_outside_color() -> Color {
    Color {
        a: 0.5,
        ..Color::BLACK
    }
}

/// Outline color of the crop selection rectangle.
pub fn crop_overlay_outline_color() -> Color {
    Color::WHITE
}

/// Fill color of the eight crop handles.
pub fn crop_overlay_handle_color() -> Color {
    Color::WHITE
}

/// Background color used by toolbars.
pub fn toolbar_background() -> Color {
    Color::from_rgb(0.12, 0.12, 0.12)
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    Color::from_rgb(0.6, 0.6, 0.6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_system_detection() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn next_cycles_through_all_modes() {
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.next(), ThemeMode::System);
        assert_eq!(ThemeMode::System.next(), ThemeMode::Light);
    }
}
