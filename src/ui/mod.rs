// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: theming and the interactive crop overlay surface.

pub mod overlay;
pub mod theme;
