// SPDX-License-Identifier: MPL-2.0
//! Photo and album records for the library domain.

pub mod types;

pub use types::{Album, AlbumId, Photo, PhotoId};
