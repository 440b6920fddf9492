// SPDX-License-Identifier: MPL-2.0
//! The photo library store: photo and album records plus CBOR persistence.
//!
//! State is stored in CBOR (Concise Binary Object Representation) format for
//! compact binary storage and fast (de)serialization, kept separate from the
//! user-editable TOML preferences.
//!
//! # Path Resolution
//!
//! The library file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with an explicit directory override
//! 2. Set the `PHOTO_LENS_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory

use crate::domain::library::{Album, AlbumId, Photo, PhotoId};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Library file name within the app data directory.
const LIBRARY_FILE: &str = "library.cbor";
const APP_NAME: &str = "PhotoLens";
const DATA_DIR_ENV: &str = "PHOTO_LENS_DATA_DIR";

/// All photo and album records, with the membership rules between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    photos: Vec<Photo>,
    albums: Vec<Album>,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Photos
    // =========================================================================

    /// Adds a photo record stamped with `added_at` and returns its id.
    pub fn add_photo(
        &mut self,
        path: PathBuf,
        title: impl Into<String>,
        description: Option<String>,
        added_at: DateTime<Utc>,
    ) -> PhotoId {
        let photo = Photo::new(path, title, description, added_at);
        let id = photo.id.clone();
        self.photos.push(photo);
        id
    }

    /// Removes a photo and scrubs it from every album, reassigning covers.
    /// Returns `false` when the id is unknown.
    pub fn remove_photo(&mut self, id: &PhotoId) -> bool {
        let before = self.photos.len();
        self.photos.retain(|photo| &photo.id != id);
        if self.photos.len() == before {
            return false;
        }

        for album in &mut self.albums {
            album.photo_ids.retain(|member| member != id);
            if album.cover_photo_id.as_ref() == Some(id) {
                album.cover_photo_id = album.photo_ids.first().cloned();
            }
        }
        true
    }

    #[must_use]
    pub fn photo(&self, id: &PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|photo| &photo.id == id)
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Resolves ids to records, skipping ids that no longer exist.
    #[must_use]
    pub fn photos_by_ids(&self, ids: &[PhotoId]) -> Vec<&Photo> {
        ids.iter().filter_map(|id| self.photo(id)).collect()
    }

    /// Flips the favorite flag. Returns the new value, or `None` for an
    /// unknown id.
    pub fn toggle_favorite(&mut self, id: &PhotoId) -> Option<bool> {
        let photo = self.photos.iter_mut().find(|photo| &photo.id == id)?;
        photo.favorite = !photo.favorite;
        Some(photo.favorite)
    }

    #[must_use]
    pub fn favorites(&self) -> Vec<&Photo> {
        self.photos.iter().filter(|photo| photo.favorite).collect()
    }

    /// Case-insensitive title search. An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Photo> {
        let needle = query.trim().to_lowercase();
        self.photos
            .iter()
            .filter(|photo| needle.is_empty() || photo.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Points a record at a new file, used after an edit writes a new image.
    pub fn update_photo_path(&mut self, id: &PhotoId, new_path: PathBuf) -> bool {
        match self.photos.iter_mut().find(|photo| &photo.id == id) {
            Some(photo) => {
                photo.path = new_path;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Albums
    // =========================================================================

    /// Creates an empty album and returns its id.
    pub fn create_album(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> AlbumId {
        let album = Album::new(name, description, created_at);
        let id = album.id.clone();
        self.albums.push(album);
        id
    }

    /// Deletes an album. Its photos stay in the library.
    pub fn delete_album(&mut self, id: &AlbumId) -> bool {
        let before = self.albums.len();
        self.albums.retain(|album| &album.id != id);
        self.albums.len() != before
    }

    pub fn rename_album(&mut self, id: &AlbumId, name: impl Into<String>) -> bool {
        match self.albums.iter_mut().find(|album| &album.id == id) {
            Some(album) => {
                album.name = name.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|album| &album.id == id)
    }

    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Adds a photo to an album, ignoring duplicates. The first photo added
    /// to a coverless album becomes its cover.
    pub fn add_to_album(&mut self, album_id: &AlbumId, photo_id: &PhotoId) -> bool {
        if self.photo(photo_id).is_none() {
            return false;
        }
        let Some(album) = self.albums.iter_mut().find(|album| &album.id == album_id) else {
            return false;
        };
        if album.photo_ids.contains(photo_id) {
            return false;
        }

        album.photo_ids.push(photo_id.clone());
        if album.cover_photo_id.is_none() {
            album.cover_photo_id = Some(photo_id.clone());
        }
        true
    }

    /// Removes a photo from an album; a removed cover falls back to the first
    /// remaining member.
    pub fn remove_from_album(&mut self, album_id: &AlbumId, photo_id: &PhotoId) -> bool {
        let Some(album) = self.albums.iter_mut().find(|album| &album.id == album_id) else {
            return false;
        };
        let before = album.photo_ids.len();
        album.photo_ids.retain(|member| member != photo_id);
        if album.photo_ids.len() == before {
            return false;
        }

        if album.cover_photo_id.as_ref() == Some(photo_id) {
            album.cover_photo_id = album.photo_ids.first().cloned();
        }
        true
    }

    /// Sets the album cover; the photo must already be a member.
    pub fn set_cover_photo(&mut self, album_id: &AlbumId, photo_id: &PhotoId) -> bool {
        let Some(album) = self.albums.iter_mut().find(|album| &album.id == album_id) else {
            return false;
        };
        if !album.contains(photo_id) {
            return false;
        }
        album.cover_photo_id = Some(photo_id.clone());
        true
    }

    /// The album's photos in membership order.
    #[must_use]
    pub fn photos_in_album(&self, album_id: &AlbumId) -> Vec<&Photo> {
        match self.album(album_id) {
            Some(album) => self.photos_by_ids(&album.photo_ids),
            None => Vec::new(),
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Loads the library from the default location.
    ///
    /// Returns a tuple of (library, optional warning). A missing file yields
    /// an empty library; a corrupt file yields an empty library plus a
    /// warning message the caller can surface.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the library from a custom base directory (see module docs for
    /// path resolution).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = library_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(library) => (library, None),
                    Err(err) => (
                        Self::default(),
                        Some(format!("Library file is corrupt, starting empty: {err}")),
                    ),
                }
            }
            Err(err) => (
                Self::default(),
                Some(format!("Could not read library file: {err}")),
            ),
        }
    }

    /// Saves the library to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Saves the library to a custom base directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let Some(path) = library_file_path(base_dir) else {
            return Err(Error::Library(
                "no data directory available for the library file".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(&path)?;
        let writer = BufWriter::new(file);
        ciborium::into_writer(self, writer)
            .map_err(|err| Error::Library(format!("failed to write library file: {err}")))?;
        Ok(())
    }
}

/// Resolves the library file path: explicit override, then environment
/// variable, then the platform data directory.
fn library_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_NAME)))?;
    Some(dir.join(LIBRARY_FILE))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn moment(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn library_with_photos(count: i64) -> (Library, Vec<PhotoId>) {
        let mut library = Library::new();
        let ids = (0..count)
            .map(|i| {
                library.add_photo(
                    PathBuf::from(format!("/photos/img_{i}.jpg")),
                    format!("Photo {i}"),
                    None,
                    moment(i),
                )
            })
            .collect();
        (library, ids)
    }

    // -------------------------------------------------------------------------
    // Photo operations
    // -------------------------------------------------------------------------

    #[test]
    fn add_and_lookup_photo() {
        let (library, ids) = library_with_photos(2);
        let photo = library.photo(&ids[0]).expect("photo");
        assert_eq!(photo.title, "Photo 0");
        assert_eq!(library.photos().len(), 2);
    }

    #[test]
    fn remove_photo_scrubs_album_membership_and_cover() {
        let (mut library, ids) = library_with_photos(2);
        let album_id = library.create_album("Trip", None, moment(10));
        library.add_to_album(&album_id, &ids[0]);
        library.add_to_album(&album_id, &ids[1]);

        assert!(library.remove_photo(&ids[0]));

        let album = library.album(&album_id).expect("album");
        assert_eq!(album.photo_ids, vec![ids[1].clone()]);
        // cover was the removed photo; falls back to the remaining member
        assert_eq!(album.cover_photo_id, Some(ids[1].clone()));
    }

    #[test]
    fn remove_unknown_photo_returns_false() {
        let (mut library, _) = library_with_photos(1);
        let ghost = PhotoId::derive(std::path::Path::new("/nope"), moment(99));
        assert!(!library.remove_photo(&ghost));
    }

    #[test]
    fn toggle_favorite_flips_and_reports() {
        let (mut library, ids) = library_with_photos(1);
        assert_eq!(library.toggle_favorite(&ids[0]), Some(true));
        assert_eq!(library.favorites().len(), 1);
        assert_eq!(library.toggle_favorite(&ids[0]), Some(false));
        assert!(library.favorites().is_empty());
    }

    #[test]
    fn search_is_case_insensitive_on_titles() {
        let mut library = Library::new();
        library.add_photo(PathBuf::from("/a.jpg"), "Beach Sunset", None, moment(1));
        library.add_photo(PathBuf::from("/b.jpg"), "Mountain", None, moment(2));

        let hits = library.search("sunset");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Beach Sunset");

        assert_eq!(library.search("").len(), 2);
        assert!(library.search("river").is_empty());
    }

    #[test]
    fn update_photo_path_repoints_record() {
        let (mut library, ids) = library_with_photos(1);
        assert!(library.update_photo_path(&ids[0], PathBuf::from("/edited/img.jpg")));
        assert_eq!(
            library.photo(&ids[0]).expect("photo").path,
            PathBuf::from("/edited/img.jpg")
        );
    }

    // -------------------------------------------------------------------------
    // Album operations
    // -------------------------------------------------------------------------

    #[test]
    fn first_photo_added_becomes_cover() {
        let (mut library, ids) = library_with_photos(2);
        let album_id = library.create_album("Trip", None, moment(10));

        assert!(library.add_to_album(&album_id, &ids[0]));
        assert!(library.add_to_album(&album_id, &ids[1]));

        let album = library.album(&album_id).expect("album");
        assert_eq!(album.cover_photo_id, Some(ids[0].clone()));
    }

    #[test]
    fn duplicate_album_membership_is_rejected() {
        let (mut library, ids) = library_with_photos(1);
        let album_id = library.create_album("Trip", None, moment(10));

        assert!(library.add_to_album(&album_id, &ids[0]));
        assert!(!library.add_to_album(&album_id, &ids[0]));
        assert_eq!(library.album(&album_id).expect("album").photo_ids.len(), 1);
    }

    #[test]
    fn unknown_photo_cannot_join_album() {
        let (mut library, _) = library_with_photos(1);
        let album_id = library.create_album("Trip", None, moment(10));
        let ghost = PhotoId::derive(std::path::Path::new("/nope"), moment(99));
        assert!(!library.add_to_album(&album_id, &ghost));
    }

    #[test]
    fn set_cover_requires_membership() {
        let (mut library, ids) = library_with_photos(2);
        let album_id = library.create_album("Trip", None, moment(10));
        library.add_to_album(&album_id, &ids[0]);

        assert!(!library.set_cover_photo(&album_id, &ids[1]));
        assert!(library.set_cover_photo(&album_id, &ids[0]));
    }

    #[test]
    fn removing_cover_member_reassigns_cover() {
        let (mut library, ids) = library_with_photos(2);
        let album_id = library.create_album("Trip", None, moment(10));
        library.add_to_album(&album_id, &ids[0]);
        library.add_to_album(&album_id, &ids[1]);

        assert!(library.remove_from_album(&album_id, &ids[0]));

        let album = library.album(&album_id).expect("album");
        assert_eq!(album.cover_photo_id, Some(ids[1].clone()));

        assert!(library.remove_from_album(&album_id, &ids[1]));
        assert!(library.album(&album_id).expect("album").cover_photo_id.is_none());
    }

    #[test]
    fn deleting_album_keeps_photos() {
        let (mut library, ids) = library_with_photos(1);
        let album_id = library.create_album("Trip", None, moment(10));
        library.add_to_album(&album_id, &ids[0]);

        assert!(library.delete_album(&album_id));
        assert!(library.album(&album_id).is_none());
        assert!(library.photo(&ids[0]).is_some());
    }

    #[test]
    fn photos_in_album_resolve_in_membership_order() {
        let (mut library, ids) = library_with_photos(3);
        let album_id = library.create_album("Trip", None, moment(10));
        library.add_to_album(&album_id, &ids[2]);
        library.add_to_album(&album_id, &ids[0]);

        let members = library.photos_in_album(&album_id);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, ids[2]);
        assert_eq!(members[1].id, ids[0]);
    }

    #[test]
    fn rename_album_updates_name() {
        let (mut library, _) = library_with_photos(0);
        let album_id = library.create_album("Trip", None, moment(10));
        assert!(library.rename_album(&album_id, "Summer Trip"));
        assert_eq!(library.album(&album_id).expect("album").name, "Summer Trip");
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    #[test]
    fn save_and_load_round_trip() {
        let (mut library, ids) = library_with_photos(2);
        let album_id = library.create_album("Trip", Some("two days".into()), moment(10));
        library.add_to_album(&album_id, &ids[1]);
        library.toggle_favorite(&ids[0]);

        let dir = tempdir().expect("temp dir");
        library
            .save_to(Some(dir.path().to_path_buf()))
            .expect("save library");

        let (loaded, warning) = Library::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, library);
    }

    #[test]
    fn load_missing_file_yields_empty_library() {
        let dir = tempdir().expect("temp dir");
        let (loaded, warning) = Library::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(loaded.photos().is_empty());
        assert!(loaded.albums().is_empty());
    }

    #[test]
    fn load_corrupt_file_yields_empty_library_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(LIBRARY_FILE), b"definitely not cbor").expect("write");

        let (loaded, warning) = Library::load_from(Some(dir.path().to_path_buf()));
        assert!(loaded.photos().is_empty());
        assert!(warning.expect("warning").contains("corrupt"));
    }
}
