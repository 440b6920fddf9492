// SPDX-License-Identifier: MPL-2.0
//! Core record types for the photo library.
//!
//! These are pure data with no I/O or presentation dependencies. The store in
//! `crate::library` owns collections of them and enforces the cross-record
//! rules (album membership, cover photos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Identifiers
// =============================================================================

/// Stable identifier for a photo record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(String);

impl PhotoId {
    /// Derives an id by hashing the photo's path together with the moment it
    /// was added, so re-adding the same file yields a distinct record.
    #[must_use]
    pub fn derive(path: &Path, added_at: DateTime<Utc>) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update(&nanos_of(added_at).to_le_bytes());
        Self(hasher.finalize().to_hex().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier for an album.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumId(String);

impl AlbumId {
    #[must_use]
    pub fn derive(name: &str, created_at: DateTime<Utc>) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(name.as_bytes());
        hasher.update(&nanos_of(created_at).to_le_bytes());
        Self(hasher.finalize().to_hex().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Nanosecond timestamp for hashing; saturates at the chrono range limit.
fn nanos_of(moment: DateTime<Utc>) -> i64 {
    moment.timestamp_nanos_opt().unwrap_or(i64::MAX)
}

// =============================================================================
// Photo
// =============================================================================

/// A photo known to the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    /// Location of the image file on disk.
    pub path: PathBuf,
    pub title: String,
    pub description: Option<String>,
    pub added_at: DateTime<Utc>,
    pub favorite: bool,
}

impl Photo {
    /// Creates a new record stamped with the given moment.
    #[must_use]
    pub fn new(
        path: PathBuf,
        title: impl Into<String>,
        description: Option<String>,
        added_at: DateTime<Utc>,
    ) -> Self {
        let id = PhotoId::derive(&path, added_at);
        Self {
            id,
            path,
            title: title.into(),
            description,
            added_at,
            favorite: false,
        }
    }
}

// =============================================================================
// Album
// =============================================================================

/// A named grouping of photos. Membership is by id; the records themselves
/// live in the library's photo list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub photo_ids: Vec<PhotoId>,
    pub cover_photo_id: Option<PhotoId>,
}

impl Album {
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        let name = name.into();
        let id = AlbumId::derive(&name, created_at);
        Self {
            id,
            name,
            description,
            created_at,
            photo_ids: Vec::new(),
            cover_photo_id: None,
        }
    }

    #[must_use]
    pub fn contains(&self, photo_id: &PhotoId) -> bool {
        self.photo_ids.contains(photo_id)
    }
}

// =============================================================================
// Tests
// =============================================================================
