//! JSON album document store.
//!
//! The album lives in a single document shaped
//! `{ "album": { "photos": [ … ] } }`. Saves are read-modify-write so that
//! unrelated keys in the same document survive, and a corrupt existing store
//! fails the save before any bytes are written.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{PersistedPage, Result, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct AlbumDocument {
    #[serde(default)]
    album: AlbumSection,
    #[serde(flatten)]
    extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AlbumSection {
    #[serde(default)]
    photos: Vec<PersistedPage>,
    #[serde(flatten)]
    extra: serde_json::Map<String, Value>,
}

/// Gateway to the persisted album document.
pub struct AlbumStore {
    path: PathBuf,
}

impl AlbumStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted page records, sorted by stored order.
    ///
    /// A missing store is the empty album, not an error.
    pub async fn load(&self) -> Result<Vec<PersistedPage>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let document: AlbumDocument = serde_json::from_slice(&bytes)?;
        let mut photos = document.album.photos;
        photos.sort_by_key(|p| p.order);
        Ok(photos)
    }

    /// Persist the given ordered page records.
    ///
    /// The payload is validated before any write; an existing-but-corrupt
    /// store is reported as a parse failure and never overwritten.
    pub async fn save(&self, photos: &[PersistedPage]) -> Result<()> {
        validate(photos)?;

        let mut document = match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice::<AlbumDocument>(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => AlbumDocument::default(),
            Err(e) => return Err(e.into()),
        };

        document.album.photos = photos.to_vec();
        let json = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// A well-formed payload is a dense 1..N ordered sequence with resolvable
/// image references.
fn validate(photos: &[PersistedPage]) -> Result<()> {
    for (index, photo) in photos.iter().enumerate() {
        if photo.order != index + 1 {
            return Err(StoreError::Validation(format!(
                "expected order {} at position {}, found {}",
                index + 1,
                index,
                photo.order
            )));
        }
        if photo.filename.is_empty() {
            return Err(StoreError::Validation(format!(
                "page {} has an empty filename",
                photo.id
            )));
        }
    }
    Ok(())
}
