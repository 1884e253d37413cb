//! The logical album page: one image with a caption and a position.

use std::fmt;

use album_image::Orientation;
use rand::Rng;

/// Alphabet for generated page ids (26 + 26 + 10 symbols).
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated page id.
pub const ID_LENGTH: usize = 8;

/// Opaque page identifier, stable across reorders and save/load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    /// Generate a fresh 8-character alphanumeric id.
    ///
    /// Collisions are statistically negligible and not checked.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// One album page.
///
/// `order` is 1-based and kept dense across the whole album by
/// [`Album::renumber`](crate::Album::renumber); `rotation_steps` counts
/// manual 90°-clockwise turns and is always normalized mod 4.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: PageId,
    pub order: usize,
    pub filename: String,
    /// Rich-text caption (HTML), edited externally.
    pub caption: String,
    rotation_steps: u8,
    orientation: Option<Orientation>,
}

impl Page {
    /// A fresh page added from the gallery.
    pub fn new(filename: impl Into<String>, order: usize) -> Self {
        Self {
            id: PageId::generate(),
            order,
            filename: filename.into(),
            caption: String::new(),
            rotation_steps: 0,
            orientation: None,
        }
    }

    /// A page rehydrated from a persisted record.
    pub fn from_record(
        id: PageId,
        order: usize,
        filename: impl Into<String>,
        caption: impl Into<String>,
        rotation_steps: u8,
    ) -> Self {
        Self {
            id,
            order,
            filename: filename.into(),
            caption: caption.into(),
            rotation_steps: rotation_steps % 4,
            orientation: None,
        }
    }

    pub fn rotation_steps(&self) -> u8 {
        self.rotation_steps
    }

    /// Apply one manual 90°-clockwise step; returns the new step count.
    pub fn rotate(&mut self) -> u8 {
        self.rotation_steps = (self.rotation_steps + 1) % 4;
        self.rotation_steps
    }

    /// Natural orientation of the source image, once derived.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Record the orientation derived from the undistorted source pixels.
    ///
    /// First write wins: the value never changes afterwards, regardless of
    /// manual rotation.
    pub fn record_orientation(&mut self, orientation: Orientation) {
        if self.orientation.is_none() {
            self.orientation = Some(orientation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = PageId::generate();
        assert_eq!(id.as_str().len(), ID_LENGTH);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_rotate_wraps_mod_4() {
        let mut page = Page::new("a.jpg", 1);
        assert_eq!(page.rotate(), 1);
        assert_eq!(page.rotate(), 2);
        assert_eq!(page.rotate(), 3);
        assert_eq!(page.rotate(), 0);
    }

    #[test]
    fn test_from_record_normalizes_steps() {
        let page = Page::from_record(PageId::from("AbCd1234"), 1, "a.jpg", "", 6);
        assert_eq!(page.rotation_steps(), 2);
    }

    #[test]
    fn test_orientation_is_first_write_wins() {
        let mut page = Page::new("a.jpg", 1);
        assert_eq!(page.orientation(), None);

        page.record_orientation(Orientation::Vertical);
        page.record_orientation(Orientation::Horizontal);
        assert_eq!(page.orientation(), Some(Orientation::Vertical));

        // Manual rotation never touches the derived orientation
        page.rotate();
        assert_eq!(page.orientation(), Some(Orientation::Vertical));
    }
}
