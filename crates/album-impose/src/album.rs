//! The ordered collection of pages backing one album.

use album_image::Orientation;

use crate::page::{Page, PageId};
use crate::types::{ImposeError, Result};

/// Ordered album contents.
///
/// Invariant: after every mutation settles, `order` values are exactly
/// `1..=len` with no gaps or duplicates.
#[derive(Debug, Clone, Default)]
pub struct Album {
    pages: Vec<Page>,
}

impl Album {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an album from rehydrated pages: sorts by the stored order, then
    /// renumbers to restore density.
    pub fn from_records(records: impl IntoIterator<Item = Page>) -> Self {
        let mut pages: Vec<Page> = records.into_iter().collect();
        pages.sort_by_key(|p| p.order);
        let mut album = Self { pages };
        album.renumber();
        album
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    fn index_of(&self, id: &PageId) -> Result<usize> {
        self.pages
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ImposeError::UnknownPage(id.to_string()))
    }

    /// Reassign `order` = 1..=len by current list position.
    pub fn renumber(&mut self) {
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.order = index + 1;
        }
    }

    /// Create a page for a gallery image at the end of the album.
    pub fn add_from_gallery(&mut self, filename: impl Into<String>) -> &Page {
        let page = Page::new(filename, self.pages.len() + 1);
        self.pages.push(page);
        self.pages.last().expect("page just pushed")
    }

    /// Append an already-constructed page, assigning it the next order.
    pub fn append(&mut self, mut page: Page) -> &Page {
        page.order = self.pages.len() + 1;
        self.pages.push(page);
        self.pages.last().expect("page just pushed")
    }

    /// Remove a page and renumber the survivors.
    pub fn delete(&mut self, id: &PageId) -> Result<Page> {
        let index = self.index_of(id)?;
        let removed = self.pages.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Apply one manual rotation step; returns the new step count.
    ///
    /// Regenerating the display bitmap for the new step count is the
    /// caller's job (see `ImageProcessor::render_with_steps`).
    pub fn rotate(&mut self, id: &PageId) -> Result<u8> {
        let index = self.index_of(id)?;
        Ok(self.pages[index].rotate())
    }

    pub fn set_caption(&mut self, id: &PageId, caption: impl Into<String>) -> Result<()> {
        let index = self.index_of(id)?;
        self.pages[index].caption = caption.into();
        Ok(())
    }

    /// Record the derived source orientation for a page (first write wins).
    pub fn record_orientation(&mut self, id: &PageId, orientation: Orientation) -> Result<()> {
        let index = self.index_of(id)?;
        self.pages[index].record_orientation(orientation);
        Ok(())
    }

    /// Rearrange the album to the given id sequence (drag-drop settle), then
    /// renumber. The sequence must contain every current page exactly once.
    pub fn reorder(&mut self, ids: &[PageId]) -> Result<()> {
        if ids.len() != self.pages.len() {
            return Err(ImposeError::Config(format!(
                "reorder list has {} entries for {} pages",
                ids.len(),
                self.pages.len()
            )));
        }

        let mut reordered = Vec::with_capacity(self.pages.len());
        for id in ids {
            let index = self
                .pages
                .iter()
                .position(|p| &p.id == id)
                .ok_or_else(|| ImposeError::UnknownPage(id.to_string()))?;
            reordered.push(self.pages.remove(index));
        }

        self.pages = reordered;
        self.renumber();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album_of(n: usize) -> Album {
        let mut album = Album::new();
        for i in 0..n {
            album.add_from_gallery(format!("img{}.jpg", i));
        }
        album
    }

    #[test]
    fn test_add_assigns_dense_orders() {
        let album = album_of(3);
        let orders: Vec<usize> = album.pages().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_renumbers_survivors() {
        let mut album = album_of(5);
        let id = album.pages()[2].id.clone();
        let survivors: Vec<String> = album
            .pages()
            .iter()
            .filter(|p| p.id != id)
            .map(|p| p.filename.clone())
            .collect();

        album.delete(&id).unwrap();

        let orders: Vec<usize> = album.pages().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
        let files: Vec<String> = album.pages().iter().map(|p| p.filename.clone()).collect();
        assert_eq!(files, survivors);
    }

    #[test]
    fn test_delete_unknown_page() {
        let mut album = album_of(1);
        let missing = PageId::from("missing0");
        assert!(matches!(
            album.delete(&missing),
            Err(ImposeError::UnknownPage(_))
        ));
    }

    #[test]
    fn test_from_records_sorts_and_renumbers() {
        let records = vec![
            Page::from_record(PageId::from("cccccccc"), 7, "c.jpg", "", 0),
            Page::from_record(PageId::from("aaaaaaaa"), 2, "a.jpg", "", 0),
            Page::from_record(PageId::from("bbbbbbbb"), 5, "b.jpg", "", 0),
        ];
        let album = Album::from_records(records);

        let files: Vec<&str> = album.pages().iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(files, vec!["a.jpg", "b.jpg", "c.jpg"]);
        let orders: Vec<usize> = album.pages().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_applies_sequence() {
        let mut album = album_of(3);
        let mut ids: Vec<PageId> = album.pages().iter().map(|p| p.id.clone()).collect();
        ids.reverse();

        album.reorder(&ids).unwrap();

        let files: Vec<&str> = album.pages().iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(files, vec!["img2.jpg", "img1.jpg", "img0.jpg"]);
        let orders: Vec<usize> = album.pages().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_rejects_incomplete_list() {
        let mut album = album_of(3);
        let ids = vec![album.pages()[0].id.clone()];
        assert!(matches!(
            album.reorder(&ids),
            Err(ImposeError::Config(_))
        ));
    }

    #[test]
    fn test_rotate_via_album() {
        let mut album = album_of(1);
        let id = album.pages()[0].id.clone();

        assert_eq!(album.rotate(&id).unwrap(), 1);
        assert_eq!(album.rotate(&id).unwrap(), 2);
        assert_eq!(album.rotate(&id).unwrap(), 3);
        assert_eq!(album.rotate(&id).unwrap(), 0);
    }

    #[test]
    fn test_set_caption() {
        let mut album = album_of(1);
        let id = album.pages()[0].id.clone();
        album.set_caption(&id, "<p>Holiday</p>").unwrap();
        assert_eq!(album.pages()[0].caption, "<p>Holiday</p>");
    }
}
