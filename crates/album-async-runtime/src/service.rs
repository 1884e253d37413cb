//! Album orchestration.
//!
//! Composes the store, the image processor and the page model behind one
//! owner with a single logical thread of control: decode and persistence
//! calls are awaited, bulk operations run in small sequential chunks with
//! yields in between, and per-page failures are isolated so one bad image
//! never aborts a batch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use album_image::{ImageError, ImageProcessor, ProcessedImage};
use album_impose::{
    Album, ImposeError, LayoutOptions, LayoutStatistics, Page, PageId, PrintLayout, PrintSession,
    calculate_statistics, render_layout, save_pdf,
};
use album_store::{AlbumStore, PersistedPage, StoreError};
use thiserror::Error;

/// Pages hydrated or added per chunk before yielding.
pub const HYDRATE_BATCH_SIZE: usize = 3;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Impose(#[from] ImposeError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Owner of the album state and its collaborators.
pub struct AlbumService {
    album: Album,
    processor: ImageProcessor,
    store: AlbumStore,
    photos_dir: PathBuf,
    session: PrintSession,
    options: LayoutOptions,
    /// Display bitmaps keyed by page id, kept current with rotation state.
    bitmaps: HashMap<String, ProcessedImage>,
}

impl AlbumService {
    pub fn new(store: AlbumStore, photos_dir: impl Into<PathBuf>) -> Self {
        Self::with_options(store, photos_dir, LayoutOptions::default())
    }

    pub fn with_options(
        store: AlbumStore,
        photos_dir: impl Into<PathBuf>,
        options: LayoutOptions,
    ) -> Self {
        Self {
            album: Album::new(),
            processor: ImageProcessor::new(),
            store,
            photos_dir: photos_dir.into(),
            session: PrintSession::new(),
            options,
            bitmaps: HashMap::new(),
        }
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    /// Display bitmap for a page, if its image decoded.
    pub fn bitmap(&self, id: &PageId) -> Option<&ProcessedImage> {
        self.bitmaps.get(id.as_str())
    }

    /// Hydrate the album from the persisted store.
    ///
    /// Records are processed in small sequential chunks with a yield between
    /// chunks; a page whose image fails to load is skipped (with a warning)
    /// and the rest of the album still loads. Returns the hydrated count.
    pub async fn load_album(&mut self) -> Result<usize> {
        let records = self.store.load().await?;

        self.album = Album::new();
        self.bitmaps.clear();
        self.session.teardown();

        for batch in records.chunks(HYDRATE_BATCH_SIZE) {
            for record in batch {
                self.hydrate_record(record).await;
            }
            // Keep the interaction surface responsive between chunks
            tokio::task::yield_now().await;
        }

        Ok(self.album.len())
    }

    async fn hydrate_record(&mut self, record: &PersistedPage) {
        let id = if record.id.is_empty() {
            PageId::generate()
        } else {
            PageId::from(record.id.as_str())
        };
        let mut page = Page::from_record(
            id,
            record.order,
            record.filename.as_str(),
            record.caption.as_str(),
            record.rotation_steps,
        );

        // Stored rotations render directly from the source via the
        // effective-step formula; unrotated pages take the memoized baseline.
        let bitmap = if page.rotation_steps() == 0 {
            self.processor.process(&self.photos_dir, &record.filename).await
        } else {
            self.processor
                .render_with_steps(&self.photos_dir, &record.filename, page.rotation_steps())
                .await
        };

        match bitmap {
            Ok(bitmap) => {
                page.record_orientation(bitmap.orientation);
                self.bitmaps.insert(page.id.to_string(), bitmap);
                self.album.append(page);
            }
            Err(e) => log::warn!("skipping unrenderable page {}: {}", record.filename, e),
        }
    }

    /// Add one gallery image at the end of the album.
    pub async fn add_from_gallery(&mut self, filename: &str) -> Result<PageId> {
        let bitmap = self.processor.process(&self.photos_dir, filename).await?;

        let mut page = Page::new(filename, self.album.len() + 1);
        page.record_orientation(bitmap.orientation);
        self.bitmaps.insert(page.id.to_string(), bitmap);

        Ok(self.album.append(page).id.clone())
    }

    /// Add a batch of gallery images, preserving their relative order.
    ///
    /// Chunked like hydration; images that fail to decode are skipped.
    /// Returns the number of pages actually added.
    pub async fn add_all_from_gallery(&mut self, filenames: &[String]) -> Result<usize> {
        let mut added = 0;

        for batch in filenames.chunks(HYDRATE_BATCH_SIZE) {
            for filename in batch {
                match self.add_from_gallery(filename).await {
                    Ok(_) => added += 1,
                    Err(e) => log::warn!("skipping gallery image {}: {}", filename, e),
                }
            }
            tokio::task::yield_now().await;
        }

        Ok(added)
    }

    /// Remove a page; survivors are renumbered.
    pub fn delete_page(&mut self, id: &PageId) -> Result<Page> {
        let removed = self.album.delete(id)?;
        self.bitmaps.remove(id.as_str());
        Ok(removed)
    }

    /// Apply one manual rotation step and regenerate the display bitmap.
    pub async fn rotate_page(&mut self, id: &PageId) -> Result<u8> {
        let steps = self.album.rotate(id)?;
        let filename = self
            .album
            .get(id)
            .map(|p| p.filename.clone())
            .expect("page just rotated");

        match self
            .processor
            .render_with_steps(&self.photos_dir, &filename, steps)
            .await
        {
            Ok(bitmap) => {
                self.album.record_orientation(id, bitmap.orientation)?;
                self.bitmaps.insert(id.to_string(), bitmap);
            }
            Err(e) => log::warn!("bitmap regeneration failed for {}: {}", filename, e),
        }

        Ok(steps)
    }

    pub fn set_caption(&mut self, id: &PageId, caption: impl Into<String>) -> Result<()> {
        self.album.set_caption(id, caption)?;
        Ok(())
    }

    /// Drag-drop settle: apply the new id sequence.
    pub fn reorder(&mut self, ids: &[PageId]) -> Result<()> {
        self.album.reorder(ids)?;
        Ok(())
    }

    /// Persist the current album. In-memory state is untouched on failure,
    /// so the caller may retry.
    pub async fn save_album(&self) -> Result<usize> {
        let photos: Vec<PersistedPage> = self.album.pages().iter().map(to_record).collect();
        self.store.save(&photos).await?;
        Ok(photos.len())
    }

    /// Pre-print lifecycle event: build the sheet layout.
    pub fn build_print_layout(&mut self) -> Result<&PrintLayout> {
        self.session
            .build(self.album.pages(), self.options.capacity)
            .map_err(ServiceError::from)
    }

    pub fn print_layout(&self) -> Option<&PrintLayout> {
        self.session.layout()
    }

    /// Post-print lifecycle event: drop the layout. No-op when nothing was
    /// built.
    pub fn teardown_print_layout(&mut self) {
        self.session.teardown();
    }

    pub fn layout_statistics(&self) -> Result<LayoutStatistics> {
        calculate_statistics(self.album.pages(), self.options.capacity).map_err(ServiceError::from)
    }

    /// Full print pass: build the layout, render it to PDF, write the file,
    /// tear the layout down.
    pub async fn print_to_file(&mut self, output: impl AsRef<Path>) -> Result<LayoutStatistics> {
        let stats = self.layout_statistics()?;

        self.session
            .build(self.album.pages(), self.options.capacity)?;
        let layout = self.session.layout().expect("layout just built");

        let document = render_layout(layout, &self.bitmaps, &self.options).await?;
        save_pdf(document, output).await?;

        self.session.teardown();
        Ok(stats)
    }

    /// Session end: drop cached bitmaps and pooled surfaces.
    pub fn clear_caches(&mut self) {
        self.processor.clear();
        self.bitmaps.clear();
    }
}

fn to_record(page: &Page) -> PersistedPage {
    PersistedPage {
        order: page.order,
        id: page.id.to_string(),
        filename: page.filename.clone(),
        caption: page.caption.clone(),
        rotation_steps: page.rotation_steps(),
    }
}
