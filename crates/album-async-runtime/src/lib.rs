mod service;
mod worker;

use std::path::PathBuf;

// Re-export types from library crates
pub use album_image::{ImageProcessor, Orientation, ProcessedImage};
pub use album_impose::{Album, LayoutOptions, LayoutStatistics, Page, PageId, PrintLayout};
pub use album_store::{AlbumStore, PersistedPage};

pub use service::{AlbumService, HYDRATE_BATCH_SIZE, ServiceError};
pub use worker::worker_task;

/// Commands sent from the presentation layer to the worker
#[derive(Debug)]
pub enum AlbumCommand {
    /// Hydrate the album from the persisted store
    LoadAlbum,
    /// Add one gallery image at the end of the album
    AddFromGallery { filename: String },
    /// Add a batch of gallery images, preserving their order
    AddAllFromGallery { filenames: Vec<String> },
    DeletePage { id: String },
    RotatePage { id: String },
    SetCaption { id: String, caption: String },
    /// Drag-drop settle: the new id sequence
    Reorder { ids: Vec<String> },
    SaveAlbum,
    /// Pre-print lifecycle event
    BuildPrintLayout,
    /// Post-print lifecycle event
    TeardownPrintLayout,
    PrintToFile { output_path: PathBuf },
}

/// Updates sent from the worker to the presentation layer
#[derive(Debug, Clone)]
pub enum AlbumUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    AlbumLoaded {
        page_count: usize,
    },
    PageAdded {
        id: String,
        page_count: usize,
    },
    GalleryAdded {
        added: usize,
        requested: usize,
    },
    PageDeleted {
        id: String,
        page_count: usize,
    },
    PageRotated {
        id: String,
        rotation_steps: u8,
    },
    CaptionUpdated {
        id: String,
    },
    AlbumReordered {
        page_count: usize,
    },
    AlbumSaved {
        page_count: usize,
    },
    LayoutBuilt {
        total_sheets: usize,
    },
    LayoutTornDown,
    PrintComplete {
        path: PathBuf,
        total_sheets: usize,
    },
    Error {
        message: String,
    },
}
