mod gallery;
mod store;
mod types;

pub use gallery::{SUPPORTED_EXTENSIONS, list_images};
pub use store::AlbumStore;
pub use types::*;
