mod cache;
mod processor;
mod rotate;
mod types;

pub use cache::{DEFAULT_CACHE_CAPACITY, RotationCache};
pub use processor::{AUTO_JPEG_QUALITY, ImageProcessor, STEP_JPEG_QUALITY};
pub use rotate::{DEFAULT_POOL_CAPACITY, SurfacePool};
pub use types::*;
