//! Image orientation processing.
//!
//! Produces display-ready bitmaps from gallery sources: portrait images are
//! auto-rotated to landscape on first load and memoized; manual quarter-turn
//! rotations are rendered in a single pass from the original source pixels so
//! repeated rotations never compound quality loss.

use std::path::Path;
use std::sync::{Arc, Mutex};

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::cache::RotationCache;
use crate::rotate::{SurfacePool, rotate_steps};
use crate::types::{ImageError, Orientation, ProcessedImage, Result, effective_steps};

/// JPEG quality for the memoized auto-rotated baseline.
pub const AUTO_JPEG_QUALITY: u8 = 80;

/// JPEG quality for manual-rotation renders.
pub const STEP_JPEG_QUALITY: u8 = 70;

/// Decodes, orientation-corrects and re-encodes source images, memoizing the
/// baseline result per filename.
///
/// Mutation is interior and lock-guarded; the intended access pattern is the
/// cooperative single-writer flow of the album runtime.
pub struct ImageProcessor {
    cache: Mutex<RotationCache>,
    pool: Arc<SurfacePool>,
}

impl ImageProcessor {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(RotationCache::default()),
            pool: Arc::new(SurfacePool::default()),
        }
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(RotationCache::new(capacity)),
            pool: Arc::new(SurfacePool::default()),
        }
    }

    /// Produce the display baseline for a source image.
    ///
    /// First encounter: reads and decodes the file, classifies orientation
    /// from the natural pixel dimensions, rotates portrait sources 90°
    /// counter-clockwise and re-encodes. Subsequent calls return the cached
    /// result without touching the raster pipeline.
    pub async fn process(
        &self,
        photos_dir: impl AsRef<Path>,
        filename: &str,
    ) -> Result<ProcessedImage> {
        if let Some(hit) = self.cache.lock().unwrap().get(filename) {
            return Ok(hit.clone());
        }

        let bytes = read_source(photos_dir.as_ref(), filename).await?;
        let name = filename.to_owned();
        let pool = Arc::clone(&self.pool);
        let processed =
            tokio::task::spawn_blocking(move || process_bytes(&bytes, &name, &pool)).await??;

        self.cache
            .lock()
            .unwrap()
            .insert(filename.to_owned(), processed.clone());
        Ok(processed)
    }

    /// Render a source image at a stored manual rotation, directly from the
    /// original pixels.
    ///
    /// The effective total folds the portrait auto-correction into the
    /// requested steps, so the result is computed in one rotation pass and
    /// never by re-rotating an already-rotated bitmap. Not memoized: every
    /// call reflects the steps it was given.
    pub async fn render_with_steps(
        &self,
        photos_dir: impl AsRef<Path>,
        filename: &str,
        rotation_steps: u8,
    ) -> Result<ProcessedImage> {
        let bytes = read_source(photos_dir.as_ref(), filename).await?;
        let name = filename.to_owned();
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || render_bytes(&bytes, &name, rotation_steps, &pool))
            .await?
    }

    /// Orientation recorded for a cached source, if it has been processed.
    pub fn cached_orientation(&self, filename: &str) -> Option<Orientation> {
        self.cache
            .lock()
            .unwrap()
            .get(filename)
            .map(|p| p.orientation)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Drop all cached bitmaps and pooled surfaces (session end).
    pub fn clear(&self) {
        self.cache.lock().unwrap().clear();
        self.pool.clear();
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_source(photos_dir: &Path, filename: &str) -> Result<Vec<u8>> {
    tokio::fs::read(photos_dir.join(filename))
        .await
        .map_err(|e| ImageError::Load {
            filename: filename.to_owned(),
            source: image::ImageError::IoError(e),
        })
}

fn decode(bytes: &[u8], filename: &str) -> Result<image::RgbImage> {
    let img = image::load_from_memory(bytes).map_err(|source| ImageError::Load {
        filename: filename.to_owned(),
        source,
    })?;
    Ok(img.to_rgb8())
}

fn encode_jpeg(
    data: &[u8],
    width: u32,
    height: u32,
    quality: u8,
    filename: &str,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .write_image(data, width, height, ExtendedColorType::Rgb8)
        .map_err(|source| ImageError::Encode {
            filename: filename.to_owned(),
            source,
        })?;
    Ok(out)
}

fn process_bytes(bytes: &[u8], filename: &str, pool: &SurfacePool) -> Result<ProcessedImage> {
    let rgb = decode(bytes, filename)?;
    let (width, height) = rgb.dimensions();
    let orientation = Orientation::of(width, height);

    if orientation.is_vertical() {
        // Canonical correction: -90°, i.e. three clockwise quarter turns
        let surface = rotate_steps(rgb.as_raw(), width, height, 3, pool);
        let data = encode_jpeg(
            &surface.data,
            surface.width,
            surface.height,
            AUTO_JPEG_QUALITY,
            filename,
        )?;
        let result = ProcessedImage {
            data,
            width: surface.width,
            height: surface.height,
            orientation,
            auto_rotated: true,
        };
        pool.release(surface.data);
        Ok(result)
    } else {
        let data = encode_jpeg(rgb.as_raw(), width, height, AUTO_JPEG_QUALITY, filename)?;
        Ok(ProcessedImage {
            data,
            width,
            height,
            orientation,
            auto_rotated: false,
        })
    }
}

fn render_bytes(
    bytes: &[u8],
    filename: &str,
    rotation_steps: u8,
    pool: &SurfacePool,
) -> Result<ProcessedImage> {
    let rgb = decode(bytes, filename)?;
    let (width, height) = rgb.dimensions();
    let orientation = Orientation::of(width, height);
    let total = effective_steps(orientation, rotation_steps);

    if total == 0 {
        let data = encode_jpeg(rgb.as_raw(), width, height, STEP_JPEG_QUALITY, filename)?;
        return Ok(ProcessedImage {
            data,
            width,
            height,
            orientation,
            auto_rotated: orientation.is_vertical(),
        });
    }

    let surface = rotate_steps(rgb.as_raw(), width, height, total, pool);
    let data = encode_jpeg(
        &surface.data,
        surface.width,
        surface.height,
        STEP_JPEG_QUALITY,
        filename,
    )?;
    let result = ProcessedImage {
        data,
        width: surface.width,
        height: surface.height,
        orientation,
        auto_rotated: orientation.is_vertical(),
    };
    pool.release(surface.data);
    Ok(result)
}
