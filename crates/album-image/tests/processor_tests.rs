use album_image::{ImageError, ImageProcessor, Orientation};
use std::path::Path;
use tempfile::TempDir;

fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 251) as u8, (y % 251) as u8, 64])
    });
    img.save(dir.join(name)).unwrap();
}

#[tokio::test]
async fn test_landscape_passes_through() {
    let dir = TempDir::new().unwrap();
    write_jpeg(dir.path(), "wide.jpg", 800, 600);

    let processor = ImageProcessor::new();
    let processed = processor.process(dir.path(), "wide.jpg").await.unwrap();

    assert_eq!(processed.orientation, Orientation::Horizontal);
    assert!(!processed.auto_rotated);
    assert_eq!((processed.width, processed.height), (800, 600));
}

#[tokio::test]
async fn test_portrait_is_auto_rotated() {
    let dir = TempDir::new().unwrap();
    write_jpeg(dir.path(), "tall.jpg", 600, 800);

    let processor = ImageProcessor::new();
    let processed = processor.process(dir.path(), "tall.jpg").await.unwrap();

    assert_eq!(processed.orientation, Orientation::Vertical);
    assert!(processed.auto_rotated);
    // Auto-rotation yields a landscape bitmap sized height x width
    assert_eq!((processed.width, processed.height), (800, 600));
}

#[tokio::test]
async fn test_process_is_memoized() {
    let dir = TempDir::new().unwrap();
    write_jpeg(dir.path(), "tall.jpg", 300, 400);

    let processor = ImageProcessor::new();
    let first = processor.process(dir.path(), "tall.jpg").await.unwrap();
    assert_eq!(processor.cache_len(), 1);

    // Second call returns the cached bitmap even if the file disappears
    std::fs::remove_file(dir.path().join("tall.jpg")).unwrap();
    let second = processor.process(dir.path(), "tall.jpg").await.unwrap();

    assert_eq!(first.data, second.data);
    assert_eq!(processor.cache_len(), 1);
    assert_eq!(
        processor.cached_orientation("tall.jpg"),
        Some(Orientation::Vertical)
    );
}

#[tokio::test]
async fn test_render_with_steps_dimensions() {
    let dir = TempDir::new().unwrap();
    write_jpeg(dir.path(), "tall.jpg", 600, 800);

    let processor = ImageProcessor::new();

    // steps=0: effective total 3, swapped dimensions
    let r0 = processor
        .render_with_steps(dir.path(), "tall.jpg", 0)
        .await
        .unwrap();
    assert_eq!((r0.width, r0.height), (800, 600));

    // steps=1: effective total (1+3)%4 = 0, source dimensions
    let r1 = processor
        .render_with_steps(dir.path(), "tall.jpg", 1)
        .await
        .unwrap();
    assert_eq!((r1.width, r1.height), (600, 800));

    // steps=2: effective total 1, swapped again
    let r2 = processor
        .render_with_steps(dir.path(), "tall.jpg", 2)
        .await
        .unwrap();
    assert_eq!((r2.width, r2.height), (800, 600));

    // steps=3: effective total 2, source dimensions
    let r3 = processor
        .render_with_steps(dir.path(), "tall.jpg", 3)
        .await
        .unwrap();
    assert_eq!((r3.width, r3.height), (600, 800));
}

#[tokio::test]
async fn test_render_with_steps_landscape_identity() {
    let dir = TempDir::new().unwrap();
    write_jpeg(dir.path(), "wide.jpg", 400, 300);

    let processor = ImageProcessor::new();
    let r0 = processor
        .render_with_steps(dir.path(), "wide.jpg", 0)
        .await
        .unwrap();
    let r4 = processor
        .render_with_steps(dir.path(), "wide.jpg", 4)
        .await
        .unwrap();

    // Steps wrap mod 4: four turns are pixel-equivalent to none
    assert_eq!(r0.data, r4.data);
    assert_eq!((r0.width, r0.height), (400, 300));
}

#[tokio::test]
async fn test_missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let processor = ImageProcessor::new();

    let result = processor.process(dir.path(), "absent.jpg").await;
    match result {
        Err(ImageError::Load { filename, .. }) => assert_eq!(filename, "absent.jpg"),
        other => panic!("Expected Load error, got {:?}", other.map(|p| p.width)),
    }
}

#[tokio::test]
async fn test_undecodable_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("junk.jpg"), b"not an image").unwrap();

    let processor = ImageProcessor::new();
    let result = processor.process(dir.path(), "junk.jpg").await;
    assert!(matches!(result, Err(ImageError::Load { .. })));
}

#[tokio::test]
async fn test_clear_empties_cache() {
    let dir = TempDir::new().unwrap();
    write_jpeg(dir.path(), "wide.jpg", 64, 48);

    let processor = ImageProcessor::new();
    processor.process(dir.path(), "wide.jpg").await.unwrap();
    assert_eq!(processor.cache_len(), 1);

    processor.clear();
    assert_eq!(processor.cache_len(), 0);
}
