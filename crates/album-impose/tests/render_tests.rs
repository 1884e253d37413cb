use std::collections::HashMap;

use album_image::{Orientation, ProcessedImage};
use album_impose::*;
use lopdf::Document;

fn jpeg_image(width: u32, height: u32) -> ProcessedImage {
    use image::ImageEncoder;

    let img = image::RgbImage::from_pixel(width, height, image::Rgb([180, 90, 45]));
    let mut data = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut data, 80);
    encoder
        .write_image(
            img.as_raw(),
            width,
            height,
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();

    ProcessedImage {
        data,
        width,
        height,
        orientation: Orientation::Horizontal,
        auto_rotated: false,
    }
}

fn pages_with_images(n: usize) -> (Vec<Page>, HashMap<String, ProcessedImage>) {
    let mut pages = Vec::new();
    let mut images = HashMap::new();
    for order in 1..=n {
        let mut page = Page::new(format!("img{:02}.jpg", order), order);
        page.record_orientation(Orientation::Horizontal);
        page.caption = format!("<p>Caption {}</p>", order);
        images.insert(page.id.to_string(), jpeg_image(80, 60));
        pages.push(page);
    }
    (pages, images)
}

#[tokio::test]
async fn test_render_emits_one_pdf_page_per_sheet() {
    let (pages, images) = pages_with_images(10);
    let layout = impose(&pages, 9).unwrap();
    let options = LayoutOptions::default();

    let doc = render_layout(&layout, &images, &options).await.unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_render_empty_layout() {
    let layout = impose(&[], 9).unwrap();
    let options = LayoutOptions::default();

    let doc = render_layout(&layout, &HashMap::new(), &options)
        .await
        .unwrap();
    assert_eq!(doc.get_pages().len(), 0);
}

#[tokio::test]
async fn test_render_with_missing_bitmap_still_emits_sheet() {
    let (pages, mut images) = pages_with_images(2);
    // Simulate an image that failed to decode at hydration time
    images.remove(pages[0].id.as_str());

    let layout = impose(&pages, 9).unwrap();
    let doc = render_layout(&layout, &images, &LayoutOptions::default())
        .await
        .unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_render_rejects_invalid_options() {
    let (pages, images) = pages_with_images(2);
    let layout = impose(&pages, 9).unwrap();
    let options = LayoutOptions {
        capacity: 0,
        ..Default::default()
    };

    assert!(matches!(
        render_layout(&layout, &images, &options).await,
        Err(ImposeError::Config(_))
    ));
}

#[tokio::test]
async fn test_save_pdf_round_trip() {
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("album.pdf");

    let (pages, images) = pages_with_images(12);
    let layout = impose(&pages, 6).unwrap();
    // 12 pages, C=6: one front chunk and one back chunk
    assert_eq!(layout.total_sheets(), 2);

    let doc = render_layout(&layout, &images, &LayoutOptions::default())
        .await
        .unwrap();
    save_pdf(doc, &path).await.unwrap();

    let loaded = Document::load(&path).unwrap();
    assert_eq!(loaded.get_pages().len(), 2);
}
