//! Gallery source: enumerate available raster images in a photos directory.

use std::path::Path;

use crate::types::Result;

/// Supported raster extensions (lowercase).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// List the raster images in `dir`, name-sorted.
///
/// Directory enumeration order is platform-dependent, so the listing is
/// sorted to keep the gallery sequence deterministic.
pub async fn list_images(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir.as_ref()).await?;
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_supported(name) {
            images.push(name.to_owned());
        }
    }

    images.sort();
    Ok(images)
}

fn is_supported(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported("photo.jpg"));
        assert!(is_supported("photo.JPEG"));
        assert!(is_supported("photo.Png"));
        assert!(is_supported("photo.webp"));
        assert!(!is_supported("notes.txt"));
        assert!(!is_supported("archive.tar.gz"));
        assert!(!is_supported("noextension"));
    }
}
