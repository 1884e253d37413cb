//! Filename-keyed cache of processed images.
//!
//! Re-decoding and re-rotating goes through an expensive raster pipeline and
//! pages are re-rendered many times (reorder, rotate, print preview), so the
//! auto-rotated baseline is memoized per source file. Eviction is FIFO:
//! when the size bound is exceeded the oldest-inserted key is dropped.

use std::collections::{HashMap, VecDeque};

use crate::types::ProcessedImage;

/// Default number of cached entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

pub struct RotationCache {
    entries: HashMap<String, ProcessedImage>,
    insertion_order: VecDeque<String>,
    capacity: usize,
}

impl RotationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            capacity,
        }
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    pub fn get(&self, filename: &str) -> Option<&ProcessedImage> {
        self.entries.get(filename)
    }

    /// Insert an entry, evicting the oldest-inserted key when the capacity
    /// bound is exceeded. Re-inserting an existing key replaces its value
    /// without refreshing its position.
    pub fn insert(&mut self, filename: String, image: ProcessedImage) {
        if self.entries.insert(filename.clone(), image).is_none() {
            self.insertion_order.push_back(filename);
        }

        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RotationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn entry() -> ProcessedImage {
        ProcessedImage {
            data: vec![0xff],
            width: 1,
            height: 1,
            orientation: Orientation::Horizontal,
            auto_rotated: false,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = RotationCache::new(4);
        cache.insert("a.jpg".into(), entry());
        assert!(cache.contains("a.jpg"));
        assert!(cache.get("b.jpg").is_none());
    }

    #[test]
    fn test_fifo_eviction_drops_oldest() {
        let mut cache = RotationCache::new(2);
        cache.insert("a.jpg".into(), entry());
        cache.insert("b.jpg".into(), entry());
        cache.insert("c.jpg".into(), entry());

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("a.jpg"));
        assert!(cache.contains("b.jpg"));
        assert!(cache.contains("c.jpg"));
    }

    #[test]
    fn test_reinsert_does_not_grow() {
        let mut cache = RotationCache::new(2);
        cache.insert("a.jpg".into(), entry());
        cache.insert("a.jpg".into(), entry());
        cache.insert("b.jpg".into(), entry());

        assert_eq!(cache.len(), 2);
        assert!(cache.contains("a.jpg"));
    }

    #[test]
    fn test_clear() {
        let mut cache = RotationCache::default();
        cache.insert("a.jpg".into(), entry());
        cache.clear();
        assert!(cache.is_empty());
    }
}
