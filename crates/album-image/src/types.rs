use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to load image {filename}: {source}")]
    Load {
        filename: String,
        source: image::ImageError,
    },
    #[error("failed to encode image {filename}: {source}")]
    Encode {
        filename: String,
        source: image::ImageError,
    },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImageError>;

/// Natural orientation of a source image, decided by its pixel dimensions.
///
/// Derived once from the undistorted source (never from a rotated bitmap)
/// and treated as immutable for the lifetime of the page that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// width >= height
    #[default]
    Horizontal,
    /// height > width; auto-corrected to landscape on first load
    Vertical,
}

impl Orientation {
    /// Classify from natural pixel dimensions.
    pub fn of(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }

    /// Clockwise quarter turns equivalent to the canonical auto-correction.
    ///
    /// The portrait correction is -90° (counter-clockwise), which composes
    /// with manual steps as +3 clockwise quarter turns.
    pub fn auto_correction_steps(self) -> u8 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 3,
        }
    }
}

/// Total clockwise quarter turns to apply when rendering directly from the
/// original source pixels for a stored manual rotation.
pub fn effective_steps(orientation: Orientation, rotation_steps: u8) -> u8 {
    (rotation_steps % 4 + orientation.auto_correction_steps()) % 4
}

/// A display-ready bitmap plus the orientation metadata derived from its
/// source. `data` is always JPEG-encoded.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    /// Whether the canonical portrait correction was applied.
    pub auto_rotated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_of_dimensions() {
        assert_eq!(Orientation::of(800, 600), Orientation::Horizontal);
        assert_eq!(Orientation::of(600, 800), Orientation::Vertical);
        // Square counts as horizontal (no correction)
        assert_eq!(Orientation::of(500, 500), Orientation::Horizontal);
    }

    #[test]
    fn test_effective_steps_horizontal() {
        for steps in 0..4 {
            assert_eq!(effective_steps(Orientation::Horizontal, steps), steps);
        }
    }

    #[test]
    fn test_effective_steps_vertical() {
        assert_eq!(effective_steps(Orientation::Vertical, 0), 3);
        assert_eq!(effective_steps(Orientation::Vertical, 1), 0);
        assert_eq!(effective_steps(Orientation::Vertical, 2), 1);
        assert_eq!(effective_steps(Orientation::Vertical, 3), 2);
    }

    #[test]
    fn test_effective_steps_normalizes_input() {
        assert_eq!(effective_steps(Orientation::Horizontal, 5), 1);
        assert_eq!(effective_steps(Orientation::Vertical, 4), 3);
    }
}
