use crate::constants::DEFAULT_SHEET_CAPACITY;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Print layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    /// Pages per sheet side
    pub capacity: usize,

    /// Output sheet size and orientation
    pub paper_size: PaperSize,
    pub paper_orientation: PaperOrientation,

    /// Printer-safe margins around the sheet
    pub margins: SheetMargins,

    /// Registration marks
    pub marks: SheetMarks,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_SHEET_CAPACITY,
            paper_size: PaperSize::A3,
            paper_orientation: PaperOrientation::Portrait,
            margins: SheetMargins::default(),
            marks: SheetMarks::default(),
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ImposeError::Config(
                "sheet capacity must be at least 1".to_string(),
            ));
        }

        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(ImposeError::Config(
                "paper dimensions must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
