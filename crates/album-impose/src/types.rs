use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (odd album positions)
    Front,
    /// Back of the sheet (even album positions)
    Back,
}

/// Output paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperOrientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    Letter,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: PaperOrientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            PaperOrientation::Portrait => (w, h),
            PaperOrientation::Landscape => (h, w),
        }
    }
}

/// Sheet margins - printer-safe area around the entire output sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMargins {
    /// Top margin of the sheet
    pub top_mm: f32,
    /// Bottom margin of the sheet
    pub bottom_mm: f32,
    /// Left margin of the sheet
    pub left_mm: f32,
    /// Right margin of the sheet
    pub right_mm: f32,
}

impl Default for SheetMargins {
    fn default() -> Self {
        Self {
            top_mm: 5.0,
            bottom_mm: 5.0,
            left_mm: 5.0,
            right_mm: 5.0,
        }
    }
}

impl SheetMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }
}

/// Registration marks drawn on each rendered sheet
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMarks {
    /// Corner cut marks around each page cell
    pub cut_marks: bool,
    /// Punch-hole guides along the binding edge
    pub punch_marks: bool,
    /// "Sheet X of TOTAL" label
    pub sheet_labels: bool,
}

impl Default for SheetMarks {
    fn default() -> Self {
        Self {
            cut_marks: true,
            punch_marks: true,
            sheet_labels: true,
        }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Statistics about a print layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Total number of album pages
    pub source_pages: usize,
    /// Number of front (odd-stream) sheets
    pub front_sheets: usize,
    /// Number of back (even-stream) sheets
    pub back_sheets: usize,
    /// Total physical sheet sides emitted
    pub total_sheets: usize,
}
