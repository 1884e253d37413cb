//! Shared constants for album imposition and sheet rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Sheet Capacity
// =============================================================================

/// Pages per sheet side in the current layout.
pub const DEFAULT_SHEET_CAPACITY: usize = 9;

/// Capacity used by the earlier six-up layout, kept for callers that still
/// want that geometry.
pub const LEGACY_SHEET_CAPACITY: usize = 6;

// =============================================================================
// Registration Marks
// =============================================================================

/// Line width for cut marks (points)
pub const CUT_MARK_WIDTH: f32 = 0.25;

/// Length of each cut mark arm (points)
pub const CUT_MARK_LENGTH: f32 = 10.0;

/// Number of punch holes along the binding edge
pub const PUNCH_HOLE_COUNT: usize = 10;

/// Radius of a punch-hole guide (points)
pub const PUNCH_HOLE_RADIUS: f32 = 4.0;

/// Distance of punch-hole centers from the sheet's left edge (mm)
pub const PUNCH_EDGE_OFFSET_MM: f32 = 8.0;

/// Line width for punch-hole guides (points)
pub const PUNCH_MARK_WIDTH: f32 = 0.25;

// =============================================================================
// Text
// =============================================================================

/// Font size for the sheet label (points)
pub const LABEL_FONT_SIZE: f32 = 10.0;

/// Font size for page captions (points)
pub const CAPTION_FONT_SIZE: f32 = 7.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Inner padding between a cell boundary and its image (points)
pub const CELL_PADDING: f32 = 10.0;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves.
/// This magic number comes from: 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f32 = 0.552284749831;
