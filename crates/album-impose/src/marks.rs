//! Registration marks rendering for album sheets
//!
//! Generates PDF content stream operations for the marks printed on every
//! sheet: corner cut marks around each page cell and punch-hole guides along
//! the binding edge.

use crate::constants::*;
use crate::types::{Rect, SheetMarks};

/// Configuration for rendering marks on one sheet
pub(crate) struct MarksConfig {
    /// Bounds of each occupied page cell
    pub cells: Vec<Rect>,
    /// Content area inside the sheet margins
    pub content: Rect,
}

/// Generate all enabled marks as PDF content stream operations
pub(crate) fn generate_marks(marks: &SheetMarks, config: &MarksConfig) -> String {
    let mut ops = String::new();

    // Save graphics state, default stroke color black
    ops.push_str("q\n");
    ops.push_str("0 0 0 RG\n");

    if marks.cut_marks {
        ops.push_str(&generate_cut_marks(&config.cells));
    }

    if marks.punch_marks {
        ops.push_str(&generate_punch_marks(&config.content));
    }

    ops.push_str("Q\n");
    ops
}

/// Corner cut marks: an L-shaped pair of arms at each of the four corners of
/// every page cell.
fn generate_cut_marks(cells: &[Rect]) -> String {
    let mut ops = String::new();
    ops.push_str(&format!("{} w\n", CUT_MARK_WIDTH));
    ops.push_str("[] 0 d\n");

    for cell in cells {
        let len = CUT_MARK_LENGTH.min(cell.width / 2.0).min(cell.height / 2.0);
        let (left, right) = (cell.x, cell.right());
        let (bottom, top) = (cell.y, cell.top());

        // Bottom-left
        ops.push_str(&line(left, bottom, left + len, bottom));
        ops.push_str(&line(left, bottom, left, bottom + len));
        // Bottom-right
        ops.push_str(&line(right - len, bottom, right, bottom));
        ops.push_str(&line(right, bottom, right, bottom + len));
        // Top-left
        ops.push_str(&line(left, top, left + len, top));
        ops.push_str(&line(left, top - len, left, top));
        // Top-right
        ops.push_str(&line(right - len, top, right, top));
        ops.push_str(&line(right, top - len, right, top));
    }

    ops
}

/// Punch-hole guides: a strip of circles along the sheet's binding (left)
/// edge, evenly distributed over the content height.
fn generate_punch_marks(content: &Rect) -> String {
    let mut ops = String::new();
    ops.push_str(&format!("{} w\n", PUNCH_MARK_WIDTH));

    let x = mm_to_pt(PUNCH_EDGE_OFFSET_MM);
    let spacing = content.height / PUNCH_HOLE_COUNT as f32;

    for hole in 0..PUNCH_HOLE_COUNT {
        let y = content.y + (hole as f32 + 0.5) * spacing;
        ops.push_str(&circle(x, y, PUNCH_HOLE_RADIUS));
    }

    ops
}

fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> String {
    format!("{} {} m {} {} l S\n", x1, y1, x2, y2)
}

/// Approximate a circle with four Bezier curves.
fn circle(cx: f32, cy: f32, r: f32) -> String {
    let k = r * BEZIER_CIRCLE_FACTOR;
    format!(
        "{} {} m {} {} {} {} {} {} c {} {} {} {} {} {} c {} {} {} {} {} {} c {} {} {} {} {} {} c S\n",
        cx + r,
        cy,
        // Quadrant 1: right -> top
        cx + r,
        cy + k,
        cx + k,
        cy + r,
        cx,
        cy + r,
        // Quadrant 2: top -> left
        cx - k,
        cy + r,
        cx - r,
        cy + k,
        cx - r,
        cy,
        // Quadrant 3: left -> bottom
        cx - r,
        cy - k,
        cx - k,
        cy - r,
        cx,
        cy - r,
        // Quadrant 4: bottom -> right
        cx + k,
        cy - r,
        cx + r,
        cy - k,
        cx + r,
        cy,
    )
}
