//! Album imposition - arranging pages on duplex sheets
//!
//! The ordered page sequence is split by position parity into a front and a
//! back stream, each stream is chunked by the sheet capacity, and the chunks
//! are interleaved into numbered physical sheet sides. Back-side pages whose
//! final visual orientation is landscape get an extra 180° flip so they stay
//! upright relative to their front-side partner after the duplex pass.

use album_image::Orientation;

use crate::page::Page;
use crate::types::{ImposeError, Result, SheetSide};

/// One page placed on a sheet: a deep copy of the album page plus the
/// back-rotation flag consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPage {
    pub page: Page,
    pub needs_back_rotation: bool,
}

/// One emitted sheet side.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGroup {
    pub side: SheetSide,
    /// Global 1-based sheet number
    pub number: usize,
    /// Total emitted sheets in this layout
    pub total: usize,
    pub pages: Vec<SheetPage>,
}

impl SheetGroup {
    pub fn label(&self) -> String {
        format!("Sheet {} of {}", self.number, self.total)
    }
}

/// The full print layout. Ephemeral: built immediately before a print pass
/// and torn down after, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintLayout {
    pub sheets: Vec<SheetGroup>,
    pub capacity: usize,
}

impl PrintLayout {
    pub fn total_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Whether a back-side page needs the extra 180° flip.
///
/// Duplex printing flips the sheet about a fixed axis: a page whose final
/// visual orientation is landscape needs the flip, one whose final
/// orientation is portrait does not.
pub fn needs_back_rotation(orientation: Orientation, rotation_steps: u8) -> bool {
    let even_steps = rotation_steps % 2 == 0;
    match orientation {
        Orientation::Horizontal => even_steps,
        Orientation::Vertical => !even_steps,
    }
}

/// Build the duplex print layout for the given ordered pages.
///
/// Sheets are numbered globally in emission order (front before back within
/// the same chunk index); chunks with zero pages are never emitted, so an
/// album with zero pages yields zero sheets.
pub fn impose(pages: &[Page], capacity: usize) -> Result<PrintLayout> {
    if capacity == 0 {
        return Err(ImposeError::Config(
            "sheet capacity must be at least 1".to_string(),
        ));
    }

    // Partition by 1-based position parity, preserving relative order
    let mut odd: Vec<&Page> = Vec::new();
    let mut even: Vec<&Page> = Vec::new();
    for (index, page) in pages.iter().enumerate() {
        if (index + 1) % 2 == 1 {
            odd.push(page);
        } else {
            even.push(page);
        }
    }

    let odd_chunks: Vec<&[&Page]> = odd.chunks(capacity).collect();
    let even_chunks: Vec<&[&Page]> = even.chunks(capacity).collect();
    let total = odd_chunks.len() + even_chunks.len();

    let mut sheets = Vec::with_capacity(total);
    let mut number = 1;

    for index in 0..odd_chunks.len().max(even_chunks.len()) {
        if let Some(chunk) = odd_chunks.get(index) {
            sheets.push(build_sheet(SheetSide::Front, number, total, chunk));
            number += 1;
        }
        if let Some(chunk) = even_chunks.get(index) {
            sheets.push(build_sheet(SheetSide::Back, number, total, chunk));
            number += 1;
        }
    }

    Ok(PrintLayout { sheets, capacity })
}

fn build_sheet(side: SheetSide, number: usize, total: usize, chunk: &[&Page]) -> SheetGroup {
    let pages = chunk
        .iter()
        .map(|&page| SheetPage {
            needs_back_rotation: side == SheetSide::Back
                && needs_back_rotation(
                    page.orientation().unwrap_or_default(),
                    page.rotation_steps(),
                ),
            page: page.clone(),
        })
        .collect();

    SheetGroup {
        side,
        number,
        total,
        pages,
    }
}
