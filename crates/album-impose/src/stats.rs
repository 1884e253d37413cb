use crate::page::Page;
use crate::types::{ImposeError, LayoutStatistics, Result};

/// Calculate statistics for a print layout without building it.
pub fn calculate_statistics(pages: &[Page], capacity: usize) -> Result<LayoutStatistics> {
    if capacity == 0 {
        return Err(ImposeError::Config(
            "sheet capacity must be at least 1".to_string(),
        ));
    }

    let source_pages = pages.len();

    // Position-parity split: odd stream holds positions 1,3,5,…
    let odd_count = source_pages.div_ceil(2);
    let even_count = source_pages / 2;

    let front_sheets = odd_count.div_ceil(capacity);
    let back_sheets = even_count.div_ceil(capacity);

    Ok(LayoutStatistics {
        source_pages,
        front_sheets,
        back_sheets,
        total_sheets: front_sheets + back_sheets,
    })
}
