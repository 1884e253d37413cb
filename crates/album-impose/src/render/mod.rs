//! Rendering print layouts to PDF
//!
//! Each emitted sheet side becomes one PDF page: processed page bitmaps are
//! embedded as image XObjects and placed on a capacity-derived grid, with
//! registration marks and the sheet label drawn on top.

mod sheet;
mod xobject;

use std::collections::HashMap;
use std::path::Path;

use album_image::ProcessedImage;
use lopdf::{Dictionary, Document, Object};

use crate::constants::mm_to_pt;
use crate::impose::PrintLayout;
use crate::options::LayoutOptions;
use crate::types::{ImposeError, Rect, Result};
use sheet::{grid_for_capacity, render_sheet};

/// Render a print layout to a PDF document.
///
/// `images` maps page ids to their display bitmaps (manual rotation already
/// applied); pages without a bitmap render as blank cells.
pub async fn render_layout(
    layout: &PrintLayout,
    images: &HashMap<String, ProcessedImage>,
    options: &LayoutOptions,
) -> Result<Document> {
    let layout = layout.clone();
    let images = images.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || render_layout_sync(&layout, &images, &options)).await?
}

fn render_layout_sync(
    layout: &PrintLayout,
    images: &HashMap<String, ProcessedImage>,
    options: &LayoutOptions,
) -> Result<Document> {
    options.validate()?;

    let (width_mm, height_mm) = options
        .paper_size
        .dimensions_with_orientation(options.paper_orientation);
    let sheet_width_pt = mm_to_pt(width_mm);
    let sheet_height_pt = mm_to_pt(height_mm);

    let margins = &options.margins;
    let content = Rect::new(
        mm_to_pt(margins.left_mm),
        mm_to_pt(margins.bottom_mm),
        sheet_width_pt - mm_to_pt(margins.left_mm) - mm_to_pt(margins.right_mm),
        sheet_height_pt - mm_to_pt(margins.top_mm) - mm_to_pt(margins.bottom_mm),
    );
    let grid = grid_for_capacity(layout.capacity, &content);

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for sheet_group in &layout.sheets {
        let page_id = render_sheet(
            &mut output,
            sheet_group,
            images,
            &content,
            &grid,
            sheet_width_pt,
            sheet_height_pt,
            pages_tree_id,
            options,
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Save the rendered document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
