//! Sheet rendering for album print layouts

use std::collections::HashMap;

use album_image::ProcessedImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::create_image_xobject;
use crate::constants::*;
use crate::impose::SheetGroup;
use crate::marks::{MarksConfig, generate_marks};
use crate::options::LayoutOptions;
use crate::types::{Rect, Result};

/// Page grid on one sheet side
pub(crate) struct SheetGrid {
    pub cols: usize,
    pub rows: usize,
    pub cell_width_pt: f32,
    pub cell_height_pt: f32,
}

/// Derive the grid from the sheet capacity: near-square, filled row-major.
pub(crate) fn grid_for_capacity(capacity: usize, content: &Rect) -> SheetGrid {
    let cols = (capacity as f32).sqrt().ceil() as usize;
    let rows = capacity.div_ceil(cols);
    SheetGrid {
        cols,
        rows,
        cell_width_pt: content.width / cols as f32,
        cell_height_pt: content.height / rows as f32,
    }
}

/// Bounds of the cell for a slot index. Row 0 is the top row, so the y
/// calculation is inverted.
pub(crate) fn cell_bounds(grid: &SheetGrid, slot: usize, origin: (f32, f32)) -> Rect {
    let row = slot / grid.cols;
    let col = slot % grid.cols;
    let x = origin.0 + col as f32 * grid.cell_width_pt;
    let y = origin.1 + (grid.rows - row - 1) as f32 * grid.cell_height_pt;
    Rect::new(x, y, grid.cell_width_pt, grid.cell_height_pt)
}

/// Render one sheet side to the output document
pub(crate) fn render_sheet(
    output: &mut Document,
    sheet: &SheetGroup,
    images: &HashMap<String, ProcessedImage>,
    content: &Rect,
    grid: &SheetGrid,
    sheet_width_pt: f32,
    sheet_height_pt: f32,
    parent_pages_id: ObjectId,
    options: &LayoutOptions,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width_pt),
            Object::Real(sheet_height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();
    let mut fonts = Dictionary::new();
    let mut cells: Vec<Rect> = Vec::new();

    for (slot, sheet_page) in sheet.pages.iter().enumerate() {
        let cell = cell_bounds(grid, slot, (content.x, content.y));
        cells.push(cell);

        let Some(image) = images.get(sheet_page.page.id.as_str()) else {
            // Image never decoded; the failure was already logged upstream
            log::warn!(
                "no bitmap for page {} ({}), leaving cell blank",
                sheet_page.page.id,
                sheet_page.page.filename
            );
            continue;
        };

        let xobject_name = format!("P{}", slot);
        let xobject_id = create_image_xobject(output, image);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        // Fit the image inside the padded cell, centered
        let avail_width = cell.width - 2.0 * CELL_PADDING;
        let avail_height = cell.height - 2.0 * CELL_PADDING;
        let scale = (avail_width / image.width as f32).min(avail_height / image.height as f32);
        let width = image.width as f32 * scale;
        let height = image.height as f32 * scale;
        let x = cell.x + (cell.width - width) / 2.0;
        let y = cell.y + (cell.height - height) / 2.0;

        let cmd = if sheet_page.needs_back_rotation {
            // 180° flip: negate the scale terms and translate across the cell
            format!(
                "q {} 0 0 {} {} {} cm /{} Do Q\n",
                -width,
                -height,
                x + width,
                y + height,
                xobject_name
            )
        } else {
            format!(
                "q {} 0 0 {} {} {} cm /{} Do Q\n",
                width, height, x, y, xobject_name
            )
        };
        content_ops.push(cmd);

        let caption = strip_tags(&sheet_page.page.caption);
        if !caption.is_empty() {
            ensure_font(output, &mut fonts, "F1", "Helvetica");
            let text = escape_text(&caption);
            let text_width = caption.len() as f32 * CAPTION_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;
            let text_x = cell.center_x() - text_width / 2.0;
            let text_y = cell.y + 3.0;
            content_ops.push(format!(
                "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
                CAPTION_FONT_SIZE, text_x, text_y, text
            ));
        }
    }

    let has_marks = options.marks.cut_marks || options.marks.punch_marks;
    if has_marks {
        let marks_config = MarksConfig {
            cells,
            content: *content,
        };
        content_ops.push(generate_marks(&options.marks, &marks_config));
    }

    if options.marks.sheet_labels {
        ensure_font(output, &mut fonts, "F2", "Helvetica-Bold");
        let label = sheet.label();
        let text_width = label.len() as f32 * LABEL_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;
        let text_x = sheet_width_pt / 2.0 - text_width / 2.0;
        let text_y = content.top() + 2.0;
        content_ops.push(format!(
            "BT /F2 {} Tf {} {} Td ({}) Tj ET\n",
            LABEL_FONT_SIZE,
            text_x,
            text_y,
            escape_text(&label)
        ));
    }

    // Build resources
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));
    if !fonts.is_empty() {
        resources.set("Font", Object::Dictionary(fonts));
    }

    // Create content stream
    let ops = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), ops.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

fn ensure_font(output: &mut Document, fonts: &mut Dictionary, name: &str, base_font: &str) {
    if fonts.get(name.as_bytes()).is_ok() {
        return;
    }
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(base_font.as_bytes().to_vec()));
    let font_id = output.add_object(font_dict);
    fonts.set(name.as_bytes(), Object::Reference(font_id));
}

/// Reduce a rich-text caption to a single plain-text line.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape characters with meaning inside PDF literal strings.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
