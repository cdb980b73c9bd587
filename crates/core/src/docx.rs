//! DOCX rendering of a [`LabRecordLayout`].

use crate::constants::{PAGE_HEIGHT_TWIPS, PAGE_WIDTH_TWIPS};
use crate::layout::{Alignment, LabRecordLayout, TitleBlock};
use crate::{RecordError, RecordResult};
use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, Table, TableCell, TableRow};
use std::io::Cursor;

/// Packs `layout` into a DOCX archive held in memory.
///
/// # Errors
/// Returns `RecordError::DocumentPack` if the archive cannot be written.
pub fn render_docx(layout: &LabRecordLayout) -> RecordResult<Vec<u8>> {
    let margins = layout.margins;
    let text_width = PAGE_WIDTH_TWIPS as i32 - margins.left - margins.right;
    let columns = layout.table.column_count();
    let column_width = (text_width.max(0) as usize) / columns;

    let rows = layout
        .table
        .rows
        .iter()
        .map(|cells| TableRow::new(cells.iter().map(|text| text_cell(text)).collect()))
        .collect();

    let table = Table::new(rows).set_grid(vec![column_width; columns]);

    let mut buf = Cursor::new(Vec::new());
    Docx::new()
        .page_size(PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS)
        .page_margin(
            PageMargin::new()
                .top(margins.top)
                .bottom(margins.bottom)
                .left(margins.left)
                .right(margins.right),
        )
        .add_paragraph(title_paragraph(&layout.title))
        .add_table(table)
        .build()
        .pack(&mut buf)
        .map_err(|e| RecordError::DocumentPack(e.to_string()))?;

    Ok(buf.into_inner())
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn title_paragraph(title: &TitleBlock) -> Paragraph {
    // docx sizes are in half-points
    let mut run = Run::new().add_text(&title.text).size(title.point_size * 2);
    if title.bold {
        run = run.bold();
    }

    let alignment = match title.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    };

    Paragraph::new().add_run(run).align(alignment)
}
