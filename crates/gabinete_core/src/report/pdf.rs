//! PDF emission for history reports.
//!
//! # Responsibility
//! - Drive the PDF canvas from the layout cursor and the record set.
//!
//! # Invariants
//! - The font is re-applied after every page break.
//! - The document is always written, even for an empty record set (title
//!   and separator only).

use super::layout::{
    FONT_SIZE, LEFT_MARGIN_PT, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, PageCursor, SEPARATOR_Y_PT,
    TITLE_Y_PT,
};
use super::{ReportError, ReportOutcome, ReportResult};
use crate::model::request::RequestRecord;
use log::{info, warn};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const REPORT_TITLE: &str = "Relatório Completo de Atendimentos";
const LAYER_NAME: &str = "conteúdo";

/// Renders the given records onto US-Letter pages at `path`.
///
/// Records are drawn in input order, ten labelled lines each. A record
/// whose required display fields are blank is skipped with a warning and
/// counted in the outcome; the render continues.
pub fn render_report(records: &[RequestRecord], path: &Path) -> ReportResult<ReportOutcome> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        LAYER_NAME,
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|err| ReportError::Pdf(err.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    draw_line(&layer, &font, REPORT_TITLE, TITLE_Y_PT);
    draw_line(&layer, &font, &"-".repeat(80), SEPARATOR_Y_PT);

    let mut cursor = PageCursor::new();
    let mut rendered = 0usize;
    let mut skipped = 0usize;

    for record in records {
        if !is_renderable(record) {
            warn!(
                "event=report_render module=report status=skipped id={} reason=missing_fields",
                record.id
            );
            skipped += 1;
            continue;
        }

        if cursor.needs_break() {
            let (page, page_layer) =
                doc.add_page(Mm::from(Pt(PAGE_WIDTH_PT)), Mm::from(Pt(PAGE_HEIGHT_PT)), LAYER_NAME);
            layer = doc.get_page(page).get_layer(page_layer);
            cursor.start_new_page();
        }

        for (line, text) in record_lines(record).into_iter().enumerate() {
            draw_line(&layer, &font, &text, cursor.line_y(line));
        }
        cursor.advance_record();
        rendered += 1;
    }

    let pages = cursor.page();
    doc.save(&mut BufWriter::new(File::create(path)?))
        .map_err(|err| ReportError::Pdf(err.to_string()))?;

    info!(
        "event=report_render module=report status=ok path={} pages={pages} rendered={rendered} skipped={skipped}",
        path.display()
    );

    Ok(ReportOutcome {
        path: path.to_path_buf(),
        pages,
        rendered,
        skipped,
    })
}

fn draw_line(layer: &PdfLayerReference, font: &IndirectFontRef, text: &str, y: f64) {
    layer.use_text(
        text,
        FONT_SIZE,
        Mm::from(Pt(LEFT_MARGIN_PT)),
        Mm::from(Pt(y)),
        font,
    );
}

fn is_renderable(record: &RequestRecord) -> bool {
    !record.constituent_cpf.trim().is_empty()
        && !record.constituent_name.trim().is_empty()
        && !record.created_at.trim().is_empty()
}

fn record_lines(record: &RequestRecord) -> [String; 10] {
    [
        format!("ID: {}", record.id),
        format!("CPF: {}", record.constituent_cpf),
        format!("Nome: {}", record.constituent_name),
        format!("Tipo de Pedido: {}", record.request_type.as_db_str()),
        format!("Descrição: {}", record.description.as_deref().unwrap_or("")),
        format!("Data/Horário: {}", record.created_at),
        format!("Prazo: {}", record.deadline.as_deref().unwrap_or("")),
        format!("Responsável: {}", record.handler.as_deref().unwrap_or("")),
        format!("Status: {}", record.status.as_db_str()),
        format!("Prioridade: {}", record.priority.as_db_str()),
    ]
}
