use log::{debug, info};
use pod_layout::{Margins, RenderedPage, Settings, pad_to_even};
use printpdf::*;
use std::path::Path;

use crate::frame::PageFrame;
use crate::options::{FontSet, PdfOptions};
use crate::style::{Weight, line_style};
use crate::types::{Align, RenderError, Result};

/// Render `pages` and write the PDF to `output_path`
pub async fn generate_pdf(
    pages: &[RenderedPage],
    settings: &Settings,
    margins: &Margins,
    options: &PdfOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let pages = pages.to_vec();
    let settings = *settings;
    let margins = *margins;
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || {
        generate_pdf_bytes(&pages, &settings, &margins, &options)
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    info!("wrote {}", output_path.display());

    Ok(())
}

/// Render `pages` to PDF bytes
pub fn generate_pdf_bytes(
    pages: &[RenderedPage],
    settings: &Settings,
    margins: &Margins,
    options: &PdfOptions,
) -> Result<Vec<u8>> {
    let doc = build_document(pages, settings, margins, options)?;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for warning in &warnings {
        debug!("pdf: {:?}", warning);
    }

    Ok(bytes)
}

/// Build the document: one PDF page per rendered page, in order
pub fn build_document(
    pages: &[RenderedPage],
    settings: &Settings,
    margins: &Margins,
    options: &PdfOptions,
) -> Result<PdfDocument> {
    if pages.is_empty() {
        return Err(RenderError::NoPages);
    }

    let mut pages = pages.to_vec();
    if options.pad_to_even {
        pad_to_even(&mut pages);
    }

    let fonts = FontSet::for_family(settings.font_family);
    let mut doc = PdfDocument::new(&options.title);

    for page in &pages {
        let frame = PageFrame::new(page.page_number, settings, margins);
        let ops = page_ops(page, &frame, &fonts, options);
        doc.pages.push(pdf_page(&frame, ops));
    }

    info!("built {} PDF pages", doc.pages.len());
    Ok(doc)
}

fn page_ops(page: &RenderedPage, frame: &PageFrame, fonts: &FontSet, options: &PdfOptions) -> Vec<Op> {
    let mut ops = Vec::new();

    for (slot, line) in page.lines.iter().enumerate() {
        if line.is_blank() {
            continue;
        }
        let style = line_style(page, line);
        let size = style.size(frame.font_size_pt);
        let font = match style.weight {
            Weight::Regular => fonts.regular,
            Weight::Bold => fonts.bold,
            Weight::Italic => fonts.italic,
        };
        let x = frame.line_x(&line.text, size, style.align);
        let y = frame.pdf_y(frame.baseline(slot));
        push_text(&mut ops, &line.text, font, size, x, y);
    }

    if page.show_page_number {
        let number = page.page_number.to_string();
        let size = options.page_number_size_pt;
        let x = frame.line_x(&number, size, Align::Center);
        let y = frame.pdf_y(frame.page_number_baseline());
        push_text(&mut ops, &number, fonts.regular, size, x, y);
    }

    ops
}

fn push_text(ops: &mut Vec<Op>, text: &str, font: BuiltinFont, size: f64, x: f64, y: f64) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(x as f32),
            y: Pt(y as f32),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font,
        size: Pt(size as f32),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_string())],
        font,
    });
    ops.push(Op::EndTextSection);
}

/// Media box covers the bleed; the trim box marks the cut
fn pdf_page(frame: &PageFrame, ops: Vec<Op>) -> PdfPage {
    let trim_bottom = frame.height_pt - frame.trim_top_pt - frame.trim_height_pt;

    PdfPage {
        media_box: rect(0.0, 0.0, frame.width_pt, frame.height_pt),
        trim_box: rect(
            frame.trim_left_pt,
            trim_bottom,
            frame.trim_width_pt,
            frame.trim_height_pt,
        ),
        crop_box: rect(0.0, 0.0, frame.width_pt, frame.height_pt),
        ops,
    }
}

fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect {
        x: Pt(x as f32),
        y: Pt(y as f32),
        width: Pt(width as f32),
        height: Pt(height as f32),
    }
}
