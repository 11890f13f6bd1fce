//! Plain text preview of paginated pages
//!
//! Each page is drawn as a box exactly `chars_per_line` characters wide
//! with one row per line slot, so what the preview shows is what the PDF
//! prints line for line.

use pod_layout::{LayoutMetrics, Margins, PageSide, RenderedPage, Settings};

use crate::style::line_style;
use crate::types::{Align, RenderError, Result};

/// Render every page, separated by an empty line
pub fn render_preview(pages: &[RenderedPage], settings: &Settings, margins: &Margins) -> Result<String> {
    let metrics = LayoutMetrics::compute(settings, margins).ok_or(RenderError::NoPages)?;
    if pages.is_empty() {
        return Err(RenderError::NoPages);
    }

    let rendered: Vec<String> = pages.iter().map(|page| render_page(page, &metrics)).collect();
    Ok(rendered.join("\n"))
}

/// Render one page as a framed text block
pub fn render_page(page: &RenderedPage, metrics: &LayoutMetrics) -> String {
    let width = metrics.chars_per_line;
    let rule = format!("+{}+\n", "-".repeat(width + 2));
    let mut out = String::new();

    out.push_str(&rule);
    out.push_str(&row(&header(page, width), width, Align::Left));
    out.push_str(&rule);

    let rows = metrics.lines_per_page.max(page.lines.len());
    for i in 0..rows {
        match page.lines.get(i) {
            Some(line) => {
                let style = line_style(page, line);
                out.push_str(&row(&line.text, width, style.align));
            }
            None => out.push_str(&row("", width, Align::Left)),
        }
    }

    out.push_str(&rule);
    let footer = if page.show_page_number {
        page.page_number.to_string()
    } else {
        String::new()
    };
    out.push_str(&row(&footer, width, Align::Center));
    out.push_str(&rule);
    out
}

fn header(page: &RenderedPage, width: usize) -> String {
    let side = match page.side() {
        PageSide::Recto => "recto",
        PageSide::Verso => "verso",
    };
    let left = format!("p. {} {}", page.page_number, side);
    let right = if page.is_blank_page {
        "(blank)"
    } else {
        page.title.as_deref().unwrap_or("")
    };

    let used = left.chars().count() + right.chars().count();
    if used + 1 > width {
        return left;
    }
    format!("{left}{}{right}", " ".repeat(width - used))
}

fn row(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    let free = width.saturating_sub(len);
    let (before, after) = match align {
        Align::Left => (0, free),
        Align::Center => (free / 2, free - free / 2),
        Align::Right => (free, 0),
    };
    format!("| {}{}{} |\n", " ".repeat(before), text, " ".repeat(after))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pod_layout::{PageLine, SectionKind};

    fn metrics(lines_per_page: usize, chars_per_line: usize) -> LayoutMetrics {
        LayoutMetrics {
            text_width_pt: 0.0,
            text_height_pt: 0.0,
            line_height_pt: 0.0,
            lines_per_page,
            chars_per_line,
        }
    }

    fn chapter_page(page_number: usize) -> RenderedPage {
        RenderedPage {
            lines: vec![
                PageLine::blank(),
                PageLine::title("One"),
                PageLine::blank(),
                PageLine::text("Hello world."),
            ],
            page_number,
            section_id: "c1".to_string(),
            section_kind: SectionKind::Chapter,
            show_page_number: true,
            title: Some("One".to_string()),
            rich_content: None,
            heading_alignment: None,
            is_blank_page: false,
        }
    }

    #[test]
    fn test_page_box() {
        let text = render_page(&chapter_page(3), &metrics(5, 20));
        let rows: Vec<&str> = text.lines().collect();

        // rule, header, rule, 5 line slots, rule, footer, rule
        assert_eq!(rows.len(), 11);
        assert!(rows.iter().all(|r| r.chars().count() == 24));
        assert_eq!(rows[1], "| p. 3 recto       One |");
        assert_eq!(rows[4], "| One                  |");
        assert_eq!(rows[6], "| Hello world.         |");
        assert_eq!(rows[9], "|          3           |");
    }

    #[test]
    fn test_blank_page_box() {
        let page = RenderedPage::blank(4, "blank-end".to_string());
        let text = render_page(&page, &metrics(2, 20));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[1], "| p. 4 verso   (blank) |");
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[6], format!("|{}|", " ".repeat(22)));
    }

    #[test]
    fn test_no_pages() {
        let result = render_preview(&[], &Settings::default(), &Margins::uniform(0.5));
        assert!(matches!(result, Err(RenderError::NoPages)));
    }
}
