//! The pagination engine
//!
//! Lays out a section list into fixed-size pages. Front matter kinds get
//! exactly one page each; chapters and back matter flow across as many
//! pages as they need. The page counter is shared across the whole call and
//! decides recto/verso for every page.

use log::{debug, warn};

use super::types::{LayoutDirectives, PageLine, RenderedPage};
use super::wrap::{PageFiller, wrap_paragraph};
use crate::geometry::LayoutMetrics;
use crate::types::{Margins, RenderableSection, SectionKind, Settings};

/// Paginate `sections`.
///
/// Returns no pages at all when the settings and margins leave no room for
/// a line or a character. Identical inputs always produce identical pages.
pub fn render_pages(
    sections: &[RenderableSection],
    settings: &Settings,
    margins: &Margins,
    directives: &LayoutDirectives,
) -> Vec<RenderedPage> {
    let Some(metrics) = LayoutMetrics::compute(settings, margins) else {
        warn!("cannot typeset: margins and font size leave no usable text area");
        return Vec::new();
    };

    let mut pages = Vec::new();
    let mut page_number = 0;

    for section in sections {
        match section.kind {
            SectionKind::TitlePage => {
                page_number += 1;
                pages.push(title_page(section, &metrics, page_number));
            }
            SectionKind::CopyrightPage => {
                page_number += 1;
                pages.push(copyright_page(section, &metrics, page_number));
            }
            SectionKind::Dedication => {
                page_number += 1;
                pages.push(dedication_page(section, &metrics, page_number));
            }
            SectionKind::BlankPage => {
                page_number += 1;
                pages.push(RenderedPage::blank(page_number, section.id.clone()));
            }
            SectionKind::Chapter
            | SectionKind::AboutAuthor
            | SectionKind::AlsoBy
            | SectionKind::Acknowledgments => {
                if needs_blank_before(section, directives, page_number + 1) {
                    page_number += 1;
                    debug!(
                        "inserting blank page {} before section {:?}",
                        page_number, section.id
                    );
                    pages.push(RenderedPage::blank(
                        page_number,
                        format!("blank-before-{}", section.id),
                    ));
                }

                let (section_pages, last_page) = flow_section(section, &metrics, page_number + 1);
                page_number = last_page;
                pages.extend(section_pages);
            }
        }
    }

    debug!(
        "paginated {} sections into {} pages ({} lines x {} chars)",
        sections.len(),
        pages.len(),
        metrics.lines_per_page,
        metrics.chars_per_line
    );
    pages
}

/// Manual and start-side triggers together insert at most one blank page
fn needs_blank_before(
    section: &RenderableSection,
    directives: &LayoutDirectives,
    next_page: usize,
) -> bool {
    let manual = directives.blank_before.contains(&section.id);
    let wrong_side =
        section.kind == SectionKind::Chapter && !directives.chapter_start_side.accepts(next_page);
    manual || wrong_side
}

fn single_page(section: &RenderableSection, page_number: usize, lines: Vec<PageLine>) -> RenderedPage {
    RenderedPage {
        lines,
        page_number,
        section_id: section.id.clone(),
        section_kind: section.kind,
        show_page_number: false,
        title: Some(section.title.clone()),
        rich_content: None,
        heading_alignment: None,
        is_blank_page: false,
    }
}

fn padding(count: usize) -> Vec<PageLine> {
    vec![PageLine::blank(); count]
}

/// Title a third of the way down, author two lines below
fn title_page(section: &RenderableSection, metrics: &LayoutMetrics, page_number: usize) -> RenderedPage {
    let mut lines = padding(metrics.lines_per_page / 3);
    lines.push(PageLine::title(section.title.as_str()));
    lines.push(PageLine::blank());
    if !section.content.is_empty() {
        lines.push(PageLine::text(section.content.as_str()));
    }
    single_page(section, page_number, lines)
}

/// Notice in the lower half. Long notices run past the line budget rather
/// than spilling onto another page.
fn copyright_page(
    section: &RenderableSection,
    metrics: &LayoutMetrics,
    page_number: usize,
) -> RenderedPage {
    let mut lines = padding(metrics.lines_per_page / 2);
    for paragraph in section.content.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(PageLine::blank());
        } else {
            lines.extend(
                wrap_paragraph(paragraph, metrics.chars_per_line)
                    .into_iter()
                    .map(PageLine::text),
            );
        }
    }
    single_page(section, page_number, lines)
}

/// Content centered vertically, never truncated
fn dedication_page(
    section: &RenderableSection,
    metrics: &LayoutMetrics,
    page_number: usize,
) -> RenderedPage {
    let content_lines: Vec<&str> = section.content.split('\n').collect();
    let mut lines = padding(metrics.lines_per_page.saturating_sub(content_lines.len()) / 2);
    lines.extend(content_lines.into_iter().map(PageLine::text));
    single_page(section, page_number, lines)
}

/// Lay out a chapter or back matter section starting on `first_page`.
///
/// Returns the section's pages and the number of its last page.
fn flow_section(
    section: &RenderableSection,
    metrics: &LayoutMetrics,
    first_page: usize,
) -> (Vec<RenderedPage>, usize) {
    let mut filler = PageFiller::new(section, metrics.lines_per_page, first_page);

    filler.push(PageLine::blank());
    filler.push(PageLine::title(section.title.as_str()));
    filler.push(PageLine::blank());

    for paragraph in section.content.split('\n') {
        if paragraph.trim().is_empty() {
            filler.push(PageLine::blank());
            continue;
        }
        for line in wrap_paragraph(paragraph, metrics.chars_per_line) {
            filler.push(PageLine::text(line));
        }
    }

    filler.finish()
}

/// Append a trailing blank page when the page count is odd, so the
/// interior has an even leaf count.
pub fn pad_to_even(pages: &mut Vec<RenderedPage>) {
    if pages.len() % 2 == 1 {
        let page_number = pages.last().map_or(1, |p| p.page_number + 1);
        pages.push(RenderedPage::blank(page_number, "blank-end".to_string()));
    }
}

/// Page number on which a section starts
pub fn first_page_of_section(pages: &[RenderedPage], section_id: &str) -> Option<usize> {
    pages
        .iter()
        .find(|p| p.section_id == section_id)
        .map(|p| p.page_number)
}
