//! Greedy word wrapping and page filling

use super::types::{PageLine, RenderedPage};
use crate::types::RenderableSection;

/// Wrap a paragraph greedily at `chars_per_line` characters.
///
/// A word is added to the current line unless the result would be strictly
/// longer than `chars_per_line`. A single word longer than a line is kept
/// whole on its own line.
pub fn wrap_paragraph(paragraph: &str, chars_per_line: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > chars_per_line {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Fills pages of one flowing section.
///
/// A page is flushed only when a line is about to be added to a page that
/// already holds `lines_per_page` lines, so no page exceeds the budget.
pub(crate) struct PageFiller<'a> {
    section: &'a RenderableSection,
    lines_per_page: usize,
    page_number: usize,
    current: Vec<PageLine>,
    pages: Vec<RenderedPage>,
}

impl<'a> PageFiller<'a> {
    /// Start filling at `page_number`, the first page of the section
    pub fn new(section: &'a RenderableSection, lines_per_page: usize, page_number: usize) -> Self {
        Self {
            section,
            lines_per_page,
            page_number,
            current: Vec::with_capacity(lines_per_page),
            pages: Vec::new(),
        }
    }

    pub fn push(&mut self, line: PageLine) {
        if self.current.len() >= self.lines_per_page {
            self.flush();
            self.page_number += 1;
        }
        self.current.push(line);
    }

    fn flush(&mut self) {
        let lines = std::mem::take(&mut self.current);
        self.pages.push(RenderedPage {
            lines,
            page_number: self.page_number,
            section_id: self.section.id.clone(),
            section_kind: self.section.kind,
            show_page_number: self.section.show_page_number,
            title: Some(self.section.title.clone()),
            rich_content: self.section.rich_content.clone(),
            heading_alignment: self.section.style.map(|s| s.heading_alignment),
            is_blank_page: false,
        });
    }

    /// Flush the last partial page and return the section's pages with the
    /// last page number used
    pub fn finish(mut self) -> (Vec<RenderedPage>, usize) {
        if !self.current.is_empty() {
            self.flush();
        }
        (self.pages, self.page_number)
    }
}
