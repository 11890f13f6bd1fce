use std::collections::HashSet;

use crate::layout::RenderedPage;
use crate::types::{PageSide, SectionKind};

/// Statistics about a paginated book interior
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutStatistics {
    /// Total number of pages, blank pages included
    pub total_pages: usize,
    /// Blank pages inserted for start side or manual breaks
    pub blank_pages: usize,
    /// Pages that print a page number
    pub numbered_pages: usize,
    /// Number of distinct sections with at least one page
    pub sections: usize,
    /// Pages belonging to chapters
    pub chapter_pages: usize,
    pub recto_pages: usize,
    pub verso_pages: usize,
}

/// Calculate statistics for a page sequence
pub fn calculate_statistics(pages: &[RenderedPage]) -> LayoutStatistics {
    let mut sections = HashSet::new();
    let mut stats = LayoutStatistics {
        total_pages: pages.len(),
        ..Default::default()
    };

    for page in pages {
        if page.is_blank_page {
            stats.blank_pages += 1;
        } else {
            sections.insert(page.section_id.as_str());
        }
        if page.show_page_number {
            stats.numbered_pages += 1;
        }
        if page.section_kind == SectionKind::Chapter {
            stats.chapter_pages += 1;
        }
        match page.side() {
            PageSide::Recto => stats.recto_pages += 1,
            PageSide::Verso => stats.verso_pages += 1,
        }
    }

    stats.sections = sections.len();
    stats
}
