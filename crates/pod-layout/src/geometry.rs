//! Page geometry: margins, text block and page count estimation
//!
//! Every function here is pure. [`LayoutMetrics`] is the single place where
//! lines-per-page and characters-per-line are derived; the estimator, the
//! pagination engine and the renderers all go through it.

use log::warn;

use crate::constants::*;
use crate::types::{Margins, Settings, TrimSize};

/// Minimum inside margin (gutter) for a book of `page_count` pages
pub fn min_gutter(page_count: usize) -> f64 {
    GUTTER_STEPS
        .iter()
        .find(|(max_pages, _)| page_count <= *max_pages)
        .map(|(_, gutter)| *gutter)
        .unwrap_or(MAX_GUTTER_IN)
}

/// Publisher minimum margins
pub fn min_margins(page_count: usize, bleed: bool) -> Margins {
    let edge = if bleed {
        MIN_EDGE_MARGIN_BLEED_IN
    } else {
        MIN_EDGE_MARGIN_IN
    };
    Margins {
        top: edge,
        bottom: edge,
        inside: min_gutter(page_count),
        outside: edge,
    }
}

/// Comfortable margins: edges of at least half an inch, a wider gutter
pub fn recommended_margins(page_count: usize, bleed: bool) -> Margins {
    let min = min_margins(page_count, bleed);
    Margins {
        top: min.top.max(RECOMMENDED_EDGE_MARGIN_IN),
        bottom: min.bottom.max(RECOMMENDED_EDGE_MARGIN_IN),
        inside: min.inside + RECOMMENDED_EXTRA_GUTTER_IN,
        outside: min.outside.max(RECOMMENDED_EDGE_MARGIN_IN),
    }
}

/// Text block dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    pub width: f64,
    pub height: f64,
}

/// Trim size minus margins
pub fn text_block_size(trim_size: TrimSize, margins: &Margins) -> TextBlock {
    let (width, height) = trim_size.dimensions_in();
    TextBlock {
        width: width - margins.inside - margins.outside,
        height: height - margins.top - margins.bottom,
    }
}

/// Physical page size when printing with bleed.
///
/// Bleed is added on the outside edge only horizontally, and on both the
/// top and bottom edges.
pub fn bleed_dimensions(trim_size: TrimSize) -> (f64, f64) {
    let (width, height) = trim_size.dimensions_in();
    (width + BLEED_IN, height + 2.0 * BLEED_IN)
}

/// Typesetting capacity derived from settings and margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub text_width_pt: f64,
    pub text_height_pt: f64,
    pub line_height_pt: f64,
    pub lines_per_page: usize,
    pub chars_per_line: usize,
}

impl LayoutMetrics {
    /// Compute the capacity of one page.
    ///
    /// Returns `None` when the configuration leaves no room for a single
    /// line or a single character.
    pub fn compute(settings: &Settings, margins: &Margins) -> Option<Self> {
        let block = text_block_size(settings.trim_size, margins);
        let text_width_pt = in_to_pt(block.width);
        let text_height_pt = in_to_pt(block.height);

        let line_height_pt = settings.font_size * settings.line_height;
        let lines_per_page = (text_height_pt / line_height_pt).floor();
        let chars_per_line = (text_width_pt / (settings.font_size * GLYPH_WIDTH_RATIO)).floor();

        // NaN and infinities from zero font sizes fail these checks as well
        if !(lines_per_page >= 1.0 && lines_per_page.is_finite())
            || !(chars_per_line >= 1.0 && chars_per_line.is_finite())
        {
            return None;
        }

        Some(Self {
            text_width_pt,
            text_height_pt,
            line_height_pt,
            lines_per_page: lines_per_page as usize,
            chars_per_line: chars_per_line as usize,
        })
    }
}

/// Estimate the printed page count of `text`.
///
/// Each blank line costs one line, every other line costs its wrapped
/// length. The result is rounded up to an even number. Blank text
/// estimates to zero pages; a configuration with no capacity estimates to
/// one page.
pub fn estimate_page_count(text: &str, settings: &Settings, margins: &Margins) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let Some(metrics) = LayoutMetrics::compute(settings, margins) else {
        warn!("margins and font size leave no room for text, estimating a single page");
        return 1;
    };

    let total_lines: usize = text
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                1
            } else {
                line.chars().count().div_ceil(metrics.chars_per_line).max(1)
            }
        })
        .sum();

    let pages = total_lines.div_ceil(metrics.lines_per_page).max(1);
    if pages % 2 == 0 { pages } else { pages + 1 }
}

/// Margins and page count chosen for a manuscript before its real margins
/// are known
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bootstrap {
    pub margins: Margins,
    pub page_count: usize,
}

/// Two-step margin bootstrap.
///
/// 1. Estimate with uniform placeholder margins.
/// 2. Take the recommended margins for that estimate (at least the publisher
///    minimum page count), then estimate once more with them.
///
/// Not iterated to a fixed point; the result must be reproducible.
pub fn bootstrap_layout(text: &str, settings: &Settings) -> Bootstrap {
    let placeholder = Margins::uniform(PLACEHOLDER_MARGIN_IN);
    let first_pass = estimate_page_count(text, settings, &placeholder);
    let margins = recommended_margins(first_pass.max(MIN_PAGE_COUNT), settings.bleed);
    let page_count = estimate_page_count(text, settings, &margins);
    Bootstrap {
        margins,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_steps() {
        assert_eq!(min_gutter(0), 0.375);
        assert_eq!(min_gutter(150), 0.375);
        assert_eq!(min_gutter(151), 0.5);
        assert_eq!(min_gutter(300), 0.5);
        assert_eq!(min_gutter(301), 0.625);
        assert_eq!(min_gutter(500), 0.625);
        assert_eq!(min_gutter(700), 0.75);
        assert_eq!(min_gutter(701), 0.875);
        assert_eq!(min_gutter(828), 0.875);
    }

    #[test]
    fn test_min_margins_bleed() {
        let m = min_margins(200, true);
        assert_eq!(m.top, 0.375);
        assert_eq!(m.bottom, 0.375);
        assert_eq!(m.outside, 0.375);
        assert_eq!(m.inside, 0.5);

        let m = min_margins(200, false);
        assert_eq!(m.top, 0.25);
        assert_eq!(m.outside, 0.25);
    }

    #[test]
    fn test_recommended_margins() {
        let m = recommended_margins(100, false);
        assert_eq!(m.top, 0.5);
        assert_eq!(m.bottom, 0.5);
        assert_eq!(m.outside, 0.5);
        assert_eq!(m.inside, 0.5);
    }

    #[test]
    fn test_metrics_six_by_nine() {
        let settings = Settings::default();
        let metrics = LayoutMetrics::compute(&settings, &Margins::uniform(0.5)).unwrap();
        // 8in * 72 / 16.5pt
        assert_eq!(metrics.lines_per_page, 34);
        // 5in * 72 / 5.28pt
        assert_eq!(metrics.chars_per_line, 68);
    }

    #[test]
    fn test_metrics_degenerate() {
        let settings = Settings::default();
        assert!(LayoutMetrics::compute(&settings, &Margins::uniform(3.0)).is_none());

        let mut tiny_font = settings;
        tiny_font.font_size = 0.0;
        assert!(LayoutMetrics::compute(&tiny_font, &Margins::uniform(0.5)).is_none());
    }

    #[test]
    fn test_bleed_dimensions() {
        assert_eq!(bleed_dimensions(TrimSize::W6H9), (6.125, 9.25));
    }
}
