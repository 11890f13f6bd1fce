//! Physical page coordinates
//!
//! All values are in points, measured from the top-left corner of the
//! physical page (bleed included). PDF output converts to bottom-up
//! coordinates through [`PageFrame::pdf_y`].

use pod_layout::constants::{BLEED_IN, GLYPH_WIDTH_RATIO, in_to_pt};
use pod_layout::{HeadingAlignment, Margins, PageSide, Settings, bleed_dimensions};

use crate::types::Align;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub side: PageSide,
    /// Physical page size, bleed included
    pub width_pt: f64,
    pub height_pt: f64,
    /// Trim box inside the physical page
    pub trim_left_pt: f64,
    pub trim_top_pt: f64,
    pub trim_width_pt: f64,
    pub trim_height_pt: f64,
    /// Text block
    pub text_left_pt: f64,
    pub text_top_pt: f64,
    pub text_width_pt: f64,
    pub margin_bottom_pt: f64,
    pub font_size_pt: f64,
    pub line_height_pt: f64,
}

impl PageFrame {
    /// Frame of the page numbered `page_number`.
    ///
    /// Bleed extends the fore edge and the top and bottom edges; the spine
    /// edge never bleeds. The inside margin is on the left of recto pages
    /// and on the right of verso pages.
    pub fn new(page_number: usize, settings: &Settings, margins: &Margins) -> Self {
        let side = PageSide::of(page_number);
        let (trim_width, trim_height) = settings.trim_size.dimensions_in();
        let (width, height) = if settings.bleed {
            bleed_dimensions(settings.trim_size)
        } else {
            (trim_width, trim_height)
        };

        let bleed = if settings.bleed { BLEED_IN } else { 0.0 };
        let trim_left = match side {
            PageSide::Recto => 0.0,
            PageSide::Verso => bleed,
        };
        let (left, right) = margins.horizontal_for(side);

        Self {
            side,
            width_pt: in_to_pt(width),
            height_pt: in_to_pt(height),
            trim_left_pt: in_to_pt(trim_left),
            trim_top_pt: in_to_pt(bleed),
            trim_width_pt: in_to_pt(trim_width),
            trim_height_pt: in_to_pt(trim_height),
            text_left_pt: in_to_pt(trim_left + left),
            text_top_pt: in_to_pt(bleed + margins.top),
            text_width_pt: in_to_pt(trim_width - left - right),
            margin_bottom_pt: in_to_pt(margins.bottom),
            font_size_pt: settings.font_size,
            line_height_pt: settings.font_size * settings.line_height,
        }
    }

    /// Baseline of line slot `line`, from the top of the page
    pub fn baseline(&self, line: usize) -> f64 {
        self.text_top_pt + self.font_size_pt + line as f64 * self.line_height_pt
    }

    /// Baseline of the page number: half the bottom margin above the trim
    /// edge
    pub fn page_number_baseline(&self) -> f64 {
        self.trim_top_pt + self.trim_height_pt - self.margin_bottom_pt / 2.0
    }

    /// Convert a distance from the top into a PDF y coordinate
    pub fn pdf_y(&self, from_top: f64) -> f64 {
        self.height_pt - from_top
    }

    /// Left edge of a line of `text` set at `size` points
    pub fn line_x(&self, text: &str, size: f64, align: Align) -> f64 {
        let width = estimate_text_width(text, size);
        match align {
            Align::Left => self.text_left_pt,
            Align::Center => self.trim_left_pt + (self.trim_width_pt - width) / 2.0,
            Align::Right => self.text_left_pt + self.text_width_pt - width,
        }
    }
}

/// Approximate advance width using the same glyph ratio as line breaking
pub fn estimate_text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * GLYPH_WIDTH_RATIO
}

impl From<HeadingAlignment> for Align {
    fn from(alignment: HeadingAlignment) -> Self {
        match alignment {
            HeadingAlignment::Left => Align::Left,
            HeadingAlignment::Center => Align::Center,
            HeadingAlignment::Right => Align::Right,
        }
    }
}
