//! Typographic treatment of a line, shared by every renderer

use pod_layout::{PageLine, RenderedPage, SectionKind};

use crate::types::Align;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub weight: Weight,
    /// Added to the body font size
    pub size_delta: f64,
    pub align: Align,
}

impl LineStyle {
    const BODY: LineStyle = LineStyle {
        weight: Weight::Regular,
        size_delta: 0.0,
        align: Align::Left,
    };

    /// Font size for a body font size of `base`, never below one point
    pub fn size(&self, base: f64) -> f64 {
        (base + self.size_delta).max(1.0)
    }
}

/// How `line` of `page` is set
pub fn line_style(page: &RenderedPage, line: &PageLine) -> LineStyle {
    match page.section_kind {
        SectionKind::TitlePage if line.is_title => LineStyle {
            weight: Weight::Bold,
            size_delta: 14.0,
            align: Align::Center,
        },
        SectionKind::TitlePage => LineStyle {
            weight: Weight::Regular,
            size_delta: 2.0,
            align: Align::Center,
        },
        SectionKind::CopyrightPage => LineStyle {
            size_delta: -2.0,
            ..LineStyle::BODY
        },
        SectionKind::Dedication => LineStyle {
            weight: Weight::Italic,
            align: Align::Center,
            ..LineStyle::BODY
        },
        _ if line.is_title => LineStyle {
            weight: Weight::Bold,
            size_delta: 6.0,
            align: page.heading_alignment.map(Align::from).unwrap_or(Align::Left),
        },
        _ => LineStyle::BODY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pod_layout::HeadingAlignment;

    fn page(kind: SectionKind) -> RenderedPage {
        RenderedPage {
            lines: Vec::new(),
            page_number: 1,
            section_id: "s".to_string(),
            section_kind: kind,
            show_page_number: false,
            title: None,
            rich_content: None,
            heading_alignment: None,
            is_blank_page: false,
        }
    }

    #[test]
    fn test_title_page_styles() {
        let p = page(SectionKind::TitlePage);
        let title = line_style(&p, &PageLine::title("Book"));
        assert_eq!(title.weight, Weight::Bold);
        assert_eq!(title.size(11.0), 25.0);
        assert_eq!(line_style(&p, &PageLine::text("Author")).size(11.0), 13.0);
    }

    #[test]
    fn test_heading_alignment() {
        let mut p = page(SectionKind::Chapter);
        assert_eq!(line_style(&p, &PageLine::title("One")).align, Align::Left);
        p.heading_alignment = Some(HeadingAlignment::Right);
        let heading = line_style(&p, &PageLine::title("One"));
        assert_eq!(heading.align, Align::Right);
        assert_eq!(heading.size(11.0), 17.0);
        assert_eq!(line_style(&p, &PageLine::text("Body")), LineStyle::BODY);
    }

    #[test]
    fn test_small_sizes_clamped() {
        let p = page(SectionKind::CopyrightPage);
        assert_eq!(line_style(&p, &PageLine::text("c")).size(2.0), 1.0);
    }
}
