//! Layout data types
//!
//! These types are the output of pagination and the input of every
//! renderer.

use std::collections::BTreeSet;

use crate::types::{HeadingAlignment, PageSide, SectionKind};

/// Which side chapters must start on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ChapterStartSide {
    #[default]
    Any,
    /// Verso (even page numbers)
    Left,
    /// Recto (odd page numbers)
    Right,
}

impl ChapterStartSide {
    /// Whether a chapter may start on `page_number`
    pub fn accepts(self, page_number: usize) -> bool {
        match self {
            ChapterStartSide::Any => true,
            ChapterStartSide::Left => PageSide::of(page_number) == PageSide::Verso,
            ChapterStartSide::Right => PageSide::of(page_number) == PageSide::Recto,
        }
    }
}

/// Layout directives applied on top of the section list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutDirectives {
    pub chapter_start_side: ChapterStartSide,
    /// Section ids that get one blank page inserted before them
    pub blank_before: BTreeSet<String>,
}

/// One typeset line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageLine {
    pub text: String,
    pub is_title: bool,
}

impl PageLine {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_title: false,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_title: true,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// A physical page of the book interior
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenderedPage {
    pub lines: Vec<PageLine>,
    /// 1-based, increasing by one per page across the whole document
    pub page_number: usize,
    pub section_id: String,
    pub section_kind: SectionKind,
    pub show_page_number: bool,
    /// Title of the owning section, repeated on every page of the section
    pub title: Option<String>,
    pub rich_content: Option<String>,
    pub heading_alignment: Option<HeadingAlignment>,
    pub is_blank_page: bool,
}

impl RenderedPage {
    /// An inserted page without content
    pub fn blank(page_number: usize, section_id: String) -> Self {
        Self {
            lines: Vec::new(),
            page_number,
            section_id,
            section_kind: SectionKind::BlankPage,
            show_page_number: false,
            title: None,
            rich_content: None,
            heading_alignment: None,
            is_blank_page: true,
        }
    }

    pub fn side(&self) -> PageSide {
        PageSide::of(self.page_number)
    }
}
