pub mod constants;
mod geometry;
pub mod layout;
mod matter;
mod project;
mod source;
mod stats;
pub mod text;
mod types;
mod validate;

pub use geometry::*;
pub use layout::{
    ChapterStartSide, LayoutDirectives, PageLine, RenderedPage, first_page_of_section,
    pad_to_even, render_pages, wrap_paragraph,
};
pub use matter::*;
pub use project::{BookProject, Typeset};
pub use source::{extract_docx_text, extract_pdf_text, load_manuscript};
pub use stats::{LayoutStatistics, calculate_statistics};
pub use text::{
    Chapter, SanitizedTitle, apply_rich_edit, chapters_to_text, extract_title_from_text,
    heading_title, is_heading, merge_with_previous, rename_chapter, sanitize_title,
    split_into_chapters,
};
pub use types::*;
pub use validate::{IssueCategory, Severity, ValidationIssue, validate};
