//! Chapter segmentation and chapter editing
//!
//! [`split_into_chapters`] is a single left-to-right scan over the lines of
//! a manuscript. [`chapters_to_text`] is its inverse for chapters whose
//! titles still look like headings.

use log::debug;
use uuid::Uuid;

use super::heading::{heading_title, is_heading, sanitize_title};
use crate::types::{BookError, ChapterStyle, Result};

/// A chapter of the manuscript, in reading order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Chapter {
    /// Unique within a document and stable for the lifetime of the chapter
    pub id: String,
    pub title: String,
    /// Plain text; paragraphs separated by blank lines
    pub content: String,
    /// Optional rich representation owned by an editor
    #[cfg_attr(feature = "serde", serde(default))]
    pub rich_content: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: Option<ChapterStyle>,
}

impl Chapter {
    /// Create a chapter with a fresh identifier
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: new_chapter_id(),
            title: title.into(),
            content: content.into(),
            rich_content: None,
            style: None,
        }
    }
}

fn new_chapter_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Identifier of the `position`th chapter (1-based) found by segmentation
fn segmented_chapter_id(position: usize) -> String {
    format!("chapter-{position}")
}

fn segmented(chapters: &mut Vec<Chapter>, title: String, content: String) {
    chapters.push(Chapter {
        id: segmented_chapter_id(chapters.len() + 1),
        title,
        content,
        rich_content: None,
        style: None,
    });
}

/// Split raw manuscript text into chapters.
///
/// - Blank input yields no chapters.
/// - Text without any heading yields one chapter titled "Chapter 1".
/// - Text before the first heading becomes its own chapter when non-empty.
/// - Two consecutive headings produce an empty chapter for the first one.
///
/// Chapter ids depend only on position (`chapter-1`, `chapter-2`, ...), so
/// segmenting the same text twice yields identical chapters.
pub fn split_into_chapters(text: &str) -> Vec<Chapter> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut chapters: Vec<Chapter> = Vec::new();
    let mut current_title = String::new();
    let mut current_lines: Vec<&str> = Vec::new();
    // Overflow recovered from the current heading, seeded before its body
    let mut current_overflow = String::new();
    let mut found_heading = false;

    for line in text.lines() {
        if !is_heading(line) {
            current_lines.push(line);
            continue;
        }

        if !current_lines.is_empty() || !current_overflow.is_empty() || found_heading {
            let content = join_body(&current_overflow, &current_lines);
            if !content.is_empty() || found_heading {
                let title = chapter_title(&current_title, chapters.len());
                segmented(&mut chapters, title, content);
            }
        }
        found_heading = true;

        let sanitized = sanitize_title(&heading_title(line));
        if !sanitized.overflow.is_empty() {
            debug!(
                "heading {:?} was too long, moved {} characters to the body",
                sanitized.title,
                sanitized.overflow.len()
            );
        }
        current_title = sanitized.title;
        current_overflow = sanitized.overflow;
        current_lines.clear();
    }

    let content = join_body(&current_overflow, &current_lines);
    if found_heading {
        let title = chapter_title(&current_title, chapters.len());
        segmented(&mut chapters, title, content);
    } else if !content.is_empty() {
        segmented(&mut chapters, "Chapter 1".to_string(), content);
    }

    debug!("split manuscript into {} chapters", chapters.len());
    chapters
}

fn join_body(overflow: &str, lines: &[&str]) -> String {
    let body = lines.join("\n");
    if overflow.is_empty() {
        body.trim().to_string()
    } else {
        format!("{overflow}\n{body}").trim().to_string()
    }
}

fn chapter_title(title: &str, index: usize) -> String {
    if title.is_empty() {
        format!("Chapter {}", index + 1)
    } else {
        title.to_string()
    }
}

/// Recombine chapters into manuscript text
pub fn chapters_to_text(chapters: &[Chapter]) -> String {
    chapters
        .iter()
        .map(|ch| format!("{}\n\n{}", ch.title, ch.content))
        .collect::<Vec<_>>()
        .join("\n\n\n")
}

/// Change a chapter title.
///
/// When the new title is a strict prefix of the old one, the removed tail
/// is kept by prepending it to the chapter body.
pub fn rename_chapter(chapter: &mut Chapter, new_title: &str) {
    let old_title = std::mem::take(&mut chapter.title);

    if old_title.len() > new_title.len() && old_title.starts_with(new_title) {
        let removed = old_title[new_title.len()..].trim();
        if !removed.is_empty() {
            chapter.content = format!("{removed}\n\n{}", chapter.content);
            if let Some(rich) = chapter.rich_content.as_mut() {
                *rich = format!("<p>{removed}</p>{rich}");
            }
        }
    }

    chapter.title = new_title.to_string();
}

/// Merge the chapter at `index` into its predecessor.
///
/// The merged chapter's title becomes a paragraph of the predecessor's body
/// and the chapter is removed from the list.
pub fn merge_with_previous(chapters: &mut Vec<Chapter>, index: usize) -> Result<()> {
    if index == 0 || index >= chapters.len() {
        return Err(BookError::Config(format!(
            "Cannot merge chapter at index {} of {} into a previous chapter",
            index,
            chapters.len()
        )));
    }

    let current = chapters.remove(index);
    let previous = &mut chapters[index - 1];

    previous.content = format!(
        "{}\n\n{}\n\n{}",
        previous.content, current.title, current.content
    );

    if let Some(rich) = previous.rich_content.as_mut() {
        let body = current
            .rich_content
            .unwrap_or_else(|| format!("<p>{}</p>", current.content.replace("\n\n", "</p><p>")));
        rich.push_str(&format!("<p><strong>{}</strong></p>{}", current.title, body));
    }

    debug!("merged chapter {:?} into {:?}", current.title, previous.title);
    Ok(())
}

/// Overwrite a chapter with the result of a rich editing pass
pub fn apply_rich_edit(
    chapter: &mut Chapter,
    title: &str,
    content: &str,
    rich_content: Option<String>,
    style: Option<ChapterStyle>,
) {
    chapter.title = title.to_string();
    chapter.content = content.to_string();
    chapter.rich_content = rich_content;
    chapter.style = style;
}
