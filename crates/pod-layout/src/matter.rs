//! Front and back matter, and assembly of the renderable section list

use crate::text::Chapter;
use crate::types::{RenderableSection, SectionKind};

pub const TITLE_PAGE_ID: &str = "fm-title-page";
pub const COPYRIGHT_PAGE_ID: &str = "fm-copyright-page";
pub const DEDICATION_ID: &str = "fm-dedication";
pub const ABOUT_AUTHOR_ID: &str = "bm-about-author";
pub const ALSO_BY_ID: &str = "bm-also-by";
pub const ACKNOWLEDGMENTS_ID: &str = "bm-acknowledgments";

/// A toggleable front or back matter unit.
///
/// Disabled sections keep their content so they can be re-enabled without
/// losing it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatterSection {
    pub kind: SectionKind,
    pub enabled: bool,
    pub content: String,
}

impl MatterSection {
    pub fn new(kind: SectionKind, enabled: bool, content: impl Into<String>) -> Self {
        Self {
            kind,
            enabled,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FrontMatter {
    pub title_page: MatterSection,
    pub copyright_page: MatterSection,
    pub dedication: MatterSection,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title_page: MatterSection::new(SectionKind::TitlePage, true, ""),
            copyright_page: MatterSection::new(SectionKind::CopyrightPage, true, ""),
            dedication: MatterSection::new(
                SectionKind::Dedication,
                false,
                "For everyone who believed in this book.",
            ),
        }
    }
}

impl FrontMatter {
    /// Title page and copyright page enabled, with a templated copyright
    /// notice for `author` in `year`.
    pub fn with_defaults(author: &str, year: i32) -> Self {
        Self {
            copyright_page: MatterSection::new(
                SectionKind::CopyrightPage,
                true,
                copyright_notice(author, year),
            ),
            ..Self::default()
        }
    }

    /// Number of enabled sections, one page each
    pub fn enabled_count(&self) -> usize {
        [&self.title_page, &self.copyright_page, &self.dedication]
            .iter()
            .filter(|s| s.enabled)
            .count()
    }
}

/// Standard copyright page text
pub fn copyright_notice(author: &str, year: i32) -> String {
    let holder = non_blank_or(author, "Author Name");
    format!(
        "Copyright \u{00A9} {year} {holder}\n\n\
         All rights reserved. No part of this publication may be reproduced, distributed, \
         or transmitted in any form or by any means without the prior written permission \
         of the publisher.\n\n\
         Published by {holder}\n\n\
         First Edition"
    )
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BackMatter {
    pub about_author: MatterSection,
    pub also_by: MatterSection,
    pub acknowledgments: MatterSection,
}

impl Default for BackMatter {
    fn default() -> Self {
        Self {
            about_author: MatterSection::new(SectionKind::AboutAuthor, false, ""),
            also_by: MatterSection::new(SectionKind::AlsoBy, false, ""),
            acknowledgments: MatterSection::new(SectionKind::Acknowledgments, false, ""),
        }
    }
}

impl BackMatter {
    /// All sections disabled, with placeholder content ready to enable
    pub fn with_defaults(author: &str) -> Self {
        Self {
            about_author: MatterSection::new(
                SectionKind::AboutAuthor,
                false,
                format!(
                    "{} is a writer and storyteller. Learn more at yourwebsite.com.",
                    non_blank_or(author, "The author")
                ),
            ),
            also_by: MatterSection::new(
                SectionKind::AlsoBy,
                false,
                "Title of Another Book\nTitle of Yet Another Book",
            ),
            acknowledgments: MatterSection::new(
                SectionKind::Acknowledgments,
                false,
                "I would like to thank everyone who helped make this book possible.",
            ),
        }
    }

    /// Number of enabled sections
    pub fn enabled_count(&self) -> usize {
        [&self.about_author, &self.also_by, &self.acknowledgments]
            .iter()
            .filter(|s| s.enabled)
            .count()
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn matter(id: &str, kind: SectionKind, title: String, content: &str) -> RenderableSection {
    RenderableSection {
        id: id.to_string(),
        kind,
        title,
        content: content.to_string(),
        rich_content: None,
        style: None,
        show_page_number: !kind.is_front_matter(),
    }
}

/// Merge front matter, chapters and back matter into one ordered list.
///
/// Order: title page, copyright page, dedication, chapters, about the
/// author, also by, acknowledgments. Disabled matter is omitted. Front
/// matter is unnumbered; chapters and back matter are numbered.
pub fn assemble_sections(
    front_matter: &FrontMatter,
    chapters: &[Chapter],
    back_matter: &BackMatter,
    title: &str,
    author: &str,
) -> Vec<RenderableSection> {
    let mut sections = Vec::with_capacity(chapters.len() + 6);

    if front_matter.title_page.enabled {
        sections.push(matter(
            TITLE_PAGE_ID,
            SectionKind::TitlePage,
            non_blank_or(title, "Untitled").to_string(),
            author,
        ));
    }
    if front_matter.copyright_page.enabled {
        sections.push(matter(
            COPYRIGHT_PAGE_ID,
            SectionKind::CopyrightPage,
            "Copyright".to_string(),
            &front_matter.copyright_page.content,
        ));
    }
    if front_matter.dedication.enabled {
        sections.push(matter(
            DEDICATION_ID,
            SectionKind::Dedication,
            "Dedication".to_string(),
            &front_matter.dedication.content,
        ));
    }

    sections.extend(chapters.iter().map(|ch| RenderableSection {
        id: ch.id.clone(),
        kind: SectionKind::Chapter,
        title: ch.title.clone(),
        content: ch.content.clone(),
        rich_content: ch.rich_content.clone(),
        style: ch.style,
        show_page_number: true,
    }));

    if back_matter.about_author.enabled {
        sections.push(matter(
            ABOUT_AUTHOR_ID,
            SectionKind::AboutAuthor,
            "About the Author".to_string(),
            &back_matter.about_author.content,
        ));
    }
    if back_matter.also_by.enabled {
        sections.push(matter(
            ALSO_BY_ID,
            SectionKind::AlsoBy,
            format!("Also by {}", non_blank_or(author, "the Author")),
            &back_matter.also_by.content,
        ));
    }
    if back_matter.acknowledgments.enabled {
        sections.push(matter(
            ACKNOWLEDGMENTS_ID,
            SectionKind::Acknowledgments,
            "Acknowledgments".to_string(),
            &back_matter.acknowledgments.content,
        ));
    }

    sections
}
