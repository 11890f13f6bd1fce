use chrono::Datelike;
use log::info;

use crate::geometry::{Bootstrap, bootstrap_layout, estimate_page_count};
use crate::layout::{LayoutDirectives, RenderedPage, render_pages};
use crate::matter::{BackMatter, FrontMatter, assemble_sections, copyright_notice};
use crate::stats::{LayoutStatistics, calculate_statistics};
use crate::text::{Chapter, chapters_to_text, extract_title_from_text, split_into_chapters};
use crate::types::*;
use crate::validate::{ValidationIssue, validate};

/// A book being formatted: manuscript, chapters, settings and matter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BookProject {
    pub title: String,
    pub author: String,
    /// Publication year used by the generated copyright notice
    pub year: i32,
    pub raw_text: String,
    /// Edited chapter list; segmented from `raw_text` when empty
    pub chapters: Vec<Chapter>,
    pub settings: Settings,
    /// Explicit margins; recommended margins are derived when absent
    pub margins: Option<Margins>,
    pub front_matter: FrontMatter,
    pub back_matter: BackMatter,
    pub directives: LayoutDirectives,
}

impl Default for BookProject {
    fn default() -> Self {
        Self {
            title: "Untitled Book".to_string(),
            author: String::new(),
            year: chrono::Local::now().year(),
            raw_text: String::new(),
            chapters: Vec::new(),
            settings: Settings::default(),
            margins: None,
            front_matter: FrontMatter::default(),
            back_matter: BackMatter::default(),
            directives: LayoutDirectives::default(),
        }
    }
}

/// Everything derived from a project in one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct Typeset {
    pub margins: Margins,
    /// Estimated body page count the margins are based on
    pub estimated_pages: usize,
    /// Body estimate plus one page per enabled matter section; this is
    /// the count validation runs against
    pub validated_pages: usize,
    pub sections: Vec<RenderableSection>,
    pub pages: Vec<RenderedPage>,
    pub issues: Vec<ValidationIssue>,
    pub statistics: LayoutStatistics,
}

impl BookProject {
    /// Start a project from manuscript text.
    ///
    /// The title comes from the first line when it looks like one, else
    /// from `fallback_title` (usually the file name).
    pub fn from_manuscript(text: &str, fallback_title: &str, author: &str, year: i32) -> Self {
        let detected = extract_title_from_text(text);
        let title = if detected.is_empty() {
            fallback_title.to_string()
        } else {
            detected
        };

        Self {
            title,
            author: author.to_string(),
            year,
            raw_text: text.to_string(),
            chapters: split_into_chapters(text),
            settings: Settings::instant(),
            margins: None,
            front_matter: FrontMatter::with_defaults(author, year),
            back_matter: BackMatter::with_defaults(author),
            directives: LayoutDirectives::default(),
        }
    }

    /// Chapters used for layout.
    ///
    /// Segmentation ids are positional, so a project without an edited
    /// chapter list gets the same ids on every call.
    pub fn effective_chapters(&self) -> Vec<Chapter> {
        if self.chapters.is_empty() {
            split_into_chapters(&self.raw_text)
        } else {
            self.chapters.clone()
        }
    }

    /// Run the full pipeline: margins, sections, pages, validation.
    ///
    /// Recomputed from scratch on every call.
    pub fn typeset(&self) -> Typeset {
        let chapters = self.effective_chapters();
        let text = chapters_to_text(&chapters);

        let Bootstrap {
            margins,
            page_count,
        } = match self.margins {
            Some(margins) => Bootstrap {
                margins,
                page_count: estimate_page_count(&text, &self.settings, &margins),
            },
            None => bootstrap_layout(&text, &self.settings),
        };

        let front_matter = self.front_matter_for_layout();
        let sections = assemble_sections(
            &front_matter,
            &chapters,
            &self.back_matter,
            &self.title,
            &self.author,
        );
        let pages = render_pages(&sections, &self.settings, &margins, &self.directives);
        let validated_pages =
            page_count + front_matter.enabled_count() + self.back_matter.enabled_count();
        let issues = validate(&self.settings, validated_pages, &margins);
        let statistics = calculate_statistics(&pages);

        info!(
            "typeset {:?}: {} sections, {} pages (estimated {} + matter), {} issues",
            self.title,
            sections.len(),
            pages.len(),
            page_count,
            issues.len()
        );

        Typeset {
            margins,
            estimated_pages: page_count,
            validated_pages,
            sections,
            pages,
            issues,
            statistics,
        }
    }

    /// Front matter with a generated copyright notice when the enabled
    /// copyright page has no text of its own
    fn front_matter_for_layout(&self) -> FrontMatter {
        let mut front_matter = self.front_matter.clone();
        let copyright = &mut front_matter.copyright_page;
        if copyright.enabled && copyright.content.trim().is_empty() {
            copyright.content = copyright_notice(&self.author, self.year);
        }
        front_matter
    }

    /// Load a project from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let project = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Config(format!("Failed to parse project: {}", e)))?;
        Ok(project)
    }

    /// Save the project to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookError::Config(format!("Failed to serialize project: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
