//! Publisher rule checks
//!
//! Validation never blocks anything: it returns a list of issues for the
//! caller to display or gate on.

use std::fmt;

use crate::constants::*;
use crate::geometry::{min_margins, text_block_size};
use crate::types::{Margins, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IssueCategory {
    Margins,
    PageCount,
    Bleed,
    Content,
    Trim,
}

impl IssueCategory {
    pub fn name(self) -> &'static str {
        match self {
            IssueCategory::Margins => "margins",
            IssueCategory::PageCount => "page-count",
            IssueCategory::Bleed => "bleed",
            IssueCategory::Content => "content",
            IssueCategory::Trim => "trim",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationIssue {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
}

impl ValidationIssue {
    fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{severity} [{}]: {}", self.category.name(), self.message)
    }
}

/// Check settings, margins and page count against publisher rules.
///
/// Every check is independent; the order only affects display.
pub fn validate(settings: &Settings, page_count: usize, margins: &Margins) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let min = min_margins(page_count, settings.bleed);

    if page_count < MIN_PAGE_COUNT {
        issues.push(ValidationIssue::error(
            IssueCategory::PageCount,
            format!("Page count is {page_count}. A minimum of {MIN_PAGE_COUNT} pages is required."),
        ));
    }
    if page_count > MAX_PAGE_COUNT {
        issues.push(ValidationIssue::error(
            IssueCategory::PageCount,
            format!("Page count is {page_count}. A maximum of {MAX_PAGE_COUNT} pages is allowed."),
        ));
    }
    if page_count % 2 != 0 {
        issues.push(ValidationIssue::warning(
            IssueCategory::PageCount,
            "Page count should be even for a properly bound book.",
        ));
    }

    let margin_checks = [
        ("Top margin", margins.top, min.top),
        ("Bottom margin", margins.bottom, min.bottom),
        ("Inside margin/gutter", margins.inside, min.inside),
        ("Outside margin", margins.outside, min.outside),
    ];
    for (name, actual, minimum) in margin_checks {
        if actual < minimum {
            let mut message = format!("{name} ({actual}\") is below the minimum ({minimum}\")");
            if name.starts_with("Inside") {
                message.push_str(&format!(" for {page_count} pages"));
            }
            message.push('.');
            issues.push(ValidationIssue::error(IssueCategory::Margins, message));
        }
    }

    let block = text_block_size(settings.trim_size, margins);

    if settings.bleed {
        if block.width < MIN_BLEED_TEXT_BLOCK_IN || block.height < MIN_BLEED_TEXT_BLOCK_IN {
            issues.push(ValidationIssue::error(
                IssueCategory::Bleed,
                "Text area is too small with current bleed margins.",
            ));
        }
        issues.push(ValidationIssue::warning(
            IssueCategory::Bleed,
            format!(
                "Bleed is enabled. Ensure any images or backgrounds extend {BLEED_IN}\" beyond trim edges."
            ),
        ));
    }

    if page_count == 0 {
        issues.push(ValidationIssue::warning(
            IssueCategory::Content,
            "No content detected. Add your book text to begin.",
        ));
    }

    if block.width < NARROW_TEXT_BLOCK_IN {
        issues.push(ValidationIssue::warning(
            IssueCategory::Margins,
            "Text area width is very narrow. Consider reducing margins or choosing a wider trim size.",
        ));
    }

    issues
}
