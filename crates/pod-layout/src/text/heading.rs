//! Chapter heading detection and title sanitation
//!
//! Detection is a boolean OR over a fixed list of line signatures. Because
//! the signatures are only anchored at the start of the line, a detected
//! heading can drag a whole paragraph along with it; [`sanitize_title`]
//! bounds such titles and hands the rest back to the caller.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::MAX_TITLE_WORDS;

/// Heading signatures, tested against the trimmed line
static HEADING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^chapter\s+\d+",
        r"(?i)^chapter\s+[ivxlcdm]+",
        r"(?i)^ch\.\s*\d+",
        r"(?i)^part\s+\d+",
        r"(?i)^part\s+[ivxlcdm]+",
        r"(?i)^section\s+\d+",
        r"(?i)^prologue$",
        r"(?i)^epilogue$",
        r"(?i)^introduction$",
        r"(?i)^foreword$",
        r"(?i)^preface$",
        r"(?i)^afterword$",
        r"(?i)^appendix",
        r"(?i)^acknowledgments?$",
        r"(?i)^dedication$",
        r"^\d+\.\s+\S",
        r"^#\s+",
        r"^##\s+",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Structured "indicator + separator + short title + terminator" forms.
/// Group 1 is the title; the terminator stays with the overflow.
static SEPARATOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^(chapter\s+\d+[.:]\s*[^.!?\n]{0,50})[.!?\n]",
        r"(?i)^(chapter\s+[ivxlcdm]+[.:]\s*[^.!?\n]{0,50})[.!?\n]",
        r"(?i)^(part\s+\d+[.:]\s*[^.!?\n]{0,50})[.!?\n]",
        r"(?i)^(prologue[.:]\s*[^.!?\n]{0,50})[.!?\n]",
        r"(?i)^(epilogue[.:]\s*[^.!?\n]{0,50})[.!?\n]",
        r"(?i)^(\d+\.\s+[^.!?\n]{0,50})[.!?\n]",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static COLON_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]{5,60}):\s*(.+)$").unwrap());

static DASH_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^—–-]{5,60})[—–]\s*(.+)$").unwrap());

static SENTENCE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^.]{10,80}\.)\s+(.+)$").unwrap());

static INDICATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(chapter\s+\d+|chapter\s+[ivxlcdm]+|part\s+\d+|prologue|epilogue|\d+\.)")
        .unwrap()
});

static MARKDOWN_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());

/// Words kept after a recognized indicator in the indicator fallback
const INDICATOR_TAIL_WORDS: usize = 4;

/// Words kept by the last-resort fallback
const FALLBACK_TITLE_WORDS: usize = 6;

/// Returns true when the line looks like a chapter or section heading.
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    HEADING_PATTERNS.iter().any(|re| re.is_match(trimmed))
}

/// Turn a heading line into a raw title: trimmed, markdown markers removed
pub fn heading_title(line: &str) -> String {
    MARKDOWN_MARKER.replace(line.trim(), "").into_owned()
}

/// A bounded title and the text that was split off it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedTitle {
    pub title: String,
    /// Text to prepend to the chapter body; empty when nothing was split
    pub overflow: String,
}

impl SanitizedTitle {
    fn new(title: &str, overflow: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            overflow: overflow.trim().to_string(),
        }
    }
}

fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Bound an over-captured heading to a short title.
///
/// Titles of at most ten words are returned unchanged. Longer ones are cut
/// by the first strategy that succeeds, in this order: structured
/// "Chapter N: Title." forms, a colon prefix, a dash prefix, the first
/// sentence, a recognized indicator plus four words, and finally the first
/// six words. No text is dropped: everything after the title is returned
/// as overflow.
pub fn sanitize_title(raw_title: &str) -> SanitizedTitle {
    let trimmed = raw_title.trim();
    let words: Vec<&str> = trimmed.split_whitespace().collect();

    if words.len() <= MAX_TITLE_WORDS {
        return SanitizedTitle::new(trimmed, "");
    }

    for pattern in SEPARATOR_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(trimmed) {
            let title = caps[1].trim();
            if word_count(title) <= MAX_TITLE_WORDS {
                // Terminators are single ASCII bytes
                let overflow_start = caps[0].len() - 1;
                return SanitizedTitle::new(title, &trimmed[overflow_start..]);
            }
        }
    }

    for pattern in [&*COLON_TITLE, &*DASH_TITLE, &*SENTENCE_TITLE] {
        if let Some(caps) = pattern.captures(trimmed) {
            let title = caps[1].trim();
            if word_count(title) <= MAX_TITLE_WORDS {
                return SanitizedTitle::new(title, &caps[2]);
            }
        }
    }

    if let Some(indicator) = INDICATOR.find(trimmed) {
        let rest: Vec<&str> = trimmed[indicator.end()..].split_whitespace().collect();
        let keep = rest.len().min(INDICATOR_TAIL_WORDS);
        let title = format!("{} {}", indicator.as_str(), rest[..keep].join(" "));
        return SanitizedTitle::new(&title, &rest[keep..].join(" "));
    }

    SanitizedTitle::new(
        &words[..FALLBACK_TITLE_WORDS].join(" "),
        &words[FALLBACK_TITLE_WORDS..].join(" "),
    )
}

/// Guess a book title from the first line of a manuscript.
///
/// Returns an empty string when the first line does not look like a title
/// (too long, ends with a period, or is itself a chapter heading).
pub fn extract_title_from_text(text: &str) -> String {
    let first_line = text.trim().lines().next().unwrap_or("").trim();

    if !first_line.is_empty()
        && first_line.chars().count() < 100
        && !first_line.ends_with('.')
        && !first_line.starts_with("Chapter")
        && !first_line.starts_with("CHAPTER")
    {
        return MARKDOWN_MARKER.replace(first_line, "").into_owned();
    }

    String::new()
}
