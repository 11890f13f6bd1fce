use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("DOCX archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unsupported manuscript format: {0}")]
    UnsupportedFormat(String),
    #[error("No text could be extracted from the document")]
    EmptyDocument,
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BookError>;

/// Publisher-approved trim sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrimSize {
    #[cfg_attr(feature = "serde", serde(rename = "5x8"))]
    W5H8,
    #[cfg_attr(feature = "serde", serde(rename = "5.25x8"))]
    W525H8,
    #[cfg_attr(feature = "serde", serde(rename = "5.5x8.5"))]
    W55H85,
    /// The most common size for fiction and non-fiction
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "6x9"))]
    W6H9,
    #[cfg_attr(feature = "serde", serde(rename = "6.14x9.21"))]
    W614H921,
    #[cfg_attr(feature = "serde", serde(rename = "6.69x9.61"))]
    W669H961,
    #[cfg_attr(feature = "serde", serde(rename = "7x10"))]
    W7H10,
    #[cfg_attr(feature = "serde", serde(rename = "7.44x9.69"))]
    W744H969,
    #[cfg_attr(feature = "serde", serde(rename = "7.5x9.25"))]
    W75H925,
    #[cfg_attr(feature = "serde", serde(rename = "8x10"))]
    W8H10,
    #[cfg_attr(feature = "serde", serde(rename = "8.25x6"))]
    W825H6,
    #[cfg_attr(feature = "serde", serde(rename = "8.25x8.25"))]
    W825H825,
    #[cfg_attr(feature = "serde", serde(rename = "8.5x8.5"))]
    W85H85,
    #[cfg_attr(feature = "serde", serde(rename = "8.5x11"))]
    W85H11,
}

impl TrimSize {
    /// The full catalog, in display order
    pub const ALL: [TrimSize; 14] = [
        TrimSize::W5H8,
        TrimSize::W525H8,
        TrimSize::W55H85,
        TrimSize::W6H9,
        TrimSize::W614H921,
        TrimSize::W669H961,
        TrimSize::W7H10,
        TrimSize::W744H969,
        TrimSize::W75H925,
        TrimSize::W8H10,
        TrimSize::W825H6,
        TrimSize::W825H825,
        TrimSize::W85H85,
        TrimSize::W85H11,
    ];

    /// Width and height in inches
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            TrimSize::W5H8 => (5.0, 8.0),
            TrimSize::W525H8 => (5.25, 8.0),
            TrimSize::W55H85 => (5.5, 8.5),
            TrimSize::W6H9 => (6.0, 9.0),
            TrimSize::W614H921 => (6.14, 9.21),
            TrimSize::W669H961 => (6.69, 9.61),
            TrimSize::W7H10 => (7.0, 10.0),
            TrimSize::W744H969 => (7.44, 9.69),
            TrimSize::W75H925 => (7.5, 9.25),
            TrimSize::W8H10 => (8.0, 10.0),
            TrimSize::W825H6 => (8.25, 6.0),
            TrimSize::W825H825 => (8.25, 8.25),
            TrimSize::W85H85 => (8.5, 8.5),
            TrimSize::W85H11 => (8.5, 11.0),
        }
    }

    pub fn width_in(self) -> f64 {
        self.dimensions_in().0
    }

    pub fn height_in(self) -> f64 {
        self.dimensions_in().1
    }

    pub fn label(self) -> &'static str {
        match self {
            TrimSize::W5H8 => "5\" × 8\"",
            TrimSize::W525H8 => "5.25\" × 8\"",
            TrimSize::W55H85 => "5.5\" × 8.5\"",
            TrimSize::W6H9 => "6\" × 9\"",
            TrimSize::W614H921 => "6.14\" × 9.21\"",
            TrimSize::W669H961 => "6.69\" × 9.61\"",
            TrimSize::W7H10 => "7\" × 10\"",
            TrimSize::W744H969 => "7.44\" × 9.69\"",
            TrimSize::W75H925 => "7.5\" × 9.25\"",
            TrimSize::W8H10 => "8\" × 10\"",
            TrimSize::W825H6 => "8.25\" × 6\"",
            TrimSize::W825H825 => "8.25\" × 8.25\"",
            TrimSize::W85H85 => "8.5\" × 8.5\"",
            TrimSize::W85H11 => "8.5\" × 11\"",
        }
    }

    /// Look up a catalog size by its dimensions, e.g. "6x9" or "6.14x9.21"
    pub fn from_dimensions(spec: &str) -> Option<TrimSize> {
        let (w, h) = spec.trim().split_once(['x', 'X', '×'])?;
        let w: f64 = w.trim().trim_end_matches('"').parse().ok()?;
        let h: f64 = h.trim().trim_end_matches('"').parse().ok()?;
        TrimSize::ALL.into_iter().find(|size| {
            let (sw, sh) = size.dimensions_in();
            (sw - w).abs() < 1e-9 && (sh - h).abs() < 1e-9
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PaperColor {
    #[default]
    White,
    Cream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FontFamily {
    #[default]
    Serif,
    SansSerif,
    Monospace,
}

/// Print settings that drive every geometric computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    pub trim_size: TrimSize,
    pub bleed: bool,
    pub paper_color: PaperColor,
    /// Body font size in points
    pub font_size: f64,
    /// Line height as a multiple of the font size
    pub line_height: f64,
    pub font_family: FontFamily,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trim_size: TrimSize::W6H9,
            bleed: false,
            paper_color: PaperColor::White,
            font_size: 11.0,
            line_height: 1.5,
            font_family: FontFamily::Serif,
        }
    }
}

impl Settings {
    /// Quick-publish preset: the defaults on cream paper
    pub fn instant() -> Self {
        Self {
            paper_color: PaperColor::Cream,
            ..Self::default()
        }
    }
}

/// Page margins in inches.
///
/// `inside` is the gutter (spine side) and `outside` the fore edge; which
/// one ends up on the left depends on the page side, see
/// [`Margins::horizontal_for`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub inside: f64,
    pub outside: f64,
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_in: f64) -> Self {
        Self {
            top: margin_in,
            bottom: margin_in,
            inside: margin_in,
            outside: margin_in,
        }
    }

    /// (left, right) margins in inches for a page on the given side.
    ///
    /// The spine is left of a recto page and right of a verso page.
    pub fn horizontal_for(&self, side: PageSide) -> (f64, f64) {
        match side {
            PageSide::Recto => (self.inside, self.outside),
            PageSide::Verso => (self.outside, self.inside),
        }
    }
}

/// Which side of a bound book a page appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PageSide {
    /// Right-hand page (odd page numbers)
    Recto,
    /// Left-hand page (even page numbers)
    Verso,
}

impl PageSide {
    /// Side of a 1-based page number
    pub fn of(page_number: usize) -> Self {
        if page_number % 2 == 1 {
            PageSide::Recto
        } else {
            PageSide::Verso
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HeadingAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChapterStyle {
    pub heading_alignment: HeadingAlignment,
}

/// Kind of a renderable section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SectionKind {
    TitlePage,
    CopyrightPage,
    Dedication,
    Chapter,
    AboutAuthor,
    AlsoBy,
    Acknowledgments,
    BlankPage,
}

impl SectionKind {
    /// Front matter kinds are laid out as exactly one page each
    pub fn is_front_matter(self) -> bool {
        matches!(
            self,
            SectionKind::TitlePage | SectionKind::CopyrightPage | SectionKind::Dedication
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::TitlePage => "title-page",
            SectionKind::CopyrightPage => "copyright-page",
            SectionKind::Dedication => "dedication",
            SectionKind::Chapter => "chapter",
            SectionKind::AboutAuthor => "about-author",
            SectionKind::AlsoBy => "also-by",
            SectionKind::Acknowledgments => "acknowledgments",
            SectionKind::BlankPage => "blank-page",
        }
    }
}

/// The normalized unit consumed by the pagination engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenderableSection {
    pub id: String,
    pub kind: SectionKind,
    pub title: String,
    pub content: String,
    /// Opaque rich representation, passed through to renderers untouched
    pub rich_content: Option<String>,
    pub style: Option<ChapterStyle>,
    pub show_page_number: bool,
}
