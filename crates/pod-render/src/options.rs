use pod_layout::FontFamily;
use printpdf::BuiltinFont;

#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Document title stored in the PDF metadata
    pub title: String,
    /// Append a trailing blank page when the page count is odd
    pub pad_to_even: bool,
    /// Size of printed page numbers in points
    pub page_number_size_pt: f64,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            pad_to_even: true,
            page_number_size_pt: 9.0,
        }
    }
}

impl PdfOptions {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// The builtin PDF fonts used for one font family
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSet {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
    pub italic: BuiltinFont,
}

impl FontSet {
    pub fn for_family(family: FontFamily) -> Self {
        match family {
            FontFamily::Serif => Self {
                regular: BuiltinFont::TimesRoman,
                bold: BuiltinFont::TimesBold,
                italic: BuiltinFont::TimesItalic,
            },
            FontFamily::SansSerif => Self {
                regular: BuiltinFont::Helvetica,
                bold: BuiltinFont::HelveticaBold,
                italic: BuiltinFont::HelveticaOblique,
            },
            FontFamily::Monospace => Self {
                regular: BuiltinFont::Courier,
                bold: BuiltinFont::CourierBold,
                italic: BuiltinFont::CourierOblique,
            },
        }
    }
}
