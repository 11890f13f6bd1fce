//! Shared constants for book interior layout
//!
//! This module centralizes the publisher rules and typographic
//! approximations used by geometry, pagination and validation.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

// =============================================================================
// Typography
// =============================================================================

/// Average glyph width as a fraction of the font size.
///
/// Used for characters-per-line everywhere (estimator, pagination engine,
/// renderers) so that all consumers agree on line breaks.
pub const GLYPH_WIDTH_RATIO: f64 = 0.48;

// =============================================================================
// Publisher Page Count Rules
// =============================================================================

/// Minimum printable page count
pub const MIN_PAGE_COUNT: usize = 24;

/// Maximum printable page count
pub const MAX_PAGE_COUNT: usize = 828;

/// Gutter steps: (maximum page count, minimum inside margin in inches).
/// Books thicker than the last step use [`MAX_GUTTER_IN`].
pub const GUTTER_STEPS: [(usize, f64); 4] = [(150, 0.375), (300, 0.5), (500, 0.625), (700, 0.75)];

/// Minimum gutter for books above 700 pages
pub const MAX_GUTTER_IN: f64 = 0.875;

// =============================================================================
// Margins
// =============================================================================

/// Minimum top/bottom/outside margin without bleed
pub const MIN_EDGE_MARGIN_IN: f64 = 0.25;

/// Minimum top/bottom/outside margin with bleed
pub const MIN_EDGE_MARGIN_BLEED_IN: f64 = 0.375;

/// Floor for recommended top/bottom/outside margins
pub const RECOMMENDED_EDGE_MARGIN_IN: f64 = 0.5;

/// Extra gutter added on top of the minimum for recommended margins
pub const RECOMMENDED_EXTRA_GUTTER_IN: f64 = 0.125;

/// Uniform placeholder margin used for the first estimation pass
pub const PLACEHOLDER_MARGIN_IN: f64 = 0.5;

// =============================================================================
// Bleed
// =============================================================================

/// Bleed added beyond each trimmed edge
pub const BLEED_IN: f64 = 0.125;

// =============================================================================
// Validation
// =============================================================================

/// With bleed, the text block must be at least this wide and tall
pub const MIN_BLEED_TEXT_BLOCK_IN: f64 = 1.0;

/// Text blocks narrower than this trigger a usability warning
pub const NARROW_TEXT_BLOCK_IN: f64 = 2.0;

// =============================================================================
// Chapter Detection
// =============================================================================

/// Detected headings longer than this many words are sanitized
pub const MAX_TITLE_WORDS: usize = 10;
