//! Manuscript text handling
//!
//! - Heading detection and title sanitation
//! - Chapter segmentation and chapter editing

mod chapters;
mod heading;

pub use chapters::*;
pub use heading::*;
