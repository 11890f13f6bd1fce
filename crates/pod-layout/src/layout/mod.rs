//! Pagination of renderable sections into physical pages
//!
//! This module holds the single pagination engine shared by every renderer:
//! - Page and line types produced by pagination
//! - Greedy word wrapping and page filling
//! - Section-kind-specific page layout, blank page insertion

mod paginate;
mod types;
mod wrap;

pub use paginate::*;
pub use types::*;
pub use wrap::wrap_paragraph;
