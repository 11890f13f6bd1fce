mod frame;
mod options;
mod pdf;
mod preview;
mod style;
mod types;

pub use frame::{PageFrame, estimate_text_width};
pub use options::{FontSet, PdfOptions};
pub use pdf::{build_document, generate_pdf, generate_pdf_bytes};
pub use preview::{render_page, render_preview};
pub use style::{LineStyle, Weight, line_style};
pub use types::*;
