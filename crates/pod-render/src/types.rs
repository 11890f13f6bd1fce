use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Nothing to render: the layout produced no pages")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Horizontal placement of a line inside the text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}
