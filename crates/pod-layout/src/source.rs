//! Manuscript loading

use std::io::{Cursor, Read};
use std::path::Path;

use log::{debug, info};
use lopdf::Document;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::types::*;

/// Body part of a Word document
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

/// Read a manuscript file into plain text.
///
/// `.txt` and `.md` files are read as UTF-8; an empty file is valid and
/// yields no chapters. For `.docx` files the raw text of every paragraph is
/// extracted. For `.pdf` files the text of each page is extracted and pages
/// are joined by a blank line. A document without any extractable text is
/// an error, usually a scanned PDF.
pub async fn load_manuscript(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = match extension.as_str() {
        "txt" | "md" | "markdown" => tokio::fs::read_to_string(path).await?,
        "docx" => {
            let bytes = tokio::fs::read(path).await?;
            let text = tokio::task::spawn_blocking(move || extract_docx_text(&bytes)).await??;
            non_empty(text)?
        }
        "pdf" => {
            let bytes = tokio::fs::read(path).await?;
            let text = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes)).await??;
            non_empty(text)?
        }
        other => {
            return Err(BookError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                format!(".{other}")
            }));
        }
    };

    info!(
        "loaded manuscript {} ({} words)",
        path.display(),
        text.split_whitespace().count()
    );
    Ok(text)
}

fn non_empty(text: String) -> Result<String> {
    if text.trim().is_empty() {
        Err(BookError::EmptyDocument)
    } else {
        Ok(text)
    }
}

/// Extract the text of every page of a PDF, in page order
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes)?;
    let mut pages = Vec::new();

    for page_number in doc.get_pages().keys() {
        let text = doc.extract_text(&[*page_number])?;
        debug!("page {}: {} chars extracted", page_number, text.len());
        let text = text.trim();
        if !text.is_empty() {
            pages.push(text.to_string());
        }
    }

    Ok(pages.join("\n\n"))
}

/// Extract the raw text of a Word document.
///
/// Each `w:p` paragraph becomes one paragraph of the manuscript, separated
/// by a blank line. Tabs and line breaks inside a paragraph are kept;
/// formatting is dropped.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_DOCUMENT_PART)?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"t" => in_text = true,
                    b"p" => current.clear(),
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"tab" => current.push('\t'),
                    b"br" | b"cr" => current.push('\n'),
                    b"p" => paragraphs.push(String::new()),
                    _ => {}
                }
            }
            Ok(Event::Text(e)) if in_text => {
                current.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::GeneralRef(e)) if in_text => {
                let entity = String::from_utf8_lossy(e.as_ref());
                if let Some(resolved) = resolve_entity(&entity) {
                    current.push_str(&resolved);
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"t" => in_text = false,
                    b"p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
    }

    debug!("docx: {} paragraphs extracted", paragraphs.len());
    Ok(paragraphs.join("\n\n").trim().to_string())
}

fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        entity.strip_prefix('#')?.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"w:p"), b"p");
        assert_eq!(local_name(b"p"), b"p");
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("amp").as_deref(), Some("&"));
        assert_eq!(resolve_entity("#x2014").as_deref(), Some("\u{2014}"));
        assert_eq!(resolve_entity("#39").as_deref(), Some("'"));
        assert_eq!(resolve_entity("nbsp"), None);
    }
}
