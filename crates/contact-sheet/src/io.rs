//! Source document loading

use crate::constants::MAX_UPLOAD_BYTES;
use crate::layout::{DocumentId, PageRef};
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// A loaded source PDF
///
/// Only the metadata pagination needs is kept; rendering goes through a
/// [`PageRenderer`](crate::export::PageRenderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub id: DocumentId,
    /// Original file name, used when naming exported sheets
    pub name: String,
    pub page_count: usize,
    pub byte_len: usize,
}

impl SourceDocument {
    /// All pages of this document in order
    pub fn page_refs(&self) -> impl Iterator<Item = PageRef> + '_ {
        (1..=self.page_count).map(|page| PageRef::new(self.id, page))
    }
}

/// Parse a PDF from memory.
///
/// Input over [`MAX_UPLOAD_BYTES`] is rejected before parsing.
pub fn load_pdf_bytes(id: DocumentId, name: impl Into<String>, bytes: &[u8]) -> Result<SourceDocument> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ContactSheetError::FileTooLarge {
            size: bytes.len() as u64,
            limit: MAX_UPLOAD_BYTES as u64,
        });
    }

    let doc = Document::load_mem(bytes)?;
    let source = SourceDocument {
        id,
        name: name.into(),
        page_count: doc.get_pages().len(),
        byte_len: bytes.len(),
    };
    log::info!(
        "loaded {} ({} pages, {} bytes)",
        source.name,
        source.page_count,
        source.byte_len
    );
    Ok(source)
}

/// Load a single PDF document
pub async fn load_pdf(id: DocumentId, path: impl AsRef<Path>) -> Result<SourceDocument> {
    let path = path.as_ref().to_owned();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let metadata = tokio::fs::metadata(&path).await?;
    if metadata.len() > MAX_UPLOAD_BYTES as u64 {
        return Err(ContactSheetError::FileTooLarge {
            size: metadata.len(),
            limit: MAX_UPLOAD_BYTES as u64,
        });
    }

    let bytes = tokio::fs::read(&path).await?;
    tokio::task::spawn_blocking(move || load_pdf_bytes(id, name, &bytes)).await?
}

/// Load multiple PDF documents, numbering them in the given order
pub async fn load_multiple_pdfs(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceDocument>> {
    let mut documents = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        documents.push(load_pdf(DocumentId(i as u64), path).await?);
    }
    Ok(documents)
}

/// Flatten every page of every document, in upload order
pub fn extract_page_refs(documents: &[SourceDocument]) -> Vec<PageRef> {
    documents.iter().flat_map(|doc| doc.page_refs()).collect()
}
