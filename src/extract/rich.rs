//! Rich extraction backend: the `pdf-extract` crate.
//!
//! `pdf-extract` reconstructs reading order from glyph positions and core
//! font metrics, which makes it the preferred in-process backend. It is also
//! the stricter of the two — documents with exotic encodings or damaged
//! font dictionaries fail here and fall through to the basic backend.

use tracing::debug;

use super::{PageExtractor, PageText};
use crate::error::ExtractionError;

/// [`PageExtractor`] backed by `pdf_extract::extract_text_from_mem_by_pages`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RichExtractor;

impl PageExtractor for RichExtractor {
    fn backend(&self) -> &'static str {
        "pdf-extract"
    }

    fn description(&self) -> &'static str {
        "Rich text extraction using the pdf-extract crate"
    }

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError::classify(e.to_string()))?;

        debug!(pages = pages.len(), "pdf-extract yielded page texts");

        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(idx, text)| PageText {
                number: idx + 1,
                text,
            })
            .collect())
    }

    fn count_pages(&self, bytes: &[u8]) -> usize {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map(|pages| pages.len())
            .unwrap_or(0)
    }
}
