//! Basic extraction backend: the `lopdf` crate.
//!
//! Decodes text operators straight out of each page's content stream. No
//! reading-order reconstruction, so multi-column output can interleave, but
//! it opens documents the rich backend chokes on and costs far less.

use lopdf::Document;
use tracing::debug;

use super::{PageExtractor, PageText};
use crate::error::ExtractionError;

/// [`PageExtractor`] backed by `lopdf::Document::extract_text`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicExtractor;

impl PageExtractor for BasicExtractor {
    fn backend(&self) -> &'static str {
        "lopdf"
    }

    fn description(&self) -> &'static str {
        "Basic content-stream text extraction using the lopdf crate"
    }

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, ExtractionError> {
        let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::OpenFailed {
            detail: e.to_string(),
        })?;

        if doc.is_encrypted() {
            return Err(ExtractionError::Encrypted);
        }

        // get_pages is keyed by 1-indexed page number in ascending order.
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::new();
        let mut last_decode_error = None;
        for page_num in page_numbers {
            match doc.extract_text(&[page_num]) {
                Ok(text) => pages.push(PageText {
                    number: page_num as usize,
                    text,
                }),
                Err(e) => {
                    // One undecodable page does not sink the document.
                    debug!(page = page_num, error = %e, "skipping undecodable page");
                    last_decode_error = Some(e.to_string());
                }
            }
        }

        if pages.is_empty() {
            if let Some(detail) = last_decode_error {
                return Err(ExtractionError::TextExtraction { detail });
            }
        }

        Ok(pages)
    }

    fn count_pages(&self, bytes: &[u8]) -> usize {
        Document::load_mem(bytes)
            .map(|doc| doc.get_pages().len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_softly() {
        let err = BasicExtractor.extract_pages(b"not a pdf at all");
        assert!(matches!(err, Err(ExtractionError::OpenFailed { .. })));
    }

    #[test]
    fn empty_input_fails_softly() {
        assert!(BasicExtractor.extract_pages(b"").is_err());
    }

    #[test]
    fn count_pages_never_fails() {
        assert_eq!(BasicExtractor.count_pages(b""), 0);
        assert_eq!(BasicExtractor.count_pages(b"%PDF-1.7 truncated"), 0);
    }
}
