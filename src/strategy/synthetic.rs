//! Synthetic fallback strategy: the terminal, cannot-fail path.
//!
//! Produces a fixed-template placeholder document describing the input
//! (filename, byte size, best-effort page count) instead of actual content.
//! It has no extraction dependency, is always available, and never fails —
//! registering it last guarantees the manager can produce a result for any
//! input whatsoever.

use tracing::info;

use super::{ConversionStrategy, StrategyOutcome};
use crate::error::ConvertError;
use crate::extract::count_pages_best_effort;
use crate::output::ConversionResult;

/// Strategy name recorded in results produced by the placeholder path.
pub const SYNTHETIC_NAME: &str = "synthetic";

const FALLBACK_NOTE: &str =
    "Enable the `rich` (pdf-extract) or `basic` (lopdf) feature for real text extraction";

/// The terminal [`ConversionStrategy`]; see the module docs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticStrategy;

impl SyntheticStrategy {
    fn render(filename: &str, size_bytes: usize, page_count: usize) -> String {
        format!(
            "# {filename}\n\
             \n\
             ### Document information:\n\
             \n\
             - Name: {filename}\n\
             - Size: {size_bytes} bytes\n\
             - Pages: {page_count}\n\
             \n\
             ### Note:\n\
             \n\
             This file was processed without a real extraction backend, so its\n\
             text content is not included. {FALLBACK_NOTE}.\n\
             \n\
             ---\n\
             \n\
             *Produced by the synthetic fallback strategy*\n"
        )
    }
}

impl ConversionStrategy for SyntheticStrategy {
    fn name(&self) -> &str {
        SYNTHETIC_NAME
    }

    fn description(&self) -> &str {
        "Placeholder document describing the input; no extraction dependency"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn is_synthetic(&self) -> bool {
        true
    }

    fn convert(&self, bytes: &[u8], filename: &str) -> Result<StrategyOutcome, ConvertError> {
        info!(filename, size = bytes.len(), "producing synthetic placeholder document");

        // Page counting is cosmetic; 0 is fine when it fails or no backend
        // is compiled in.
        let page_count = count_pages_best_effort(bytes);

        Ok(StrategyOutcome::Converted(ConversionResult::fallback(
            filename,
            Self::render(filename, bytes.len(), page_count),
            SYNTHETIC_NAME,
            page_count,
            bytes.len(),
            FALLBACK_NOTE,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ConversionMode;

    #[test]
    fn always_succeeds_on_empty_input() {
        let outcome = SyntheticStrategy.convert(b"", "empty.pdf").unwrap();
        let StrategyOutcome::Converted(result) = outcome else {
            panic!("synthetic must always convert");
        };
        assert!(result.success);
        assert_eq!(result.mode, ConversionMode::Fallback);
        assert_eq!(result.size_bytes, 0);
    }

    #[test]
    fn template_embeds_filename_and_size() {
        let bytes = vec![0u8; 345];
        let StrategyOutcome::Converted(result) =
            SyntheticStrategy.convert(&bytes, "report.pdf").unwrap()
        else {
            panic!("synthetic must always convert");
        };

        let md = result.markdown.unwrap();
        assert!(md.contains("report.pdf"));
        assert!(md.contains("345 bytes"));
        assert!(result.note.is_some());
    }

    #[test]
    fn garbage_input_is_fine() {
        let outcome = SyntheticStrategy
            .convert(b"\xde\xad\xbe\xef not a pdf", "junk.pdf")
            .unwrap();
        assert!(matches!(outcome, StrategyOutcome::Converted(_)));
    }
}
