//! Extraction-backed strategy: one [`PageExtractor`] + the text formatter.
//!
//! The strategy owns exactly one backend; ordering between strategies is the
//! manager's concern. Per page with non-empty text it emits a page-boundary
//! heading, the formatted text, and a horizontal separator:
//!
//! ```text
//! ## Page 1
//!
//! ### INTRODUCTION
//!
//! body text
//!
//! ---
//! ```
//!
//! Extraction failures and empty documents are soft-fails — the strategy
//! reports "no usable content" and the manager advances — never hard errors.

use tracing::{debug, info};

use super::{ConversionStrategy, StrategyOutcome};
use crate::error::ConvertError;
use crate::extract::PageExtractor;
use crate::format::format_page;
use crate::output::ConversionResult;
use crate::postprocess::tidy_markdown;

/// [`ConversionStrategy`] wrapping a single extraction backend.
pub struct ExtractionStrategy<E: PageExtractor> {
    extractor: E,
}

impl<E: PageExtractor> ExtractionStrategy<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }
}

impl<E: PageExtractor> ConversionStrategy for ExtractionStrategy<E> {
    fn name(&self) -> &str {
        self.extractor.backend()
    }

    fn description(&self) -> &str {
        self.extractor.description()
    }

    // Constructed only when its backend crate is compiled in, so the
    // availability probe is the build itself.
    fn is_available(&self) -> bool {
        true
    }

    fn convert(&self, bytes: &[u8], filename: &str) -> Result<StrategyOutcome, ConvertError> {
        let pages = match self.extractor.extract_pages(bytes) {
            Ok(pages) => pages,
            Err(e) => {
                info!(strategy = self.name(), error = %e, "extraction failed, no usable content");
                return Ok(StrategyOutcome::NoContent);
            }
        };

        let mut body = String::new();
        let mut pages_with_text = 0usize;

        for page in &pages {
            let formatted = format_page(&page.text);
            if formatted.is_empty() {
                debug!(strategy = self.name(), page = page.number, "page has no text");
                continue;
            }
            body.push_str(&format!("## Page {}\n\n", page.number));
            body.push_str(&formatted);
            body.push_str("\n\n---\n\n");
            pages_with_text += 1;
        }

        if pages_with_text == 0 {
            info!(strategy = self.name(), "document yielded no pages with text");
            return Ok(StrategyOutcome::NoContent);
        }

        let page_count = self.extractor.count_pages(bytes);
        debug!(
            strategy = self.name(),
            pages_with_text,
            page_count,
            "assembled markdown document"
        );

        Ok(StrategyOutcome::Converted(ConversionResult::real(
            filename,
            tidy_markdown(&body),
            self.name(),
            page_count,
            bytes.len(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::extract::PageText;
    use crate::output::ConversionMode;

    /// Scripted extractor so the strategy logic is testable without PDFs.
    struct FakeExtractor {
        pages: Result<Vec<PageText>, ExtractionError>,
        count: usize,
    }

    impl PageExtractor for FakeExtractor {
        fn backend(&self) -> &'static str {
            "fake"
        }
        fn description(&self) -> &'static str {
            "scripted extractor for tests"
        }
        fn extract_pages(&self, _bytes: &[u8]) -> Result<Vec<PageText>, ExtractionError> {
            self.pages.clone()
        }
        fn count_pages(&self, _bytes: &[u8]) -> usize {
            self.count
        }
    }

    fn page(number: usize, text: &str) -> PageText {
        PageText {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn emits_one_block_per_page_in_order() {
        let strategy = ExtractionStrategy::new(FakeExtractor {
            pages: Ok(vec![page(1, "alpha"), page(2, "beta"), page(3, "gamma")]),
            count: 3,
        });

        let outcome = strategy.convert(b"%PDF", "doc.pdf").unwrap();
        let StrategyOutcome::Converted(result) = outcome else {
            panic!("expected a converted result");
        };

        assert_eq!(result.mode, ConversionMode::Real);
        assert_eq!(result.strategy_used, "fake");
        assert_eq!(result.page_count, 3);

        let md = result.markdown.unwrap();
        assert_eq!(md.matches("## Page ").count(), 3);
        let p1 = md.find("## Page 1").unwrap();
        let p2 = md.find("## Page 2").unwrap();
        let p3 = md.find("## Page 3").unwrap();
        assert!(p1 < p2 && p2 < p3, "pages out of order:\n{md}");
        assert!(md.contains("alpha"));
        assert!(md.ends_with('\n'));
    }

    #[test]
    fn blank_pages_are_skipped_without_renumbering() {
        let strategy = ExtractionStrategy::new(FakeExtractor {
            pages: Ok(vec![page(1, "alpha"), page(2, "   \n  "), page(3, "gamma")]),
            count: 3,
        });

        let StrategyOutcome::Converted(result) =
            strategy.convert(b"%PDF", "doc.pdf").unwrap()
        else {
            panic!("expected a converted result");
        };

        let md = result.markdown.unwrap();
        assert_eq!(md.matches("## Page ").count(), 2);
        assert!(!md.contains("## Page 2"));
        assert!(md.contains("## Page 3"));
    }

    #[test]
    fn extraction_failure_is_soft() {
        let strategy = ExtractionStrategy::new(FakeExtractor {
            pages: Err(ExtractionError::Encrypted),
            count: 0,
        });

        let outcome = strategy.convert(b"%PDF", "doc.pdf").unwrap();
        assert!(matches!(outcome, StrategyOutcome::NoContent));
    }

    #[test]
    fn empty_document_is_soft() {
        let strategy = ExtractionStrategy::new(FakeExtractor {
            pages: Ok(vec![]),
            count: 0,
        });

        let outcome = strategy.convert(b"%PDF", "doc.pdf").unwrap();
        assert!(matches!(outcome, StrategyOutcome::NoContent));
    }

    #[test]
    fn heading_heuristic_flows_through() {
        let strategy = ExtractionStrategy::new(FakeExtractor {
            pages: Ok(vec![page(1, "TOTAL:\nthis is body text.")]),
            count: 1,
        });

        let StrategyOutcome::Converted(result) =
            strategy.convert(b"%PDF", "doc.pdf").unwrap()
        else {
            panic!("expected a converted result");
        };

        let md = result.markdown.unwrap();
        assert!(md.contains("### TOTAL:"));
        assert!(md.contains("this is body text."));
        assert!(!md.contains("### this is body text."));
    }
}
