//! Full-fidelity strategy: the native pdfium engine.
//!
//! pdfium is the only backend with a genuine runtime dependency — a shared
//! library that may simply not be installed. Availability is therefore
//! probed exactly once, at manager construction, by attempting to bind the
//! system library; a failed probe leaves the strategy registered but
//! permanently unavailable, with the bind error kept for status reporting.
//!
//! pdfium requires a file-system path — it cannot stream from a byte
//! buffer. Each call stages the payload into a uniquely named
//! `tempfile::NamedTempFile`, whose drop deletes the file on every exit
//! path: success, extraction error, and panic.

use std::io::Write;

use pdfium_render::prelude::*;
use tracing::{debug, info, warn};

use super::{ConversionStrategy, StrategyOutcome};
use crate::error::ConvertError;
use crate::format::format_page;
use crate::output::ConversionResult;
use crate::postprocess::tidy_markdown;

/// [`ConversionStrategy`] backed by the native pdfium library.
pub struct PdfiumStrategy {
    available: bool,
    probe_error: Option<String>,
}

impl PdfiumStrategy {
    /// Probe the system pdfium library once; the result is fixed for the
    /// process lifetime.
    pub fn probe() -> Self {
        match Pdfium::bind_to_system_library() {
            Ok(_) => {
                info!("pdfium library bound, full-fidelity strategy available");
                Self {
                    available: true,
                    probe_error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "pdfium library not found, full-fidelity strategy unavailable");
                Self {
                    available: false,
                    probe_error: Some(e.to_string()),
                }
            }
        }
    }

    /// Convert the staged document at `path`.
    ///
    /// pdfium keeps thread-local state, so a fresh binding per call is the
    /// reentrancy-safe arrangement.
    fn convert_staged(
        &self,
        path: &std::path::Path,
        bytes: &[u8],
        filename: &str,
    ) -> Result<StrategyOutcome, ConvertError> {
        let bindings =
            Pdfium::bind_to_system_library().map_err(|e| ConvertError::DependencyUnavailable {
                backend: self.name().to_string(),
                reason: e.to_string(),
            })?;
        let pdfium = Pdfium::new(bindings);

        let document = match pdfium.load_pdf_from_file(path, None) {
            Ok(doc) => doc,
            Err(e) => {
                info!(strategy = self.name(), error = %e, "pdfium could not open document");
                return Ok(StrategyOutcome::NoContent);
            }
        };

        let pages = document.pages();
        let page_count = pages.len() as usize;
        let mut body = String::new();
        let mut pages_with_text = 0usize;

        for (idx, page) in pages.iter().enumerate() {
            let text = match page.text() {
                Ok(text) => text.all(),
                Err(e) => {
                    debug!(strategy = self.name(), page = idx + 1, error = %e, "no text layer");
                    continue;
                }
            };
            let formatted = format_page(&text);
            if formatted.is_empty() {
                continue;
            }
            body.push_str(&format!("## Page {}\n\n", idx + 1));
            body.push_str(&formatted);
            body.push_str("\n\n---\n\n");
            pages_with_text += 1;
        }

        if pages_with_text == 0 {
            info!(strategy = self.name(), "document yielded no pages with text");
            return Ok(StrategyOutcome::NoContent);
        }

        Ok(StrategyOutcome::Converted(ConversionResult::real(
            filename,
            tidy_markdown(&body),
            self.name(),
            page_count,
            bytes.len(),
        )))
    }
}

impl ConversionStrategy for PdfiumStrategy {
    fn name(&self) -> &str {
        "pdfium"
    }

    fn description(&self) -> &str {
        "Full-fidelity extraction using the native pdfium engine"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn last_error(&self) -> Option<String> {
        self.probe_error.clone()
    }

    fn recommendations(&self) -> Vec<String> {
        if self.available {
            Vec::new()
        } else {
            vec![
                "Install the pdfium shared library (libpdfium) on the system search path".into(),
            ]
        }
    }

    fn convert(&self, bytes: &[u8], filename: &str) -> Result<StrategyOutcome, ConvertError> {
        if !self.available {
            return Err(ConvertError::DependencyUnavailable {
                backend: self.name().to_string(),
                reason: self
                    .probe_error
                    .clone()
                    .unwrap_or_else(|| "probe failed".to_string()),
            });
        }

        // Stage to a uniquely named temp file; dropped (and deleted) on
        // every exit path out of this function.
        let mut staged = tempfile::NamedTempFile::new()
            .map_err(|e| ConvertError::Internal(format!("tempfile: {e}")))?;
        staged
            .write_all(bytes)
            .map_err(|e| ConvertError::Internal(format!("tempfile write: {e}")))?;

        self.convert_staged(staged.path(), bytes, filename)
    }
}
