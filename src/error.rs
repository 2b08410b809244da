//! Error types for the pdf2md-cascade library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ConvertError`] — **Hard**: a strategy cannot run at all (its backend
//!   was never available, the registry is empty, an internal invariant
//!   broke). The manager logs these and advances to the next strategy; the
//!   caller only ever sees them folded into an error-mode
//!   [`crate::output::ConversionResult`].
//!
//! * [`ExtractionError`] — **Soft**: one specific conversion attempt could
//!   not parse the given bytes (corrupt, encrypted, unsupported document).
//!   Scoped to a single request; the owning strategy catches it, reports
//!   "no usable content", and the chain falls through to the next backend.
//!
//! The separation keeps the recovery policy honest: extraction trouble is
//! recovered inside the failing strategy, and only total exhaustion (or an
//! empty registry) surfaces as a result-level error. `convert` never raises.

use thiserror::Error;

/// Hard failures inside the conversion chain.
///
/// These never propagate out of [`crate::ConverterManager::convert`];
/// they are logged and either skipped (next strategy) or rendered into an
/// error-mode result when the chain is exhausted.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The strategy's required extraction backend cannot be loaded.
    ///
    /// Detected once at manager construction; the strategy stays permanently
    /// unavailable for the process lifetime (no per-request retry).
    #[error("extraction backend '{backend}' is unavailable: {reason}")]
    DependencyUnavailable { backend: String, reason: String },

    /// The manager holds zero strategies; nothing can produce output.
    #[error("no conversion strategies registered")]
    NoStrategiesRegistered,

    /// Unexpected internal error (temp-file staging, poisoned state).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A non-fatal failure of one extraction attempt.
///
/// Returned by [`crate::extract::PageExtractor::extract_pages`] when the
/// underlying parsing library cannot open or read the document. The owning
/// strategy treats this as "no pages" and soft-fails so the manager can
/// advance to the next backend.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    /// The document could not be opened at all (corrupt header, bad xref).
    #[error("failed to open document: {detail}")]
    OpenFailed { detail: String },

    /// The document is encrypted and cannot be read without a password.
    #[error("document is encrypted")]
    Encrypted,

    /// The document opened but text extraction failed.
    #[error("failed to extract text: {detail}")]
    TextExtraction { detail: String },
}

impl ExtractionError {
    /// Classify a backend error message into the taxonomy.
    ///
    /// Both backends report encryption only through their error strings, so
    /// the match is textual.
    pub(crate) fn classify(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let lower = detail.to_lowercase();
        if lower.contains("encrypt") || lower.contains("password") {
            ExtractionError::Encrypted
        } else {
            ExtractionError::OpenFailed { detail }
        }
    }
}
