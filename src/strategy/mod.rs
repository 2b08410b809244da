//! Conversion strategies: one end-to-end PDF→Markdown path each.
//!
//! A strategy is a closed capability interface — name, availability, and a
//! `convert` operation — dispatched through an ordered list owned by
//! [`crate::ConverterManager`]. Three kinds exist:
//!
//! 1. [`fidelity`]   — native pdfium engine, runtime-probed (optional,
//!    highest priority; `fidelity` feature)
//! 2. [`extraction`] — a [`crate::extract::PageExtractor`] composed with the
//!    text formatter (one instance per backend)
//! 3. [`synthetic`]  — templated placeholder with no extraction dependency;
//!    always succeeds, registered last
//!
//! The soft-fail/hard-fail distinction lives in the return type:
//! `Ok(StrategyOutcome::NoContent)` means "this document has nothing I can
//! use — try the next strategy", while `Err` means the strategy itself could
//! not run. The manager treats both by advancing, but only the latter is a
//! defect worth a warning.

pub mod extraction;
#[cfg(feature = "fidelity")]
pub mod fidelity;
pub mod synthetic;

use crate::error::ConvertError;
use crate::output::{ConversionResult, StrategyStatus};

/// What one strategy attempt produced.
#[derive(Debug)]
pub enum StrategyOutcome {
    /// A finished result; the manager returns it to the caller.
    Converted(ConversionResult),
    /// The strategy ran but found no usable content; the manager advances
    /// to the next strategy in priority order.
    NoContent,
}

/// One end-to-end conversion path.
///
/// Implementations are immutable after construction and reentrant: `convert`
/// writes no shared state, so concurrent requests may run in parallel.
pub trait ConversionStrategy: Send + Sync {
    /// Unique name within a manager instance; recorded in
    /// [`ConversionResult::strategy_used`].
    fn name(&self) -> &str;

    /// One-line description for status reporting.
    fn description(&self) -> &str;

    /// Availability, computed once at registration time. Never re-checked
    /// per request.
    fn is_available(&self) -> bool;

    /// True for the terminal placeholder strategy; synthetic strategies do
    /// not count towards "real" conversion capability.
    fn is_synthetic(&self) -> bool {
        false
    }

    /// The registration-time probe failure, if any.
    fn last_error(&self) -> Option<String> {
        None
    }

    /// Advisory remedies when this strategy is unavailable. Informational
    /// only; never affects conversion behaviour.
    fn recommendations(&self) -> Vec<String> {
        Vec::new()
    }

    /// Attempt the conversion.
    fn convert(&self, bytes: &[u8], filename: &str) -> Result<StrategyOutcome, ConvertError>;

    /// Detailed status snapshot for introspection endpoints.
    fn status(&self) -> StrategyStatus {
        StrategyStatus {
            name: self.name().to_string(),
            description: self.description().to_string(),
            available: self.is_available(),
            last_error: self.last_error(),
            recommendations: self.recommendations(),
        }
    }
}
