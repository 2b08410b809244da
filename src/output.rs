//! Result and status types returned by the conversion chain.
//!
//! [`ConversionResult`] is the single value the core hands back for every
//! request — success, degraded fallback, and total failure all arrive in the
//! same shape, distinguished by [`ConversionMode`]. The struct is created
//! fresh per request, owns all of its data, and is serde-encodable so the
//! surrounding service can serialise it without touching the core.
//!
//! Invariants enforced by the constructors:
//!
//! * `markdown` is `Some` and non-empty iff `success` is true.
//! * `error` is `Some` iff `success` is false.
//! * `mode` is [`ConversionMode::Error`] only when no strategy at all could
//!   produce output.

use serde::{Deserialize, Serialize};

/// How the result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Genuine extraction succeeded; the markdown reflects document content.
    Real,
    /// The synthetic placeholder path ran; the markdown describes the input
    /// rather than its content.
    Fallback,
    /// No strategy could produce output.
    Error,
}

/// The outcome of one conversion request.
///
/// Immutable once produced; carries no back-references into the manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub success: bool,
    pub filename: String,
    /// Present iff `success` is true, and then never empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// Name of the strategy that produced this result, or `"none"` for the
    /// error mode.
    pub strategy_used: String,
    pub mode: ConversionMode,
    /// Best-effort: may be 0 even for a non-empty document when page
    /// counting itself failed.
    pub page_count: usize,
    pub size_bytes: usize,
    /// Human-readable caveat, e.g. which dependency to enable for full
    /// extraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Present iff `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    /// A successful result from a real extraction backend.
    pub fn real(
        filename: impl Into<String>,
        markdown: impl Into<String>,
        strategy: impl Into<String>,
        page_count: usize,
        size_bytes: usize,
    ) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            markdown: Some(markdown.into()),
            strategy_used: strategy.into(),
            mode: ConversionMode::Real,
            page_count,
            size_bytes,
            note: None,
            error: None,
        }
    }

    /// A successful result from the synthetic placeholder path.
    pub fn fallback(
        filename: impl Into<String>,
        markdown: impl Into<String>,
        strategy: impl Into<String>,
        page_count: usize,
        size_bytes: usize,
        note: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            markdown: Some(markdown.into()),
            strategy_used: strategy.into(),
            mode: ConversionMode::Fallback,
            page_count,
            size_bytes,
            note: Some(note.into()),
            error: None,
        }
    }

    /// A failed result: no strategy could produce output.
    pub fn error(filename: impl Into<String>, error: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            success: false,
            filename: filename.into(),
            markdown: None,
            strategy_used: "none".to_string(),
            mode: ConversionMode::Error,
            page_count: 0,
            size_bytes,
            note: None,
            error: Some(error.into()),
        }
    }
}

/// Aggregate capability of a manager's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// At least one non-synthetic strategy is available.
    Real,
    /// Strategies exist but only the synthetic path can run.
    Fallback,
    /// No strategies are registered.
    None,
}

/// Detailed status of one registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyStatus {
    pub name: String,
    pub description: String,
    /// Computed once at registration; never re-checked per request.
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recommendations: Vec<String>,
}

/// Snapshot of the manager's registry, for status endpoints and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerStatus {
    pub total_strategies: usize,
    pub available_count: usize,
    pub strategies: Vec<StrategyStatus>,
    /// First available strategy in priority order, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_strategy: Option<String>,
    pub capability: Capability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_result_invariants() {
        let r = ConversionResult::real("doc.pdf", "# Title\n", "pdf-extract", 3, 1024);
        assert!(r.success);
        assert_eq!(r.mode, ConversionMode::Real);
        assert!(r.markdown.is_some());
        assert!(r.error.is_none());
    }

    #[test]
    fn error_result_invariants() {
        let r = ConversionResult::error("doc.pdf", "nothing registered", 0);
        assert!(!r.success);
        assert_eq!(r.mode, ConversionMode::Error);
        assert!(r.markdown.is_none());
        assert_eq!(r.strategy_used, "none");
        assert!(r.error.as_deref().unwrap().contains("nothing registered"));
    }

    #[test]
    fn mode_serialises_lowercase() {
        let r = ConversionResult::fallback("a.pdf", "# a.pdf\n", "synthetic", 0, 12, "note");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"mode\":\"fallback\""), "got: {json}");
        assert!(json.contains("\"strategy_used\":\"synthetic\""));
        // error field elided on success
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn capability_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Capability::Real).unwrap(), "\"real\"");
        assert_eq!(serde_json::to_string(&Capability::None).unwrap(), "\"none\"");
    }
}
