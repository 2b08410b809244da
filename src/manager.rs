//! The converter manager: strategy registry and per-request fallback chain.
//!
//! The registry is built once at construction, in fixed priority order
//! (pdfium when compiled in, then rich, then basic, then the synthetic
//! terminal), probing each strategy's availability exactly once. After
//! construction nothing mutates the registry, so a `&ConverterManager` can
//! serve concurrent requests without locking.
//!
//! Per request the chain is: try each available strategy in order; a
//! strategy that produces a result short-circuits the chain; soft-fails,
//! hard failures, and panics all advance to the next strategy. The caller
//! never sees a raised failure — the worst case is an error-mode
//! [`ConversionResult`], and with the synthetic terminal registered even
//! that is unreachable.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error, info, warn};

use crate::config::ManagerConfig;
use crate::error::ConvertError;
use crate::output::{Capability, ConversionResult, ManagerStatus};
use crate::strategy::synthetic::SyntheticStrategy;
use crate::strategy::{ConversionStrategy, StrategyOutcome};

/// Owns the ordered strategy list and drives the fallback chain.
pub struct ConverterManager {
    strategies: Vec<Box<dyn ConversionStrategy>>,
    /// Index of the first available strategy; status-reporting only.
    active: Option<usize>,
}

impl ConverterManager {
    /// Build the stock registry from `config`, in priority order.
    ///
    /// Availability is fixed here for the process lifetime; an unavailable
    /// strategy stays registered (and visible in status) but is skipped per
    /// request.
    pub fn new(config: &ManagerConfig) -> Self {
        let mut strategies: Vec<Box<dyn ConversionStrategy>> = Vec::new();

        #[cfg(feature = "fidelity")]
        if config.enable_fidelity {
            strategies.push(Box::new(crate::strategy::fidelity::PdfiumStrategy::probe()));
        }

        #[cfg(feature = "rich")]
        if config.enable_rich {
            strategies.push(Box::new(crate::strategy::extraction::ExtractionStrategy::new(
                crate::extract::rich::RichExtractor,
            )));
        }

        #[cfg(feature = "basic")]
        if config.enable_basic {
            strategies.push(Box::new(crate::strategy::extraction::ExtractionStrategy::new(
                crate::extract::basic::BasicExtractor,
            )));
        }

        if config.enable_synthetic {
            strategies.push(Box::new(SyntheticStrategy));
        }

        Self::with_strategies(strategies)
    }

    /// Build a manager over a custom strategy list (tests, embedders with
    /// their own backends). Priority is list order; the caller is
    /// responsible for registering a terminal strategy if error-mode results
    /// are unacceptable.
    pub fn with_strategies(strategies: Vec<Box<dyn ConversionStrategy>>) -> Self {
        let active = strategies.iter().position(|s| s.is_available());
        let available = strategies.iter().filter(|s| s.is_available()).count();

        info!(
            total = strategies.len(),
            available,
            active = active.map(|i| strategies[i].name()),
            "converter manager initialised"
        );

        Self { strategies, active }
    }

    /// Name of the active (first available) strategy, if any.
    pub fn active_strategy_name(&self) -> Option<&str> {
        self.active.map(|i| self.strategies[i].name())
    }

    /// Convert one document. Total function: always returns a well-formed
    /// result, never panics, never raises.
    pub fn convert(&self, bytes: &[u8], filename: &str) -> ConversionResult {
        if self.strategies.is_empty() {
            warn!(filename, "conversion requested but no strategies are registered");
            return ConversionResult::error(
                filename,
                ConvertError::NoStrategiesRegistered.to_string(),
                bytes.len(),
            );
        }

        info!(filename, size = bytes.len(), "starting conversion");
        let mut last_error: Option<String> = None;

        for strategy in &self.strategies {
            if !strategy.is_available() {
                debug!(strategy = strategy.name(), "skipping unavailable strategy");
                continue;
            }

            debug!(strategy = strategy.name(), "trying strategy");
            let attempt = catch_unwind(AssertUnwindSafe(|| strategy.convert(bytes, filename)));

            match attempt {
                Ok(Ok(StrategyOutcome::Converted(result))) => {
                    info!(
                        strategy = strategy.name(),
                        mode = ?result.mode,
                        pages = result.page_count,
                        "conversion finished"
                    );
                    return result;
                }
                Ok(Ok(StrategyOutcome::NoContent)) => {
                    info!(strategy = strategy.name(), "no usable content, advancing");
                }
                Ok(Err(e)) => {
                    warn!(strategy = strategy.name(), error = %e, "strategy failed, advancing");
                    last_error = Some(e.to_string());
                }
                Err(payload) => {
                    let detail = panic_message(payload.as_ref());
                    error!(strategy = strategy.name(), panic = %detail, "strategy panicked, advancing");
                    last_error = Some(format!(
                        "unexpected failure in strategy '{}': {detail}",
                        strategy.name()
                    ));
                }
            }
        }

        // Reachable only without an available synthetic terminal.
        warn!(filename, "all strategies exhausted without producing output");
        ConversionResult::error(
            filename,
            last_error.unwrap_or_else(|| {
                "all conversion strategies were exhausted without producing output".to_string()
            }),
            bytes.len(),
        )
    }

    /// Snapshot of the registry for status endpoints.
    pub fn status(&self) -> ManagerStatus {
        let available_count = self.strategies.iter().filter(|s| s.is_available()).count();

        let capability = if self.strategies.is_empty() {
            Capability::None
        } else if self
            .strategies
            .iter()
            .any(|s| s.is_available() && !s.is_synthetic())
        {
            Capability::Real
        } else {
            Capability::Fallback
        };

        ManagerStatus {
            total_strategies: self.strategies.len(),
            available_count,
            strategies: self.strategies.iter().map(|s| s.status()).collect(),
            active_strategy: self.active_strategy_name().map(str::to_string),
            capability,
        }
    }

    /// Advisory remedies when no real strategy is available. Informational
    /// only; conversion behaviour is unaffected.
    pub fn recommendations(&self) -> Vec<String> {
        if self.strategies.is_empty() {
            return vec![
                "Enable the `rich` or `basic` cargo feature so at least one conversion strategy is registered"
                    .to_string(),
            ];
        }

        let has_real = self
            .strategies
            .iter()
            .any(|s| s.is_available() && !s.is_synthetic());
        if has_real {
            return Vec::new();
        }

        let mut recs = vec![
            "For real text extraction, enable the `rich` (pdf-extract) or `basic` (lopdf) cargo feature"
                .to_string(),
        ];
        for strategy in &self.strategies {
            recs.extend(strategy.recommendations());
        }
        recs
    }
}

impl Default for ConverterManager {
    fn default() -> Self {
        Self::new(&ManagerConfig::default())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ConversionMode;

    /// Scripted strategy covering every outcome the chain must handle.
    enum Script {
        Succeed,
        NoContent,
        HardFail,
        Panic,
    }

    struct FakeStrategy {
        name: &'static str,
        available: bool,
        script: Script,
    }

    impl ConversionStrategy for FakeStrategy {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "scripted strategy for tests"
        }
        fn is_available(&self) -> bool {
            self.available
        }
        fn convert(&self, bytes: &[u8], filename: &str) -> Result<StrategyOutcome, ConvertError> {
            match self.script {
                Script::Succeed => Ok(StrategyOutcome::Converted(ConversionResult::real(
                    filename,
                    format!("# converted by {}\n", self.name),
                    self.name,
                    1,
                    bytes.len(),
                ))),
                Script::NoContent => Ok(StrategyOutcome::NoContent),
                Script::HardFail => Err(ConvertError::Internal("scripted failure".into())),
                Script::Panic => panic!("scripted panic"),
            }
        }
    }

    fn fake(name: &'static str, available: bool, script: Script) -> Box<dyn ConversionStrategy> {
        Box::new(FakeStrategy {
            name,
            available,
            script,
        })
    }

    #[test]
    fn empty_registry_yields_error_mode() {
        let manager = ConverterManager::with_strategies(vec![]);
        let result = manager.convert(b"anything", "doc.pdf");
        assert!(!result.success);
        assert_eq!(result.mode, ConversionMode::Error);
        assert!(!result.error.as_deref().unwrap().is_empty());
        assert_eq!(manager.status().capability, Capability::None);
    }

    #[test]
    fn first_available_strategy_short_circuits() {
        let manager = ConverterManager::with_strategies(vec![
            fake("first", true, Script::Succeed),
            fake("second", true, Script::Succeed),
        ]);
        let result = manager.convert(b"x", "doc.pdf");
        assert_eq!(result.strategy_used, "first");
    }

    #[test]
    fn unavailable_strategies_are_skipped() {
        let manager = ConverterManager::with_strategies(vec![
            fake("first", false, Script::Succeed),
            fake("second", true, Script::Succeed),
        ]);
        let result = manager.convert(b"x", "doc.pdf");
        assert_eq!(result.strategy_used, "second");
        assert_eq!(manager.active_strategy_name(), Some("second"));
    }

    #[test]
    fn no_content_advances_to_next() {
        let manager = ConverterManager::with_strategies(vec![
            fake("first", true, Script::NoContent),
            fake("second", true, Script::Succeed),
        ]);
        let result = manager.convert(b"x", "doc.pdf");
        assert_eq!(result.strategy_used, "second");
        assert_eq!(result.mode, ConversionMode::Real);
    }

    #[test]
    fn hard_failure_advances_to_next() {
        let manager = ConverterManager::with_strategies(vec![
            fake("first", true, Script::HardFail),
            fake("second", true, Script::Succeed),
        ]);
        let result = manager.convert(b"x", "doc.pdf");
        assert_eq!(result.strategy_used, "second");
    }

    #[test]
    fn panic_is_contained_and_advances() {
        let manager = ConverterManager::with_strategies(vec![
            fake("first", true, Script::Panic),
            fake("second", true, Script::Succeed),
        ]);
        let result = manager.convert(b"x", "doc.pdf");
        assert_eq!(result.strategy_used, "second");
    }

    #[test]
    fn exhausted_chain_reports_last_error() {
        let manager = ConverterManager::with_strategies(vec![
            fake("first", true, Script::NoContent),
            fake("second", true, Script::HardFail),
        ]);
        let result = manager.convert(b"x", "doc.pdf");
        assert!(!result.success);
        assert_eq!(result.mode, ConversionMode::Error);
        assert!(result.error.as_deref().unwrap().contains("scripted failure"));
    }

    #[test]
    fn synthetic_terminal_makes_error_mode_unreachable() {
        let manager = ConverterManager::with_strategies(vec![
            fake("first", true, Script::Panic),
            fake("second", true, Script::NoContent),
            Box::new(SyntheticStrategy),
        ]);
        let result = manager.convert(b"garbage bytes", "doc.pdf");
        assert!(result.success);
        assert_eq!(result.mode, ConversionMode::Fallback);
    }

    #[test]
    fn capability_fallback_when_only_synthetic_available() {
        let manager = ConverterManager::with_strategies(vec![
            fake("real-but-down", false, Script::Succeed),
            Box::new(SyntheticStrategy),
        ]);
        let status = manager.status();
        assert_eq!(status.capability, Capability::Fallback);
        assert_eq!(status.total_strategies, 2);
        assert_eq!(status.available_count, 1);
        assert_eq!(status.active_strategy.as_deref(), Some("synthetic"));
        assert!(!manager.recommendations().is_empty());
    }

    #[test]
    fn capability_real_suppresses_recommendations() {
        let manager =
            ConverterManager::with_strategies(vec![fake("fast", true, Script::Succeed)]);
        assert_eq!(manager.status().capability, Capability::Real);
        assert!(manager.recommendations().is_empty());
    }
}
