//! # pdf2md-cascade
//!
//! Convert PDF documents to Markdown through a chain of interchangeable
//! extraction strategies, falling back gracefully when a preferred strategy
//! is unavailable or fails.
//!
//! ## Why this crate?
//!
//! No single PDF text extractor handles every document. Layout-aware
//! extraction gives the best Markdown but rejects exotic encodings; raw
//! content-stream decoding opens almost anything but interleaves columns;
//! and on a box with no native PDF engine installed, both may be missing
//! entirely. Rather than picking one backend and failing on its blind
//! spots, this crate registers several and tries them in quality order —
//! and when nothing can read the document, it still answers with a
//! placeholder describing the input, so callers always get a well-formed
//! result.
//!
//! ## Chain Overview
//!
//! ```text
//! PDF bytes + filename
//!  │
//!  ├─ 1. pdfium       full-fidelity native engine (optional, runtime-probed)
//!  ├─ 2. pdf-extract  rich layout-aware extraction
//!  ├─ 3. lopdf        basic content-stream decoding
//!  └─ 4. synthetic    placeholder document (always succeeds)
//!       │
//!       └─▶ ConversionResult { mode: real | fallback | error, … }
//! ```
//!
//! The first strategy to produce a real result short-circuits the chain.
//! Soft failures (unreadable document, no text layer) advance to the next
//! strategy; panics and hard failures are caught at the manager boundary.
//! `convert` is a total function — it never raises.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf2md_cascade::{ConverterManager, ManagerConfig};
//!
//! let manager = ConverterManager::new(&ManagerConfig::default());
//! let bytes = std::fs::read("document.pdf").unwrap_or_default();
//! let result = manager.convert(&bytes, "document.pdf");
//! if let Some(markdown) = &result.markdown {
//!     println!("{markdown}");
//! }
//! eprintln!("strategy: {} mode: {:?}", result.strategy_used, result.mode);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `rich`     | on      | pdf-extract backend (layout-aware text) |
//! | `basic`    | on      | lopdf backend (content-stream decoding) |
//! | `fidelity` | off     | native pdfium backend, probed at runtime |
//! | `cli`      | on      | the `pdf2md-cascade` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2md-cascade = { version = "0.4", default-features = false, features = ["rich", "basic"] }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod manager;
pub mod output;
pub mod postprocess;
pub mod strategy;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ManagerConfig, ManagerConfigBuilder};
pub use error::{ConvertError, ExtractionError};
pub use extract::{count_pages_best_effort, PageExtractor, PageText};
pub use format::format_page;
pub use manager::ConverterManager;
pub use output::{Capability, ConversionMode, ConversionResult, ManagerStatus, StrategyStatus};
pub use postprocess::tidy_markdown;
pub use strategy::extraction::ExtractionStrategy;
pub use strategy::synthetic::SyntheticStrategy;
pub use strategy::{ConversionStrategy, StrategyOutcome};

#[cfg(feature = "fidelity")]
pub use strategy::fidelity::PdfiumStrategy;
