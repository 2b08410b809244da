//! CLI binary for pdf2md-cascade.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ManagerConfig`, validates the caller contract (non-empty payload, a
//! `.pdf` filename), and prints results.

use anyhow::{bail, Context, Result};
use clap::Parser;
use pdf2md_cascade::{ConversionMode, ConverterManager, ManagerConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  pdf2md-cascade document.pdf

  # Convert to file
  pdf2md-cascade document.pdf -o output.md

  # Structured JSON result (success, mode, strategy, markdown, …)
  pdf2md-cascade --json document.pdf > result.json

  # Show which strategies are registered and available
  pdf2md-cascade --status

  # Skip the rich backend, force lopdf
  pdf2md-cascade --no-rich document.pdf

STRATEGY CHAIN (priority order):
  pdfium        full-fidelity native engine   (requires the `fidelity`
                feature and an installed libpdfium; probed at startup)
  pdf-extract   rich layout-aware extraction  (`rich` feature, default)
  lopdf         basic content-stream decoding (`basic` feature, default)
  synthetic     placeholder document           (always available)

The first strategy to produce real content wins. When every extraction
backend fails or is unavailable, the synthetic strategy still produces a
placeholder document describing the input, so the exit code stays 0 and
the degradation is signalled in the result's mode/note fields instead.
"#;

/// Convert PDF files to Markdown through a fallback chain of extraction backends.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2md-cascade",
    version,
    about = "Convert PDF files to Markdown through a fallback chain of extraction backends",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path.
    #[arg(required_unless_present = "status")]
    input: Option<PathBuf>,

    /// Write Markdown to this file instead of stdout.
    #[arg(short, long, env = "PDF2MD_CASCADE_OUTPUT")]
    output: Option<PathBuf>,

    /// Output the structured JSON result instead of bare Markdown.
    #[arg(long, env = "PDF2MD_CASCADE_JSON")]
    json: bool,

    /// Print strategy registry status (and recommendations) as JSON, no conversion.
    #[arg(long)]
    status: bool,

    /// Do not register the pdfium full-fidelity strategy.
    #[arg(long)]
    no_fidelity: bool,

    /// Do not register the rich (pdf-extract) strategy.
    #[arg(long)]
    no_rich: bool,

    /// Do not register the basic (lopdf) strategy.
    #[arg(long)]
    no_basic: bool,

    /// Do not register the synthetic fallback strategy.
    ///
    /// With this flag an unreadable document produces an error-mode result
    /// (and a non-zero exit code) instead of a placeholder.
    #[arg(long)]
    no_synthetic: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2MD_CASCADE_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2MD_CASCADE_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = ManagerConfig::builder()
        .enable_fidelity(!cli.no_fidelity)
        .enable_rich(!cli.no_rich)
        .enable_basic(!cli.no_basic)
        .enable_synthetic(!cli.no_synthetic)
        .build();
    let manager = ConverterManager::new(&config);

    // ── Status-only mode ─────────────────────────────────────────────────
    if cli.status {
        let status = manager.status();
        let recommendations = manager.recommendations();
        let payload = serde_json::json!({
            "status": status,
            "recommendations": recommendations,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("Failed to serialise status")?
        );
        return Ok(());
    }

    // ── Caller contract: validate before invoking the core ───────────────
    let input = cli.input.expect("clap enforces input unless --status");
    let filename = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    if !filename.to_lowercase().ends_with(".pdf") {
        bail!("input must be a .pdf file, got '{filename}'");
    }

    let bytes = std::fs::read(&input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    if bytes.is_empty() {
        bail!("input file '{}' is empty", input.display());
    }

    // ── Convert ──────────────────────────────────────────────────────────
    let result = manager.convert(&bytes, &filename);

    if !cli.quiet && result.mode == ConversionMode::Fallback {
        if let Some(note) = &result.note {
            eprintln!("note: {note}");
        }
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&result).context("Failed to serialise result")? + "\n"
    } else {
        result.markdown.clone().unwrap_or_default()
    };

    match &cli.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            file.write_all(rendered.as_bytes())
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
        None => {
            print!("{rendered}");
            io::stdout().flush().ok();
        }
    }

    if !result.success {
        bail!(
            "conversion failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}
