//! Configuration for manager construction.
//!
//! All registry behaviour is controlled through [`ManagerConfig`], built via
//! its [`ManagerConfigBuilder`]. The config is read exactly once, when
//! [`crate::ConverterManager::new`] registers strategies; after that the
//! registry is immutable for the process lifetime, so the config carries no
//! runtime knobs — only which strategies exist.
//!
//! # Design choice: builder over constructor
//! The flag set grows with each backend; the builder lets callers flip only
//! what they care about and rely on documented defaults for the rest.

use serde::{Deserialize, Serialize};

/// Which strategies [`crate::ConverterManager::new`] registers, in priority
/// order. Compile-time features still gate what *can* be registered; these
/// flags opt compiled-in strategies out per manager instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Register the pdfium full-fidelity strategy (highest priority).
    /// Default: true. No effect unless the `fidelity` feature is compiled in;
    /// the strategy may still probe as unavailable at runtime.
    pub enable_fidelity: bool,

    /// Register the rich (pdf-extract) strategy. Default: true.
    pub enable_rich: bool,

    /// Register the basic (lopdf) strategy. Default: true.
    pub enable_basic: bool,

    /// Register the synthetic fallback terminal. Default: true.
    ///
    /// Disabling this removes the guarantee that every conversion produces
    /// output; only do it when the caller prefers an error-mode result over
    /// a placeholder document.
    pub enable_synthetic: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            enable_fidelity: true,
            enable_rich: true,
            enable_basic: true,
            enable_synthetic: true,
        }
    }
}

impl ManagerConfig {
    /// Create a new builder for `ManagerConfig`.
    pub fn builder() -> ManagerConfigBuilder {
        ManagerConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ManagerConfig`].
#[derive(Debug)]
pub struct ManagerConfigBuilder {
    config: ManagerConfig,
}

impl ManagerConfigBuilder {
    pub fn enable_fidelity(mut self, v: bool) -> Self {
        self.config.enable_fidelity = v;
        self
    }

    pub fn enable_rich(mut self, v: bool) -> Self {
        self.config.enable_rich = v;
        self
    }

    pub fn enable_basic(mut self, v: bool) -> Self {
        self.config.enable_basic = v;
        self
    }

    pub fn enable_synthetic(mut self, v: bool) -> Self {
        self.config.enable_synthetic = v;
        self
    }

    pub fn build(self) -> ManagerConfig {
        self.config
    }
}
