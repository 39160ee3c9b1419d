//! VeilRuntime: owns the anonymization engine and the resolved config.
//!
//! The runtime is a singleton stored behind `OnceLock`. It can be set once
//! via `initialize()`; `get()` falls back to a default runtime built from
//! compiled defaults plus `VEIL_*` environment overrides.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use veil_anonymize::AnonymizationEngine;
use veil_core::config::VeilConfig;
use veil_core::errors::ToolError;
use veil_core::VeilResult;
use veil_observability::tracing_setup::{self, events};

/// Global singleton.
static RUNTIME: OnceLock<Arc<VeilRuntime>> = OnceLock::new();

/// The runtime owning the engine shared by every tool call.
pub struct VeilRuntime {
    pub engine: AnonymizationEngine,
    pub config: VeilConfig,
}

/// Options for initializing the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. Takes precedence over `project_root`.
    pub config_toml: Option<String>,
    /// Directory holding `veil.toml`; environment overrides apply on top.
    pub project_root: Option<PathBuf>,
    /// Install the global tracing subscriber from the observability config.
    pub init_tracing: bool,
}

impl VeilRuntime {
    /// Create a runtime with the given options.
    pub fn new(opts: RuntimeOptions) -> VeilResult<Self> {
        let config = match (&opts.config_toml, &opts.project_root) {
            (Some(toml_str), _) => VeilConfig::from_toml(toml_str)?,
            (None, Some(root)) => VeilConfig::load(root)?,
            (None, None) => VeilConfig::default(),
        };
        if opts.init_tracing {
            tracing_setup::init_tracing(&config.observability);
        }
        Ok(Self::from_config(config))
    }

    /// Build a runtime around an already-validated config.
    pub fn from_config(config: VeilConfig) -> Self {
        let engine = AnonymizationEngine::from_config(&config.anonymize);
        events::runtime_initialized(
            engine.generator().digest_length(),
            config.anonymize.enabled_patterns.len(),
        );
        Self { engine, config }
    }

    /// Salt used when a tool call does not pass one.
    pub fn default_salt(&self) -> &str {
        &self.config.anonymize.default_salt
    }

    fn from_env() -> Self {
        let mut config = VeilConfig::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        if let Err(e) = VeilConfig::validate(&config) {
            tracing::warn!(error = %e, "ignoring invalid VEIL_* overrides");
            config = VeilConfig::default();
        }
        Self::from_config(config)
    }
}

/// Initialize the global VeilRuntime singleton.
///
/// Returns an error if already initialized or if the config is invalid.
pub fn initialize(opts: RuntimeOptions) -> VeilResult<()> {
    let runtime = VeilRuntime::new(opts)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| ToolError::AlreadyInitialized.into())
}

/// Get the global VeilRuntime, creating the default one on first use.
pub fn get() -> Arc<VeilRuntime> {
    RUNTIME
        .get_or_init(|| Arc::new(VeilRuntime::from_env()))
        .clone()
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
