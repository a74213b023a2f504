//! Shared configuration loader for the resource-list toolchain.
//!
//! `defaults/reslist.default.toml` is embedded into every binary so that
//! the documented file and directory names stay in sync with runtime
//! behavior. Applications layer user-specific files and environment
//! variables on top of those defaults via [`Loader`] before
//! deserializing into [`ReslistConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use reslist_site::SiteLayout;

const DEFAULT_TOML: &str = include_str!("../defaults/reslist.default.toml");

/// Top-level configuration consumed by the resource-list applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ReslistConfig {
    pub site: SiteLayout,
    pub store: StoreConfig,
}

/// Location of the master document.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub master_document: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `RESLIST_*` environment variables, e.g.
    /// `RESLIST_STORE__MASTER_DOCUMENT` for `store.master_document`.
    pub fn with_env(mut self) -> Self {
        self.builder = self
            .builder
            .add_source(Environment::with_prefix("RESLIST").separator("__"));
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ReslistConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ReslistConfig, ConfigError> {
    Loader::new().build()
}
