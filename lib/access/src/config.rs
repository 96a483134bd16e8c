//! Access configuration.
//!
//! Loaded via the `config` crate from `TEAMTEGRATE__*` environment variables.
//! Both fields have defaults, so an empty environment yields a usable config.

use serde::{Deserialize, Serialize};
use teamtegrate_core::Result;

use crate::error::ConfigError;

/// Where access gates send callers they turn away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Destination for callers who are not signed in.
    /// Default: "/login"
    #[serde(default = "default_sign_in_path")]
    sign_in_path: String,
    /// Destination for signed-in callers who lack the required role.
    /// Default: "/dashboard"
    #[serde(default = "default_fallback_path")]
    fallback_path: String,
}

fn default_sign_in_path() -> String {
    "/login".to_string()
}

fn default_fallback_path() -> String {
    "/dashboard".to_string()
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            sign_in_path: default_sign_in_path(),
            fallback_path: default_fallback_path(),
        }
    }
}

impl AccessConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be deserialized or a path does
    /// not start with `/`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(
            config::Environment::with_prefix("TEAMTEGRATE")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Loads configuration from any `config` source.
    ///
    /// # Errors
    ///
    /// Same as [`AccessConfig::from_env`].
    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let loaded: Self = config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| ConfigError::Load {
                details: e.to_string(),
            })?;
        loaded.validate()?;
        tracing::debug!(
            sign_in_path = %loaded.sign_in_path,
            fallback_path = %loaded.fallback_path,
            "Loaded access configuration"
        );
        Ok(loaded)
    }

    /// Returns a copy with a different sign-in path.
    #[must_use]
    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = path.into();
        self
    }

    /// Returns a copy with a different fallback path.
    #[must_use]
    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }

    #[must_use]
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    #[must_use]
    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (field, value) in [
            ("sign_in_path", &self.sign_in_path),
            ("fallback_path", &self.fallback_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidPath {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
