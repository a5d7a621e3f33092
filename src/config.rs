//! Generator configuration.
//!
//! Selects which block-generation backend new instances use. The
//! preference can be set in code or through the `ISAAC_CSPRNG_BACKEND`
//! environment variable (`auto`, `unrolled` or `reference`).

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::backend::{active_backend, Backend};
use crate::error::IsaacError;

/// Environment variable read by [`GeneratorConfig::from_env`].
pub const BACKEND_ENV_VAR: &str = "ISAAC_CSPRNG_BACKEND";

/// Requested backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendPreference {
    /// Use the backend chosen by the process-wide probe.
    #[default]
    Auto,
    /// Always use [`Backend::Unrolled`].
    Unrolled,
    /// Always use [`Backend::Reference`].
    Reference,
}

impl BackendPreference {
    /// Resolves the preference to a concrete backend.
    pub fn resolve(self) -> Backend {
        match self {
            BackendPreference::Auto => active_backend(),
            BackendPreference::Unrolled => Backend::Unrolled,
            BackendPreference::Reference => Backend::Reference,
        }
    }
}

impl FromStr for BackendPreference {
    type Err = IsaacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "unrolled" => Ok(BackendPreference::Unrolled),
            "reference" => Ok(BackendPreference::Reference),
            _ => Err(IsaacError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendPreference::Auto => f.write_str("auto"),
            BackendPreference::Unrolled => f.write_str("unrolled"),
            BackendPreference::Reference => f.write_str("reference"),
        }
    }
}

impl From<Backend> for BackendPreference {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Unrolled => BackendPreference::Unrolled,
            Backend::Reference => BackendPreference::Reference,
        }
    }
}

/// Options applied when constructing an [`IsaacRng`](crate::IsaacRng).
///
/// # Examples
///
/// ```
/// use isaac_csprng::config::{BackendPreference, GeneratorConfig};
/// use isaac_csprng::{Backend, IsaacRng};
///
/// let config = GeneratorConfig::new().with_backend(BackendPreference::Reference);
/// let rng = IsaacRng::with_config(&[42], &config).unwrap();
/// assert_eq!(rng.backend(), Backend::Reference);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorConfig {
    /// Backend used for block generation.
    pub backend: BackendPreference,
}

impl GeneratorConfig {
    /// Returns the default configuration (automatic backend).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend preference.
    pub fn with_backend(mut self, backend: BackendPreference) -> Self {
        self.backend = backend;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// An unset variable yields the default.
    ///
    /// # Errors
    /// Returns [`IsaacError::UnknownBackend`] if [`BACKEND_ENV_VAR`] holds
    /// an unrecognised name.
    pub fn from_env() -> Result<Self, IsaacError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, IsaacError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup(BACKEND_ENV_VAR) {
            Some(raw) => raw.parse()?,
            None => BackendPreference::default(),
        };
        debug!(backend = %backend, "generator configuration loaded");
        Ok(GeneratorConfig { backend })
    }
}
