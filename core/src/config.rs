//! Discovery configuration
//!
//! Passed explicitly into every load. Where the values come from (files,
//! environment, a settings service) is up to the caller; with the `serde`
//! feature the struct can be embedded directly in a TOML or JSON config.

use crate::tracing::typeres_trace_config;
use crate::{Result, TypeError};

/// Schema searched when none is configured.
pub const DEFAULT_SCHEMA: &str = "public";

/// Controls user-defined type discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiscoveryConfig {
    /// Run discovery at all. Defaults to `true`.
    pub enabled: bool,
    /// Schemas to search, in order. Empty means [`DEFAULT_SCHEMA`].
    pub schemas: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            schemas: Vec::new(),
        }
    }
}

impl DiscoveryConfig {
    /// Discovery switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Discovery over the given schemas.
    #[must_use]
    pub fn with_schemas<I, S>(schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            schemas: schemas.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a raw comma-separated schema list such as `"public, audit"`.
    ///
    /// A malformed list is not an error: it is logged and replaced by the
    /// default scope.
    ///
    /// ```
    /// use typeres_core::DiscoveryConfig;
    ///
    /// let config = DiscoveryConfig::with_schema_list(true, "sales, audit");
    /// assert_eq!(config.schemas, ["sales", "audit"]);
    ///
    /// let config = DiscoveryConfig::with_schema_list(true, "sales,,audit");
    /// assert_eq!(config.effective_schemas(), ["public"]);
    /// ```
    #[must_use]
    pub fn with_schema_list(enabled: bool, raw: &str) -> Self {
        let schemas = match parse_schema_list(raw) {
            Ok(schemas) => schemas,
            Err(_err) => {
                typeres_trace_config!(_err);
                Vec::new()
            }
        };
        Self { enabled, schemas }
    }

    /// The schemas discovery will actually search.
    #[must_use]
    pub fn effective_schemas(&self) -> Vec<String> {
        if self.schemas.is_empty() {
            vec![DEFAULT_SCHEMA.to_string()]
        } else {
            self.schemas.clone()
        }
    }
}

/// Parse a comma-separated schema list. Entries are trimmed; a blank list
/// yields no schemas, a blank entry is an error.
pub fn parse_schema_list(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.trim();
            if entry.is_empty() {
                Err(TypeError::Configuration(format!(
                    "empty schema name at position {} in {raw:?}",
                    index + 1
                )))
            } else if entry.contains('\0') {
                Err(TypeError::Configuration(format!(
                    "schema name at position {} contains a NUL byte",
                    index + 1
                )))
            } else {
                Ok(entry.to_string())
            }
        })
        .collect()
}
