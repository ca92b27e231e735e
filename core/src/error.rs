use thiserror::Error;

/// Errors raised while resolving a type registry.
///
/// Only [`TypeError::CatalogFetch`] and [`TypeError::UnknownDialect`] ever
/// escape a load; discovery and configuration errors are recovered where they
/// occur.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The base type catalog could not be read from the metadata source
    #[error("Catalog fetch error: {0}")]
    CatalogFetch(String),

    /// No strategy is registered for the requested dialect
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// User-defined type discovery failed (query, permission or connection)
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Malformed discovery configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for type resolution
pub type Result<T> = std::result::Result<T, TypeError>;
