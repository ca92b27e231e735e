//! Metadata sources and catalog connections
//!
//! A [`MetadataSource`] is whatever a driver exposes about one data source: the
//! base type catalog, and optionally a [`CatalogConnection`] that can run
//! introspection queries. Driver crates implement both traits; tests implement
//! them with in-memory fakes.

use crate::{Result, TypeName};
use typeres_types::TypeCode;

/// One `(name, code)` pair of the base type catalog as reported by a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: TypeName,
    pub code: TypeCode,
}

impl CatalogEntry {
    pub fn new(name: impl Into<TypeName>, code: TypeCode) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }
}

impl<N: Into<TypeName>> From<(N, TypeCode)> for CatalogEntry {
    fn from((name, code): (N, TypeCode)) -> Self {
        Self::new(name, code)
    }
}

/// A row returned by a catalog query, every column rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRow {
    columns: Vec<Option<String>>,
}

impl CatalogRow {
    pub fn new(columns: Vec<Option<String>>) -> Self {
        Self { columns }
    }

    /// Column `index` as text; `None` when the value is NULL or the column
    /// does not exist.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.columns.get(index)?.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for CatalogRow {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|c| c.map(Into::into)).collect())
    }
}

/// A handle able to run one parameterised catalog query.
///
/// Implementations bind `params` positionally, in order, as text. Any
/// statement or cursor acquired for the query must be released before
/// `query` returns, on the error path too.
pub trait CatalogConnection {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>>;
}

impl<C: CatalogConnection + ?Sized> CatalogConnection for &mut C {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>> {
        (**self).query(sql, params)
    }
}

/// The driver-facing input of a load.
pub trait MetadataSource {
    /// The driver's base type catalog.
    ///
    /// Failure here fails the whole load.
    fn type_catalog(&mut self) -> Result<Vec<CatalogEntry>>;

    /// A connection for discovery queries.
    ///
    /// `Ok(None)` means no connection is available and discovery is skipped
    /// silently; `Err` is treated as a recoverable discovery failure.
    fn catalog_connection(&mut self) -> Result<Option<&mut dyn CatalogConnection>>;
}

impl<S: MetadataSource + ?Sized> MetadataSource for &mut S {
    fn type_catalog(&mut self) -> Result<Vec<CatalogEntry>> {
        (**self).type_catalog()
    }

    fn catalog_connection(&mut self) -> Result<Option<&mut dyn CatalogConnection>> {
        (**self).catalog_connection()
    }
}
