//! Metadata source over the synchronous `postgres` driver

use crate::catalog::{BASE_TYPES_QUERY, entries_from_rows};
use postgres::types::ToSql;
use typeres_core::{
    CatalogConnection, CatalogEntry, CatalogRow, MetadataSource, Result, TypeError,
};

/// A [`MetadataSource`] backed by a borrowed [`postgres::Client`].
///
/// The base catalog comes from `pg_catalog.pg_type`; discovery queries run on
/// the same client. Statements and rows are dropped before each call returns.
///
/// ```no_run
/// use typeres_core::{DiscoveryConfig, StrategyRegistry, TypeLoader};
/// use typeres_postgres::{PostgresSource, PostgresTypeStrategy};
/// use typeres_types::Dialect;
///
/// let mut client = postgres::Client::connect("host=localhost user=postgres", postgres::NoTls)?;
/// let mut strategies = StrategyRegistry::new();
/// strategies.register(Dialect::PostgreSQL, PostgresTypeStrategy::new());
///
/// let registry = TypeLoader::new(&strategies).load(
///     &mut PostgresSource::new(&mut client),
///     Dialect::PostgreSQL,
///     &DiscoveryConfig::default(),
/// )?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PostgresSource<'c> {
    client: &'c mut postgres::Client,
    discovery_connection: bool,
}

impl<'c> PostgresSource<'c> {
    pub fn new(client: &'c mut postgres::Client) -> Self {
        Self {
            client,
            discovery_connection: true,
        }
    }

    /// Offer only the base catalog; discovery is skipped as if no connection
    /// were available.
    pub fn catalog_only(client: &'c mut postgres::Client) -> Self {
        Self {
            client,
            discovery_connection: false,
        }
    }

    fn run(&mut self, sql: &str, params: &[&str]) -> std::result::Result<Vec<CatalogRow>, postgres::Error> {
        let params: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();
        self.client
            .query(sql, &params)?
            .iter()
            .map(|row| {
                (0..row.len())
                    .map(|index| row.try_get::<_, Option<String>>(index))
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map(CatalogRow::new)
            })
            .collect()
    }
}

impl std::fmt::Debug for PostgresSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresSource")
            .field("discovery_connection", &self.discovery_connection)
            .finish_non_exhaustive()
    }
}

impl MetadataSource for PostgresSource<'_> {
    fn type_catalog(&mut self) -> Result<Vec<CatalogEntry>> {
        let rows = self
            .run(BASE_TYPES_QUERY, &[])
            .map_err(|e| TypeError::CatalogFetch(format!("Failed to query pg_type: {e}")))?;
        entries_from_rows(&rows)
    }

    fn catalog_connection(&mut self) -> Result<Option<&mut dyn CatalogConnection>> {
        if self.discovery_connection {
            Ok(Some(self))
        } else {
            Ok(None)
        }
    }
}

impl CatalogConnection for PostgresSource<'_> {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>> {
        self.run(sql, params)
            .map_err(|e| TypeError::Discovery(format!("Failed to query catalog: {e}")))
    }
}
