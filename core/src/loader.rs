//! Type registry loading
//!
//! A load merges three sources in fixed precedence:
//!
//! 1. the driver's base type catalog,
//! 2. the dialect strategy's extra-type table,
//! 3. user-defined types discovered in the database's own catalog.
//!
//! Only the first stage can fail a load. Discovery runs last, on a copy of
//! the base+extra registry, and any error it raises is logged and dropped.

use crate::tracing::{
    typeres_trace_discovery, typeres_trace_load, typeres_trace_query,
};
use crate::{
    CatalogConnection, CatalogRow, DialectTypeStrategy, DiscoveryConfig, MetadataSource, Result,
    StrategyRegistry, TypeError, TypeRegistry, UdtDescriptor,
};
use typeres_types::Dialect;

/// What happened to the discovery stage of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryStatus {
    /// Switched off by configuration
    Disabled,
    /// The dialect has no discovery capability
    Unsupported,
    /// The metadata source offered no connection
    NoConnection,
    /// Discovery ran and found this many types
    Completed { discovered: usize },
    /// Discovery failed and was skipped
    Failed(String),
}

/// The full result of a load.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub registry: TypeRegistry,
    /// Discovered types with their kind and schema, in discovery order.
    pub discovered: Vec<UdtDescriptor>,
    pub discovery: DiscoveryStatus,
}

/// Resolves type registries against a fixed set of strategies.
///
/// The loader holds no mutable state; one instance can serve concurrent loads
/// against different data sources.
#[derive(Debug, Clone, Copy)]
pub struct TypeLoader<'a> {
    strategies: &'a StrategyRegistry,
}

impl<'a> TypeLoader<'a> {
    pub fn new(strategies: &'a StrategyRegistry) -> Self {
        Self { strategies }
    }

    /// Build the type registry for one data source.
    ///
    /// Fails with [`TypeError::CatalogFetch`] when the base catalog cannot be
    /// read and with [`TypeError::UnknownDialect`] when `dialect` has no
    /// strategy. Never fails because of discovery.
    pub fn load<S>(
        &self,
        source: &mut S,
        dialect: Dialect,
        config: &DiscoveryConfig,
    ) -> Result<TypeRegistry>
    where
        S: MetadataSource + ?Sized,
    {
        self.load_with_outcome(source, dialect, config)
            .map(|outcome| outcome.registry)
    }

    /// Like [`load`](Self::load), also reporting what discovery did.
    pub fn load_with_outcome<S>(
        &self,
        source: &mut S,
        dialect: Dialect,
        config: &DiscoveryConfig,
    ) -> Result<LoadOutcome>
    where
        S: MetadataSource + ?Sized,
    {
        let base = source.type_catalog().map_err(|err| match err {
            TypeError::CatalogFetch(_) => err,
            other => TypeError::CatalogFetch(other.to_string()),
        })?;
        typeres_trace_load!("base", dialect, entries = base.len());

        let strategy = self.strategies.lookup(dialect)?;

        let mut builder = TypeRegistry::builder();
        for entry in base {
            builder.insert(entry.name, entry.code);
        }
        builder.merge(strategy.extra_types());
        let registry = builder.build();
        typeres_trace_load!("extra", dialect, entries = registry.len());

        let outcome = discover(strategy, source, dialect, config, registry);
        typeres_trace_load!("done", dialect, entries = outcome.registry.len());
        Ok(outcome)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn discover<S>(
    strategy: &dyn DialectTypeStrategy,
    source: &mut S,
    dialect: Dialect,
    config: &DiscoveryConfig,
    registry: TypeRegistry,
) -> LoadOutcome
where
    S: MetadataSource + ?Sized,
{
    let skipped = |registry, status| LoadOutcome {
        registry,
        discovered: Vec::new(),
        discovery: status,
    };

    if !config.enabled {
        typeres_trace_discovery!(skip, dialect, "disabled");
        return skipped(registry, DiscoveryStatus::Disabled);
    }
    let Some(discovery) = strategy.udt_discovery() else {
        typeres_trace_discovery!(skip, dialect, "unsupported");
        return skipped(registry, DiscoveryStatus::Unsupported);
    };

    let connection = match source.catalog_connection() {
        Ok(Some(connection)) => connection,
        Ok(None) => {
            typeres_trace_discovery!(skip, dialect, "no connection");
            return skipped(registry, DiscoveryStatus::NoConnection);
        }
        Err(err) => {
            typeres_trace_discovery!(failed, dialect, err);
            return skipped(registry, DiscoveryStatus::Failed(err.to_string()));
        }
    };

    let schemas = config.effective_schemas();
    let mut traced = TracedConnection { inner: connection };
    let udts = match discovery.discover_udts(&mut traced, &schemas) {
        Ok(udts) => udts,
        Err(err) => {
            typeres_trace_discovery!(failed, dialect, err);
            return skipped(registry, DiscoveryStatus::Failed(err.to_string()));
        }
    };

    let mut builder = registry.to_builder();
    for udt in &udts {
        builder.insert(udt.name.as_str(), discovery.udt_type_code(udt));
    }
    LoadOutcome {
        registry: builder.build(),
        discovery: DiscoveryStatus::Completed {
            discovered: udts.len(),
        },
        discovered: udts,
    }
}

/// Logs every discovery query before handing it to the driver.
struct TracedConnection<'c> {
    inner: &'c mut dyn CatalogConnection,
}

impl CatalogConnection for TracedConnection<'_> {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>> {
        typeres_trace_query!(sql, params.len());
        self.inner.query(sql, params)
    }
}
