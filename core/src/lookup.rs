//! Dialect → strategy lookup

use crate::{DialectTypeStrategy, Result, TypeError};
use hashbrown::HashMap;
use std::sync::Arc;
use typeres_types::Dialect;

/// An explicit, finite mapping from [`Dialect`] to a pre-built strategy.
///
/// Strategies are constructed by the caller and registered once; lookups
/// never construct anything.
///
/// ```
/// use typeres_core::{DefaultTypeStrategy, StrategyRegistry};
/// use typeres_types::Dialect;
///
/// let mut strategies = StrategyRegistry::new();
/// strategies.register(Dialect::SQLite, DefaultTypeStrategy::new());
///
/// assert!(strategies.lookup(Dialect::SQLite).is_ok());
/// assert!(strategies.lookup(Dialect::MySQL).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<Dialect, Arc<dyn DialectTypeStrategy>>,
}

impl StrategyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `strategy` for `dialect`, replacing any previous one.
    pub fn register<S>(&mut self, dialect: Dialect, strategy: S) -> &mut Self
    where
        S: DialectTypeStrategy + 'static,
    {
        self.register_shared(dialect, Arc::new(strategy))
    }

    /// Register an already shared strategy, e.g. one instance for several
    /// dialects.
    pub fn register_shared(
        &mut self,
        dialect: Dialect,
        strategy: Arc<dyn DialectTypeStrategy>,
    ) -> &mut Self {
        self.strategies.insert(dialect, strategy);
        self
    }

    pub fn lookup(&self, dialect: Dialect) -> Result<&dyn DialectTypeStrategy> {
        self.strategies
            .get(&dialect)
            .map(|strategy| strategy.as_ref())
            .ok_or_else(|| TypeError::UnknownDialect(dialect.to_string()))
    }

    /// Resolve a dialect identifier such as `"pg"` or `"mysql"`.
    pub fn lookup_name(&self, name: &str) -> Result<&dyn DialectTypeStrategy> {
        let dialect =
            Dialect::parse(name).ok_or_else(|| TypeError::UnknownDialect(name.to_string()))?;
        self.lookup(dialect)
    }

    #[must_use]
    pub fn contains(&self, dialect: Dialect) -> bool {
        self.strategies.contains_key(&dialect)
    }

    /// Registered dialects, in [`Dialect::ALL`] order.
    pub fn dialects(&self) -> impl Iterator<Item = Dialect> + '_ {
        Dialect::ALL.into_iter().filter(|d| self.contains(*d))
    }
}
