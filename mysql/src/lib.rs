//! MySQL type strategy for typeres.
//!
//! MySQL has no user-defined types to discover; the strategy only corrects
//! the driver catalog and widens unsigned integer columns.

mod strategy;

pub use strategy::MySqlTypeStrategy;
