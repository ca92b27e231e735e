//! In-memory metadata sources and strategies for loader tests

#![allow(dead_code)]

use typeres_core::{
    CatalogConnection, CatalogEntry, CatalogRow, DialectTypeStrategy, MetadataSource, Result,
    TypeError, TypeRegistry, UdtDescriptor, UdtDiscovery, UdtKind,
};

/// Records every query and its bound parameters, then answers with `rows`.
#[derive(Debug, Default)]
pub struct RecordingConnection {
    pub rows: Vec<CatalogRow>,
    pub fail_with: Option<String>,
    pub queries: Vec<(String, Vec<String>)>,
}

impl RecordingConnection {
    pub fn returning<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = [&'static str; 3]>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl CatalogConnection for RecordingConnection {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>> {
        self.queries.push((
            sql.to_string(),
            params.iter().map(|p| p.to_string()).collect(),
        ));
        match &self.fail_with {
            Some(message) => Err(TypeError::Discovery(message.clone())),
            None => Ok(self.rows.clone()),
        }
    }
}

#[derive(Debug)]
pub enum Connection {
    Available(RecordingConnection),
    Missing,
    Broken(String),
}

/// A metadata source with a canned catalog.
#[derive(Debug)]
pub struct FakeSource {
    pub catalog: Result<Vec<CatalogEntry>>,
    pub connection: Connection,
    pub connection_requests: usize,
}

impl FakeSource {
    pub fn new<I, N>(catalog: I) -> Self
    where
        I: IntoIterator<Item = (N, typeres_core::TypeCode)>,
        N: Into<typeres_core::TypeName>,
    {
        Self {
            catalog: Ok(catalog.into_iter().map(CatalogEntry::from).collect()),
            connection: Connection::Missing,
            connection_requests: 0,
        }
    }

    pub fn failing(err: TypeError) -> Self {
        Self {
            catalog: Err(err),
            connection: Connection::Missing,
            connection_requests: 0,
        }
    }

    pub fn with_connection(mut self, connection: RecordingConnection) -> Self {
        self.connection = Connection::Available(connection);
        self
    }

    pub fn with_broken_connection(mut self, message: &str) -> Self {
        self.connection = Connection::Broken(message.to_string());
        self
    }

    /// Queries seen by the connection, if there is one.
    pub fn queries(&self) -> &[(String, Vec<String>)] {
        match &self.connection {
            Connection::Available(connection) => &connection.queries,
            _ => &[],
        }
    }
}

impl MetadataSource for FakeSource {
    fn type_catalog(&mut self) -> Result<Vec<CatalogEntry>> {
        self.catalog.clone()
    }

    fn catalog_connection(&mut self) -> Result<Option<&mut dyn CatalogConnection>> {
        self.connection_requests += 1;
        match &mut self.connection {
            Connection::Available(connection) => Ok(Some(connection)),
            Connection::Missing => Ok(None),
            Connection::Broken(message) => Err(TypeError::Discovery(message.clone())),
        }
    }
}

pub const UDT_QUERY: &str = "SELECT name, kind, schema FROM fixture_types WHERE schema IN (..)";

/// Discovery that issues one query and reads `(name, kind, schema)` rows.
#[derive(Debug, Default)]
pub struct FixtureDiscovery;

impl UdtDiscovery for FixtureDiscovery {
    fn discover_udts(
        &self,
        connection: &mut dyn CatalogConnection,
        schemas: &[String],
    ) -> Result<Vec<UdtDescriptor>> {
        let params: Vec<&str> = schemas.iter().map(String::as_str).collect();
        connection
            .query(UDT_QUERY, &params)?
            .iter()
            .map(|row| {
                let kind = row
                    .get(1)
                    .and_then(UdtKind::from_catalog_code)
                    .ok_or_else(|| TypeError::Discovery("bad kind".into()))?;
                Ok(UdtDescriptor::new(
                    row.get(0).unwrap_or_default(),
                    kind,
                    row.get(2).unwrap_or_default(),
                ))
            })
            .collect()
    }
}

/// A strategy with a configurable extra-type table and optional discovery.
#[derive(Debug)]
pub struct FixtureStrategy {
    pub extra: TypeRegistry,
    pub discovery: Option<FixtureDiscovery>,
}

impl FixtureStrategy {
    pub fn new(extra: TypeRegistry) -> Self {
        Self {
            extra,
            discovery: Some(FixtureDiscovery),
        }
    }

    pub fn without_discovery(extra: TypeRegistry) -> Self {
        Self {
            extra,
            discovery: None,
        }
    }
}

impl DialectTypeStrategy for FixtureStrategy {
    fn dialect_name(&self) -> &'static str {
        "fixture"
    }

    fn extra_types(&self) -> &TypeRegistry {
        &self.extra
    }

    fn udt_discovery(&self) -> Option<&dyn UdtDiscovery> {
        self.discovery.as_ref().map(|d| d as &dyn UdtDiscovery)
    }
}
