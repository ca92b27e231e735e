#![allow(dead_code)]

use typeres::prelude::*;
use typeres::Result;

/// In-memory source that answers every discovery query with `udt_rows` and
/// records the bound parameters.
pub struct FakeDatabase {
    catalog: Vec<CatalogEntry>,
    udt_rows: Vec<CatalogRow>,
    pub queries: Vec<Vec<String>>,
}

impl FakeDatabase {
    pub fn new(catalog: &[(&str, TypeCode)]) -> Self {
        Self {
            catalog: catalog
                .iter()
                .map(|(name, code)| CatalogEntry::new(*name, *code))
                .collect(),
            udt_rows: Vec::new(),
            queries: Vec::new(),
        }
    }

    pub fn with_udt(mut self, name: &str, kind: &str, schema: &str) -> Self {
        self.udt_rows
            .push([Some(name), Some(kind), Some(schema)].into_iter().collect());
        self
    }
}

impl MetadataSource for FakeDatabase {
    fn type_catalog(&mut self) -> Result<Vec<CatalogEntry>> {
        Ok(self.catalog.clone())
    }

    fn catalog_connection(&mut self) -> Result<Option<&mut dyn CatalogConnection>> {
        Ok(Some(self))
    }
}

impl CatalogConnection for FakeDatabase {
    fn query(&mut self, _sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>> {
        self.queries
            .push(params.iter().map(|p| p.to_string()).collect());
        Ok(self.udt_rows.clone())
    }
}
