use crate::async_trait;

use std::fmt::Debug;

/// A column as described by the catalog, before its type is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Raw type descriptor, e.g. `array<struct<x:int>>`
    pub ty: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A metadata service describing named tables and their column types.
#[async_trait]
pub trait Catalog: Debug + Send + Sync {
    /// Returns the columns of `database.table` in catalog order.
    ///
    /// Implementations return [`Error::table_not_found`](crate::Error::table_not_found)
    /// when the database or table does not exist and
    /// [`Error::catalog_access`](crate::Error::catalog_access) for every other
    /// failure.
    async fn get_table_columns(&self, database: &str, table: &str) -> crate::Result<Vec<Column>>;
}
