use super::{resolve_type, Schema};
use crate::{bail, err, Catalog, Error, Result};

use tracing::debug;

/// Builds the schema of `database.table` from the columns the catalog reports.
///
/// Columns are resolved in catalog order. The first column that fails to
/// resolve aborts the build; a partial schema is never returned.
///
/// # Errors
///
/// - [table not found](Error::table_not_found) when the catalog does not know
///   the database or table
/// - [catalog access](Error::catalog_access) for any other catalog failure
/// - [unsupported type](Error::unsupported_type) or
///   [malformed type](Error::malformed_type) for a column whose type cannot be
///   resolved, with the column name as context
pub async fn build_schema<C>(catalog: &C, database: &str, table: &str) -> Result<Schema>
where
    C: Catalog + ?Sized,
{
    let columns = catalog
        .get_table_columns(database, table)
        .await
        .map_err(|err| {
            if err.is_table_not_found() || err.is_catalog_access() {
                err
            } else {
                Error::catalog_access(err)
            }
        })?;

    debug!(database, table, columns = columns.len(), "resolving table schema");

    let mut schema = Schema::with_capacity(columns.len());

    for column in columns {
        let ty = resolve_type(&column.ty).map_err(|e| e.context(err!("column '{}'", column.name)))?;

        debug!(column = %column.name, raw = %column.ty, ty = %ty, "resolved column");

        if schema.contains(&column.name) {
            bail!(
                "duplicate column '{}' in table '{}.{}'",
                column.name,
                database,
                table
            );
        }

        schema.insert(column.name, ty);
    }

    Ok(schema)
}
