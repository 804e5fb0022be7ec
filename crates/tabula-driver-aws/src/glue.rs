use tabula_core::{
    async_trait,
    catalog::{Catalog, Column},
    err, Error, Result,
};

use aws_sdk_glue::{types::Table, Client};
use tracing::debug;

/// [`Catalog`] backed by the AWS Glue Data Catalog.
#[derive(Debug, Clone)]
pub struct Glue {
    /// Handle to the AWS SDK client
    client: Client,

    include_partition_keys: bool,
}

impl Glue {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            include_partition_keys: false,
        }
    }

    /// Also report the table's partition keys, after its regular columns.
    pub fn include_partition_keys(mut self, include: bool) -> Self {
        self.include_partition_keys = include;
        self
    }
}

#[async_trait]
impl Catalog for Glue {
    async fn get_table_columns(&self, database: &str, table: &str) -> Result<Vec<Column>> {
        debug!(database, table, "fetching Glue table");

        let res = self
            .client
            .get_table()
            .database_name(database)
            .name(table)
            .send()
            .await
            .map_err(|err| {
                let not_found = err
                    .as_service_error()
                    .is_some_and(|e| e.is_entity_not_found_exception());

                if not_found {
                    Error::table_not_found(database, table)
                } else {
                    Error::catalog_access(err)
                }
            })?;

        let Some(glue_table) = res.table() else {
            return Err(Error::table_not_found(database, table));
        };

        columns_from_table(glue_table, self.include_partition_keys)
    }
}

fn columns_from_table(table: &Table, include_partition_keys: bool) -> Result<Vec<Column>> {
    let columns = table
        .storage_descriptor()
        .map(|storage| storage.columns())
        .unwrap_or_default();

    let partition_keys = if include_partition_keys {
        table.partition_keys()
    } else {
        &[]
    };

    columns
        .iter()
        .chain(partition_keys)
        .map(|column| match column.r#type() {
            Some(ty) => Ok(Column::new(column.name(), ty)),
            None => Err(Error::catalog_access(err!(
                "Glue column '{}.{}' has no type",
                table.name(),
                column.name()
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_glue::types::{Column as GlueColumn, StorageDescriptor};

    fn glue_column(name: &str, ty: Option<&str>) -> GlueColumn {
        GlueColumn::builder()
            .name(name)
            .set_type(ty.map(str::to_string))
            .build()
            .unwrap()
    }

    fn glue_table() -> Table {
        Table::builder()
            .name("events")
            .storage_descriptor(
                StorageDescriptor::builder()
                    .columns(glue_column("id", Some("bigint")))
                    .columns(glue_column("tags", Some("array<string>")))
                    .build(),
            )
            .partition_keys(glue_column("dt", Some("date")))
            .build()
            .unwrap()
    }

    #[test]
    fn reads_storage_descriptor_columns_in_order() {
        let columns = columns_from_table(&glue_table(), false).unwrap();
        assert_eq!(
            columns,
            [
                Column::new("id", "bigint"),
                Column::new("tags", "array<string>")
            ]
        );
    }

    #[test]
    fn appends_partition_keys_when_asked() {
        let columns = columns_from_table(&glue_table(), true).unwrap();
        assert_eq!(columns.last(), Some(&Column::new("dt", "date")));
        assert_eq!(columns.len(), 3);
    }

    #[test]
    fn table_without_storage_descriptor_has_no_columns() {
        let table = Table::builder().name("empty").build().unwrap();
        assert!(columns_from_table(&table, false).unwrap().is_empty());
    }

    #[test]
    fn column_without_type_is_a_catalog_error() {
        let table = Table::builder()
            .name("broken")
            .storage_descriptor(
                StorageDescriptor::builder()
                    .columns(glue_column("id", None))
                    .build(),
            )
            .build()
            .unwrap();

        let err = columns_from_table(&table, false).unwrap_err();
        assert!(err.is_catalog_access());
        assert_eq!(
            err.to_string(),
            "catalog access failed: Glue column 'broken.id' has no type"
        );
    }
}
