use super::Error;

/// Error when the catalog reports that a database or table does not exist.
///
/// Catalog drivers return this instead of [`Error::catalog_access`] so that
/// callers can tell a missing table apart from transport or permission
/// failures.
#[derive(Debug)]
pub(super) struct TableNotFound {
    database: Box<str>,
    table: Box<str>,
}

impl std::error::Error for TableNotFound {}

impl core::fmt::Display for TableNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table '{}.{}' not found", self.database, self.table)
    }
}

impl Error {
    /// Creates a table not found error naming both the database and the table.
    pub fn table_not_found(database: impl Into<String>, table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNotFound(TableNotFound {
            database: database.into().into(),
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a table not found error.
    pub fn is_table_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TableNotFound(_)))
    }
}
