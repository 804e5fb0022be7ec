use super::Error;

/// Error when a call to the catalog fails for any reason other than the table
/// not existing.
///
/// This wraps the underlying client error: authentication failures,
/// throttling, transport errors, unexpected responses.
#[derive(Debug)]
pub(super) struct CatalogAccess {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for CatalogAccess {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for CatalogAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("catalog access failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates a catalog access error wrapping the client failure.
    pub fn catalog_access(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::CatalogAccess(CatalogAccess {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a catalog access error.
    pub fn is_catalog_access(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::CatalogAccess(_)))
    }
}
