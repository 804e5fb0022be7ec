use super::Error;

/// Error when a type descriptor names a base type that has no mapping.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    ty: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported type '{}'", self.ty)
    }
}

impl Error {
    /// Creates an unsupported type error for the given base type name.
    pub fn unsupported_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedType(_)))
    }
}
