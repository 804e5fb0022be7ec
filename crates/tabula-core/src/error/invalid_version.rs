use super::Error;

/// Error when a string is not a `major.minor.patch` version.
#[derive(Debug)]
pub(super) struct InvalidVersion {
    value: Box<str>,
}

impl std::error::Error for InvalidVersion {}

impl core::fmt::Display for InvalidVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid version '{}': expected `major.minor.patch`",
            self.value
        )
    }
}

impl Error {
    /// Creates an invalid version error for the rejected input.
    pub fn invalid_version(value: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidVersion(InvalidVersion {
            value: value.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid version error.
    pub fn is_invalid_version(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidVersion(_)))
    }
}
