use super::Error;

/// Error when the parameter store has no value under the requested name.
#[derive(Debug)]
pub(super) struct ParameterNotFound {
    name: Box<str>,
}

impl std::error::Error for ParameterNotFound {}

impl core::fmt::Display for ParameterNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "parameter '{}' not found", self.name)
    }
}

impl Error {
    /// Creates a parameter not found error.
    pub fn parameter_not_found(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ParameterNotFound(ParameterNotFound {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a parameter not found error.
    pub fn is_parameter_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ParameterNotFound(_)))
    }
}
