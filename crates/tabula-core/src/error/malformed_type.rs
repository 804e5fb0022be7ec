use super::Error;

/// Error when a type descriptor does not follow the type grammar.
///
/// This occurs when:
/// - Angle brackets are unbalanced (`array<int`)
/// - A nested type has no parameters (`array<>`, `struct`)
/// - A struct field is missing its `name:` prefix
/// - A map does not have exactly a key and a value type
/// - A primitive type is given angle-bracket parameters (`int<8>`)
#[derive(Debug)]
pub(super) struct MalformedType {
    descriptor: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for MalformedType {}

impl core::fmt::Display for MalformedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed type '{}': {}", self.descriptor, self.reason)
    }
}

impl Error {
    /// Creates a malformed type error for `descriptor`.
    pub fn malformed_type(descriptor: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedType(MalformedType {
            descriptor: descriptor.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a malformed type error.
    pub fn is_malformed_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MalformedType(_)))
    }
}
