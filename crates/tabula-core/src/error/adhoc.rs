use super::Error;

/// An error carrying only a message.
///
/// Used for context messages and for failures that have no structured kind.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from a format string.
    ///
    /// Prefer the [`err!`](crate::err) and [`bail!`](crate::bail) macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        match args.as_str() {
            Some(message) => Error::adhoc(message),
            None => Error::adhoc(args.to_string()),
        }
    }

    /// Creates an error from a plain message.
    pub fn adhoc(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Adhoc(AdhocError {
            message: message.into().into(),
        }))
    }
}
