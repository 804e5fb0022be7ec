use super::ChangeType;
use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// A `major.minor.patch` version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The version assigned when no version has been recorded yet.
    pub const INITIAL: Version = Version::new(0, 1, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the next version for a change of the given kind.
    ///
    /// Lower components are reset: a major change of `1.2.3` gives `2.0.0`, a
    /// minor change gives `1.3.0`, a patch gives `1.2.4`.
    ///
    /// Fails with an invalid version error when the incremented component
    /// would overflow.
    pub fn increment(self, change: ChangeType) -> Result<Version> {
        let next = match change {
            ChangeType::Major => self
                .major
                .checked_add(1)
                .map(|major| Version::new(major, 0, 0)),
            ChangeType::Minor => self
                .minor
                .checked_add(1)
                .map(|minor| Version::new(self.major, minor, 0)),
            ChangeType::Patch => self
                .patch
                .checked_add(1)
                .map(|patch| Version::new(self.major, self.minor, patch)),
        };

        next.ok_or_else(|| Error::invalid_version(self.to_string()))
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.').map(str::parse::<u64>);

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(major)), Some(Ok(minor)), Some(Ok(patch)), None) => {
                Ok(Version::new(major, minor, patch))
            }
            _ => Err(Error::invalid_version(s)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
