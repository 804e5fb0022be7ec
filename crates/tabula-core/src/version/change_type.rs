use crate::Error;

use std::{fmt, str::FromStr};

/// The kind of change a new model version represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Major,
    Minor,
    Patch,
}

impl ChangeType {
    /// The menu number used by interactive prompts.
    pub fn number(self) -> u8 {
        match self {
            ChangeType::Major => 1,
            ChangeType::Minor => 2,
            ChangeType::Patch => 3,
        }
    }
}

/// Accepts the prompt answers `1`, `2`, `3` as well as `major`, `minor` and
/// `patch` in any case.
impl FromStr for ChangeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "major" => Ok(ChangeType::Major),
            "2" | "minor" => Ok(ChangeType::Minor),
            "3" | "patch" => Ok(ChangeType::Patch),
            other => Err(Error::adhoc(format!(
                "invalid change type '{other}'; expected 1 (major), 2 (minor) or 3 (patch)"
            ))),
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeType::Major => "major",
            ChangeType::Minor => "minor",
            ChangeType::Patch => "patch",
        })
    }
}
