#[cfg(feature = "arrow")]
pub mod arrow;

mod builder;
pub use builder::build_schema;

mod field;
pub use field::Field;

mod grammar;
pub use grammar::{parse_type_descriptor, split_top_level};

mod primitive;
pub use primitive::PrimitiveType;

mod resolve;
pub use resolve::{resolve_type, MAX_NESTING_DEPTH};

mod ty;
pub use ty::Type;

use indexmap::IndexMap;
use std::fmt;

/// The resolved schema of a table: column names mapped to their types, in
/// catalog order.
///
/// A schema is rebuilt from the catalog on every [`build_schema`] call; it has
/// no identity of its own.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: IndexMap<String, Type>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the type of the column named `name`.
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over `(name, type)` pairs in column order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Type)> + '_ {
        self.columns.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Column names in column order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Appends a column, returning the previous type if the name was already
    /// present. A replaced column keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, ty: Type) -> Option<Type> {
        self.columns.insert(name.into(), ty)
    }
}

impl PartialEq for Schema {
    /// Two schemas are equal when they have the same columns in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len() && self.columns.iter().eq(other.columns.iter())
    }
}

impl Eq for Schema {}

impl<N: Into<String>> FromIterator<(N, Type)> for Schema {
    fn from_iter<I: IntoIterator<Item = (N, Type)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        }
    }
}

impl IntoIterator for Schema {
    type Item = (String, Type);
    type IntoIter = indexmap::map::IntoIter<String, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, ty)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{name}: {ty}")?;
        }
        Ok(())
    }
}
