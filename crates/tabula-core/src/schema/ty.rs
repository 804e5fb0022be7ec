use super::{Field, PrimitiveType};

use std::fmt;

/// A resolved column type.
///
/// Built bottom-up by [`resolve_type`](super::resolve_type) and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A scalar value
    Primitive(PrimitiveType),

    /// A variable-length list of a single element type
    List(Box<Type>),

    /// An ordered set of named fields. Field order is significant.
    Record(Vec<Field>),

    /// A map from `key` to `value`.
    ///
    /// Tabular targets without a general map type store this as a list of
    /// two-field records; see [`Type::to_list_of_records`].
    KeyValueList(Box<Type>, Box<Type>),
}

impl Type {
    /// Field name of the key in the record form of a [`Type::KeyValueList`].
    pub const KEY_FIELD: &'static str = "key";

    /// Field name of the value in the record form of a [`Type::KeyValueList`].
    pub const VALUE_FIELD: &'static str = "value";

    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn record(fields: impl IntoIterator<Item = Field>) -> Self {
        Self::Record(fields.into_iter().collect())
    }

    pub fn key_value_list(key: impl Into<Self>, value: impl Into<Self>) -> Self {
        Self::KeyValueList(Box::new(key.into()), Box::new(value.into()))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn is_key_value_list(&self) -> bool {
        matches!(self, Self::KeyValueList(..))
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            Self::Primitive(ty) => Some(*ty),
            _ => None,
        }
    }

    #[track_caller]
    pub fn unwrap_list_ref(&self) -> &Type {
        match self {
            Self::List(items) => items,
            _ => panic!("expected Type::List; actual={self:#?}"),
        }
    }

    #[track_caller]
    pub fn unwrap_record_ref(&self) -> &[Field] {
        match self {
            Self::Record(fields) => fields,
            _ => panic!("expected Type::Record; actual={self:#?}"),
        }
    }

    /// Rewrites every [`Type::KeyValueList`] in this tree as a list of
    /// `{key, value}` records.
    ///
    /// ```
    /// # use tabula_core::schema::{Field, PrimitiveType, Type};
    /// let map = Type::key_value_list(PrimitiveType::Utf8, PrimitiveType::Int64);
    /// assert_eq!(
    ///     map.to_list_of_records(),
    ///     Type::list(Type::record([
    ///         Field::new("key", PrimitiveType::Utf8),
    ///         Field::new("value", PrimitiveType::Int64),
    ///     ])),
    /// );
    /// ```
    pub fn to_list_of_records(&self) -> Type {
        match self {
            Self::Primitive(ty) => Self::Primitive(*ty),
            Self::List(item) => Self::list(item.to_list_of_records()),
            Self::Record(fields) => Self::Record(
                fields
                    .iter()
                    .map(|field| Field::new(field.name.clone(), field.ty.to_list_of_records()))
                    .collect(),
            ),
            Self::KeyValueList(key, value) => Self::list(Self::record([
                Field::new(Self::KEY_FIELD, key.to_list_of_records()),
                Field::new(Self::VALUE_FIELD, value.to_list_of_records()),
            ])),
        }
    }

    /// Nesting depth; primitives have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Primitive(_) => 1,
            Self::List(item) => 1 + item.depth(),
            Self::Record(fields) => 1 + fields.iter().map(|f| f.ty.depth()).max().unwrap_or(0),
            Self::KeyValueList(key, value) => 1 + key.depth().max(value.depth()),
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

/// Renders the type back into the catalog grammar, using canonical primitive
/// names.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => fmt::Display::fmt(ty, f),
            Self::List(item) => write!(f, "array<{item}>"),
            Self::Record(fields) => {
                f.write_str("struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", field.name, field.ty)?;
                }
                f.write_str(">")
            }
            Self::KeyValueList(key, value) => write!(f, "map<{key},{value}>"),
        }
    }
}
