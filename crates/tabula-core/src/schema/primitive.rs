use std::fmt;

/// A scalar column type.
///
/// `Datetime` and `Decimal` are type families: precision and scale are not
/// tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Signed 8-bit integer
    Int8,

    /// Signed 16-bit integer
    Int16,

    /// Signed 32-bit integer
    Int32,

    /// Signed 64-bit integer
    Int64,

    /// 32-bit floating point
    Float32,

    /// 64-bit floating point
    Float64,

    /// UTF-8 string
    Utf8,

    /// Boolean value
    Boolean,

    /// Calendar date
    Date,

    /// Timestamp of unspecified precision
    Datetime,

    /// Decimal of unspecified precision and scale
    Decimal,
}

/// Catalog type names and the primitive each one maps to. Lookups are made
/// with lowercased names.
static PRIMITIVES: &[(&str, PrimitiveType)] = &[
    ("tinyint", PrimitiveType::Int8),
    ("smallint", PrimitiveType::Int16),
    ("int", PrimitiveType::Int32),
    ("integer", PrimitiveType::Int32),
    ("bigint", PrimitiveType::Int64),
    ("float", PrimitiveType::Float32),
    ("double", PrimitiveType::Float64),
    ("string", PrimitiveType::Utf8),
    ("varchar", PrimitiveType::Utf8),
    ("char", PrimitiveType::Utf8),
    ("boolean", PrimitiveType::Boolean),
    ("date", PrimitiveType::Date),
    ("timestamp", PrimitiveType::Datetime),
    ("decimal", PrimitiveType::Decimal),
];

impl PrimitiveType {
    /// Looks up a catalog type name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        PRIMITIVES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, ty)| *ty)
    }

    /// The canonical catalog name of this type, the first entry of the lookup
    /// table that maps to it.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Int8 => "tinyint",
            PrimitiveType::Int16 => "smallint",
            PrimitiveType::Int32 => "int",
            PrimitiveType::Int64 => "bigint",
            PrimitiveType::Float32 => "float",
            PrimitiveType::Float64 => "double",
            PrimitiveType::Utf8 => "string",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Date => "date",
            PrimitiveType::Datetime => "timestamp",
            PrimitiveType::Decimal => "decimal",
        }
    }

    /// All catalog type names that resolve to a primitive.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PRIMITIVES.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
