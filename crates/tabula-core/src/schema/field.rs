use super::Type;

/// A named member of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, case preserved from the descriptor
    pub name: String,

    /// Field type
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
