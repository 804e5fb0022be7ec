//! Core of Tabula: translating catalog column types into typed schemas and
//! tracking model versions.
//!
//! The [`schema`] module parses the catalog's type grammar
//! (`array<T>`, `struct<name:T,...>`, `map<K,V>` and primitives) into
//! [`schema::Type`] trees. The [`version`] module manages a semantic version
//! stored in a parameter store and uploads versioned model artifacts.
//!
//! Remote services sit behind the [`Catalog`], [`version::ParameterStore`] and
//! [`version::ObjectStore`] traits; `tabula-driver-aws` implements them.

pub mod catalog;
pub use catalog::Catalog;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{build_schema, parse_type_descriptor, resolve_type, split_top_level, Schema};

pub mod version;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
