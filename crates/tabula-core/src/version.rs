//! Semantic versioning of model artifacts.
//!
//! The current version lives in a [`ParameterStore`] as the JSON document
//! `{"Current Version": "1.2.3"}`. Each release uploads the serialized model to
//! an [`ObjectStore`] under `<prefix>/<version>/<artifact>` and then moves the
//! parameter forward.

mod change_type;
pub use change_type::ChangeType;

mod manager;
pub use manager::{VersionConfig, VersionManager};

mod number;
pub use number::Version;

mod prompt;
pub use prompt::Prompt;

mod store;
pub use store::{ObjectStore, ParameterStore};
