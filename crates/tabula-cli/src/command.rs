mod schema;
pub use schema::SchemaCommand;

mod version;
pub use version::VersionCommand;
