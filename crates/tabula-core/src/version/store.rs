use crate::async_trait;

use std::fmt::Debug;

/// A remote key-value store holding string parameters.
#[async_trait]
pub trait ParameterStore: Debug + Send + Sync {
    /// Returns the value stored under `key`.
    ///
    /// Fails with [`Error::parameter_not_found`](crate::Error::parameter_not_found)
    /// when no such parameter exists.
    async fn get_value(&self, key: &str) -> crate::Result<String>;

    /// Creates or overwrites the value stored under `key`.
    async fn put_value(&self, key: &str, value: &str) -> crate::Result<()>;
}

/// A remote blob store.
#[async_trait]
pub trait ObjectStore: Debug + Send + Sync {
    /// Uploads `body` to `bucket` under `key`, replacing any existing object.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> crate::Result<()>;
}
