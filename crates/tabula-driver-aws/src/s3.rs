use tabula_core::{async_trait, version::ObjectStore, Error, Result};

use aws_sdk_s3::{primitives::ByteStream, Client};
use tracing::debug;

/// [`ObjectStore`] backed by Amazon S3.
#[derive(Debug, Clone)]
pub struct S3 {
    client: Client,
}

impl S3 {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3 {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        debug!(bucket, key, bytes = body.len(), "uploading S3 object");

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(Error::driver_operation_failed)?;

        Ok(())
    }
}
