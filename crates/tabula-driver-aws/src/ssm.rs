use tabula_core::{async_trait, version::ParameterStore, Error, Result};

use aws_sdk_ssm::{types::ParameterType, Client};
use tracing::debug;

/// [`ParameterStore`] backed by AWS Systems Manager Parameter Store.
///
/// Values are stored as plain `String` parameters.
#[derive(Debug, Clone)]
pub struct Ssm {
    client: Client,
}

impl Ssm {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for Ssm {
    async fn get_value(&self, key: &str) -> Result<String> {
        debug!(key, "reading SSM parameter");

        let res = self
            .client
            .get_parameter()
            .name(key)
            .with_decryption(false)
            .send()
            .await
            .map_err(|err| {
                let not_found = err
                    .as_service_error()
                    .is_some_and(|e| e.is_parameter_not_found());

                if not_found {
                    Error::parameter_not_found(key)
                } else {
                    Error::driver_operation_failed(err)
                }
            })?;

        res.parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| Error::parameter_not_found(key))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, "writing SSM parameter");

        self.client
            .put_parameter()
            .name(key)
            .value(value)
            .r#type(ParameterType::String)
            .overwrite(true)
            .send()
            .await
            .map_err(Error::driver_operation_failed)?;

        Ok(())
    }
}
