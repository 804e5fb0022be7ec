mod glue;
pub use glue::Glue;

mod s3;
pub use s3::S3;

mod ssm;
pub use ssm::Ssm;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tabula_core::{Error, Result};
use tracing::debug;
use url::Url;

/// Shared AWS configuration from which the Glue, SSM and S3 drivers are
/// created.
#[derive(Debug, Clone)]
pub struct Aws {
    sdk_config: SdkConfig,

    /// Set when talking to a custom endpoint (LocalStack, moto), which only
    /// serves path-style bucket addressing.
    force_path_style: bool,
}

impl Aws {
    pub fn new(sdk_config: SdkConfig) -> Self {
        Self {
            sdk_config,
            force_path_style: false,
        }
    }

    /// Loads configuration from the standard AWS environment: variables,
    /// profiles and instance metadata.
    pub async fn from_env() -> Self {
        Self::load(None, None).await
    }

    /// Loads configuration from the environment, overriding the region and
    /// the service endpoint when given.
    pub async fn load(region: Option<&str>, endpoint_url: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }

        if let Some(endpoint_url) = endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        debug!(?region, ?endpoint_url, "loading AWS configuration");

        Self {
            sdk_config: loader.load().await,
            force_path_style: endpoint_url.is_some(),
        }
    }

    /// Connects using an `aws://` URL.
    ///
    /// `aws://` alone uses the environment. A host (and optional port) points
    /// every client at `http://host:port`; a `region` query parameter sets
    /// the region: `aws://localhost:4566?region=eu-west-2`.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "aws" {
            return Err(Error::adhoc(format!(
                "connection URL does not have an `aws` scheme; url={url}"
            )));
        }

        let mut region = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "region" => region = Some(value.into_owned()),
                _ => {
                    return Err(Error::adhoc(format!(
                        "unknown connection URL parameter `{key}`; url={url}"
                    )))
                }
            }
        }

        let endpoint_url = url.host_str().filter(|host| !host.is_empty()).map(|host| {
            let mut endpoint_url = format!("http://{host}");

            if let Some(port) = url.port() {
                endpoint_url.push_str(&format!(":{port}"));
            }

            endpoint_url
        });

        Ok(Self::load(region.as_deref(), endpoint_url.as_deref()).await)
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    /// Glue Data Catalog driver.
    pub fn glue(&self) -> Glue {
        Glue::new(aws_sdk_glue::Client::new(&self.sdk_config))
    }

    /// SSM Parameter Store driver.
    pub fn ssm(&self) -> Ssm {
        Ssm::new(aws_sdk_ssm::Client::new(&self.sdk_config))
    }

    /// S3 driver.
    pub fn s3(&self) -> S3 {
        let config = aws_sdk_s3::config::Builder::from(&self.sdk_config)
            .force_path_style(self.force_path_style)
            .build();

        S3::new(aws_sdk_s3::Client::from_conf(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_rejects_other_schemes() {
        let err = Aws::connect("dynamodb://localhost:8000").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "connection URL does not have an `aws` scheme; url=dynamodb://localhost:8000"
        );
    }

    #[tokio::test]
    async fn connect_rejects_unknown_parameters() {
        let err = Aws::connect("aws://localhost:4566?profile=dev")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("unknown connection URL parameter `profile`"));
    }

    #[tokio::test]
    async fn connect_rejects_unparsable_url() {
        let err = Aws::connect("not a url").await.unwrap_err();
        assert!(err.is_driver_operation_failed());
    }
}
