use anyhow::{Context, Result};
use serde::Deserialize;
use std::{path::Path, str::FromStr};
use tabula_core::version::VersionConfig;

/// Configuration for Tabula CLI operations
///
/// Loaded from a TOML file:
///
/// ```toml
/// [aws]
/// region = "eu-west-2"
///
/// [version]
/// parameter_name = "model/churn/version"
/// bucket = "my-model-bucket"
/// prefix = "models/churn"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// AWS client configuration
    pub aws: AwsConfig,

    /// Model version configuration
    pub version: VersionSettings,
}

/// AWS client settings; unset values come from the environment
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Where model versions and artifacts are kept
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, clap::Args)]
#[serde(default, deny_unknown_fields)]
pub struct VersionSettings {
    /// Parameter Store name holding the current version
    #[arg(long = "parameter", global = true)]
    pub parameter_name: Option<String>,

    /// S3 bucket for model artifacts
    #[arg(long, global = true)]
    pub bucket: Option<String>,

    /// S3 key prefix for model artifacts
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Artifact file name inside each version folder
    #[arg(long, global = true)]
    pub artifact_name: Option<String>,
}

impl Config {
    /// File loaded when no `--config` is given
    pub const DEFAULT_FILE: &'static str = "tabula.toml";

    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Set the AWS region
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.aws.region = Some(region.into());
        self
    }

    /// Set a custom AWS endpoint
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.aws.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Set the version configuration
    pub fn version(mut self, version: VersionSettings) -> Self {
        self.version = version;
        self
    }

    /// Overlays every value set in `other` onto `self`
    pub fn merge(self, other: Config) -> Self {
        Self {
            aws: AwsConfig {
                region: other.aws.region.or(self.aws.region),
                endpoint_url: other.aws.endpoint_url.or(self.aws.endpoint_url),
            },
            version: self.version.merge(other.version),
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl VersionSettings {
    /// Overlays every value set in `other` onto `self`
    pub fn merge(self, other: VersionSettings) -> Self {
        Self {
            parameter_name: other.parameter_name.or(self.parameter_name),
            bucket: other.bucket.or(self.bucket),
            prefix: other.prefix.or(self.prefix),
            artifact_name: other.artifact_name.or(self.artifact_name),
        }
    }

    /// Builds the version manager configuration, failing on missing values
    pub fn to_version_config(&self) -> Result<VersionConfig> {
        fn required<'a>(value: &'a Option<String>, key: &str, flag: &str) -> Result<&'a str> {
            value.as_deref().with_context(|| {
                format!("missing `version.{key}`; set it in the configuration file or pass --{flag}")
            })
        }

        let mut config = VersionConfig::new(
            required(&self.parameter_name, "parameter_name", "parameter")?,
            required(&self.bucket, "bucket", "bucket")?,
            required(&self.prefix, "prefix", "prefix")?,
        );

        if let Some(artifact_name) = &self.artifact_name {
            config = config.artifact_name(artifact_name);
        }

        Ok(config)
    }
}
