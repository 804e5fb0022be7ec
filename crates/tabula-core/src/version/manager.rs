use super::{ChangeType, ObjectStore, ParameterStore, Prompt, Version};
use crate::{err, Result};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where a model's version and artifacts are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConfig {
    /// Name of the parameter holding the current version
    pub parameter_name: String,

    /// Bucket receiving model artifacts
    pub bucket: String,

    /// Key prefix for model artifacts
    pub prefix: String,

    /// File name of the artifact inside each version folder
    pub artifact_name: String,
}

impl VersionConfig {
    /// Default artifact file name.
    pub const DEFAULT_ARTIFACT_NAME: &'static str = "model.json";

    pub fn new(
        parameter_name: impl Into<String>,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            bucket: bucket.into(),
            prefix: prefix.into(),
            artifact_name: Self::DEFAULT_ARTIFACT_NAME.to_string(),
        }
    }

    /// Set the artifact file name
    pub fn artifact_name(mut self, artifact_name: impl Into<String>) -> Self {
        self.artifact_name = artifact_name.into();
        self
    }

    /// Object key of the artifact for `version`: `<prefix>/<version>/<artifact>`.
    pub fn artifact_key(&self, version: &Version) -> String {
        match self.prefix.trim_end_matches('/') {
            "" => format!("{version}/{}", self.artifact_name),
            prefix => format!("{prefix}/{version}/{}", self.artifact_name),
        }
    }
}

/// Parameter value layout.
#[derive(Debug, Serialize, Deserialize)]
struct VersionParameter {
    #[serde(rename = "Current Version")]
    current_version: String,
}

/// Tracks a model's semantic version and publishes versioned artifacts.
#[derive(Debug)]
pub struct VersionManager<P, O> {
    parameters: P,
    objects: O,
    config: VersionConfig,
}

impl<P: ParameterStore, O: ObjectStore> VersionManager<P, O> {
    pub fn new(parameters: P, objects: O, config: VersionConfig) -> Self {
        Self {
            parameters,
            objects,
            config,
        }
    }

    pub fn config(&self) -> &VersionConfig {
        &self.config
    }

    pub fn parameters(&self) -> &P {
        &self.parameters
    }

    pub fn objects(&self) -> &O {
        &self.objects
    }

    /// Reads the current version from the parameter store.
    pub async fn current_version(&self) -> Result<Version> {
        let raw = self
            .parameters
            .get_value(&self.config.parameter_name)
            .await?;

        let parameter: VersionParameter = serde_json::from_str(&raw).map_err(|e| {
            crate::Error::from(e).context(err!(
                "parameter '{}' is not a version document",
                self.config.parameter_name
            ))
        })?;

        parameter.current_version.parse()
    }

    /// Overwrites the stored version.
    pub async fn update_version(&self, version: &Version) -> Result<()> {
        let value = serde_json::to_string(&VersionParameter {
            current_version: version.to_string(),
        })?;

        self.parameters
            .put_value(&self.config.parameter_name, &value)
            .await?;

        info!(parameter = %self.config.parameter_name, %version, "updated current version");
        Ok(())
    }

    /// Computes the version following the current one.
    ///
    /// When no version has been stored yet this is [`Version::INITIAL`],
    /// whatever the change type.
    pub async fn new_version(&self, change: ChangeType) -> Result<Version> {
        match self.current_version().await {
            Ok(current) => current.increment(change),
            Err(e) if e.is_parameter_not_found() => {
                info!(
                    parameter = %self.config.parameter_name,
                    "no version recorded; starting at {}",
                    Version::INITIAL
                );
                Ok(Version::INITIAL)
            }
            Err(e) => Err(e),
        }
    }

    /// Serializes `model` as JSON and uploads it as the artifact of `version`.
    ///
    /// Returns the object key written.
    pub async fn save_model<M>(&self, model: &M, version: &Version) -> Result<String>
    where
        M: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(model)?;
        self.save_artifact(body, version).await
    }

    /// Uploads already-serialized artifact bytes for `version`.
    pub async fn save_artifact(&self, body: Vec<u8>, version: &Version) -> Result<String> {
        let key = self.config.artifact_key(version);

        debug!(bucket = %self.config.bucket, %key, bytes = body.len(), "uploading model artifact");
        self.objects
            .put_object(&self.config.bucket, &key, body)
            .await?;

        info!("saved model to s3://{}/{}", self.config.bucket, key);
        Ok(key)
    }

    /// Publishes `body` as the next version for a change of kind `change`.
    ///
    /// The artifact is uploaded before the parameter is moved forward, so a
    /// failed upload leaves the recorded version untouched.
    pub async fn release(&self, change: ChangeType, body: Vec<u8>) -> Result<Version> {
        let version = self.new_version(change).await?;
        self.save_artifact(body, &version).await?;
        self.update_version(&version).await?;
        Ok(version)
    }

    /// Asks which kind of change this is.
    ///
    /// An invalid answer is asked again once; a second invalid answer gives up
    /// and returns `None`.
    pub fn prompt_change(&self, prompt: &mut dyn Prompt) -> Result<Option<ChangeType>> {
        const QUESTION: &str = "Is this a \n1. Major?\n2. Minor?\n3. Patch change?\n(1/2/3)";

        for attempt in 0..2 {
            let answer = prompt.input(QUESTION)?;

            match answer.trim() {
                "1" => return Ok(Some(ChangeType::Major)),
                "2" => return Ok(Some(ChangeType::Minor)),
                "3" => return Ok(Some(ChangeType::Patch)),
                _ if attempt == 0 => {
                    prompt.notify("Invalid change type. Try again, choose 1, 2 or 3.")
                }
                _ => prompt.notify("Invalid change type. Model not saved."),
            }
        }

        Ok(None)
    }

    /// Interactively confirms, versions and saves `model` as JSON.
    ///
    /// Nothing is written unless the user answers `yes` and picks a valid
    /// change type. Returns the new version when the model was saved.
    pub async fn prompt_and_save<M>(
        &self,
        prompt: &mut dyn Prompt,
        model: &M,
    ) -> Result<Option<Version>>
    where
        M: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(model)?;
        self.prompt_and_release(prompt, body).await
    }

    /// Same as [`prompt_and_save`](Self::prompt_and_save) for an artifact
    /// that is already serialized.
    pub async fn prompt_and_release(
        &self,
        prompt: &mut dyn Prompt,
        body: Vec<u8>,
    ) -> Result<Option<Version>> {
        let answer =
            prompt.input("Do you want to save this new model version? (only yes to save)")?;

        if !answer.trim().eq_ignore_ascii_case("yes") {
            prompt.notify("Model not saved. Exiting.");
            return Ok(None);
        }

        let Some(change) = self.prompt_change(prompt)? else {
            return Ok(None);
        };

        let version = self.release(change, body).await?;

        prompt.notify(&format!(
            "Successfully saved model version {version} to s3://{}/{}",
            self.config.bucket,
            self.config.artifact_key(&version)
        ));

        Ok(Some(version))
    }
}
