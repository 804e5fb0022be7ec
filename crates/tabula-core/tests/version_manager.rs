mod support;

use serde::Serialize;
use support::{MemoryObjectStore, MemoryParameterStore, ScriptedPrompt};
use tabula_core::version::{ChangeType, Version, VersionConfig, VersionManager};

const PARAMETER: &str = "model/test/version";
const BUCKET: &str = "my-model-bucket";

#[derive(Debug, Serialize)]
struct DummyModel {
    version: &'static str,
    param1: i64,
    param2: i64,
}

fn fitted_model() -> DummyModel {
    DummyModel {
        version: "1.2.3",
        param1: 17,
        param2: 26,
    }
}

fn config() -> VersionConfig {
    VersionConfig::new(PARAMETER, BUCKET, "model/test/version")
}

fn manager_with(
    parameters: MemoryParameterStore,
) -> VersionManager<MemoryParameterStore, MemoryObjectStore> {
    VersionManager::new(parameters, MemoryObjectStore::default(), config())
}

fn manager() -> VersionManager<MemoryParameterStore, MemoryObjectStore> {
    manager_with(MemoryParameterStore::with(
        PARAMETER,
        r#"{"Current Version": "5.6.7"}"#,
    ))
}

fn empty_manager() -> VersionManager<MemoryParameterStore, MemoryObjectStore> {
    manager_with(MemoryParameterStore::default())
}

#[tokio::test]
async fn current_version_reads_parameter() {
    assert_eq!(
        manager().current_version().await.unwrap(),
        Version::new(5, 6, 7)
    );
}

#[tokio::test]
async fn current_version_fails_without_parameter() {
    let err = empty_manager().current_version().await.unwrap_err();
    assert!(err.is_parameter_not_found());
}

#[tokio::test]
async fn current_version_rejects_garbage_parameter() {
    let manager = manager_with(MemoryParameterStore::with(PARAMETER, "5.6.7"));
    let err = manager.current_version().await.unwrap_err();
    assert!(err
        .to_string()
        .starts_with("parameter 'model/test/version' is not a version document: json: "));
}

#[tokio::test]
async fn current_version_rejects_invalid_version() {
    let manager = manager_with(MemoryParameterStore::with(
        PARAMETER,
        r#"{"Current Version": "five"}"#,
    ));
    let err = manager.current_version().await.unwrap_err();
    assert!(err.is_invalid_version());
}

#[tokio::test]
async fn new_version_increments_current() {
    assert_eq!(
        manager().new_version(ChangeType::Minor).await.unwrap(),
        Version::new(5, 7, 0)
    );
}

#[tokio::test]
async fn new_version_without_parameter_starts_at_initial() {
    assert_eq!(
        empty_manager()
            .new_version(ChangeType::Major)
            .await
            .unwrap(),
        Version::INITIAL
    );
}

#[tokio::test]
async fn release_at_version_limit_saves_nothing() {
    let manager = manager_with(MemoryParameterStore::with(
        PARAMETER,
        r#"{"Current Version": "18446744073709551615.0.0"}"#,
    ));

    let err = manager
        .release(ChangeType::Major, b"{}".to_vec())
        .await
        .unwrap_err();

    assert!(err.is_invalid_version());
    assert!(manager.objects().keys().is_empty());
    assert_eq!(
        manager.parameters().get(PARAMETER).unwrap(),
        r#"{"Current Version": "18446744073709551615.0.0"}"#
    );
}

#[tokio::test]
async fn update_version_writes_json_document() {
    let manager = manager();
    manager
        .update_version(&Version::new(7, 8, 9))
        .await
        .unwrap();

    assert_eq!(
        manager.current_version().await.unwrap(),
        Version::new(7, 8, 9)
    );
    assert_eq!(
        manager.parameters().get(PARAMETER).unwrap(),
        r#"{"Current Version":"7.8.9"}"#
    );
}

#[tokio::test]
async fn save_model_writes_versioned_key() {
    let manager = manager();
    let key = manager
        .save_model(&fitted_model(), &Version::new(1, 2, 3))
        .await
        .unwrap();

    assert_eq!(key, "model/test/version/1.2.3/model.json");
    assert_eq!(
        manager.objects().keys(),
        [(BUCKET.to_string(), key.clone())]
    );

    let body = manager.objects().body(BUCKET, &key).unwrap();
    let loaded: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(loaded["version"], "1.2.3");
    assert_eq!(loaded["param1"], 17);
    assert_eq!(loaded["param2"], 26);
}

#[test]
fn artifact_key_handles_prefix_shapes() {
    let version = Version::new(0, 1, 0);

    assert_eq!(
        VersionConfig::new(PARAMETER, BUCKET, "models/").artifact_key(&version),
        "models/0.1.0/model.json"
    );
    assert_eq!(
        VersionConfig::new(PARAMETER, BUCKET, "")
            .artifact_name("model.bin")
            .artifact_key(&version),
        "0.1.0/model.bin"
    );
}

#[tokio::test]
async fn release_leaves_version_untouched_when_upload_fails() {
    let manager = VersionManager::new(
        MemoryParameterStore::with(PARAMETER, r#"{"Current Version": "1.0.0"}"#),
        MemoryObjectStore::failing(),
        config(),
    );

    let err = manager
        .release(ChangeType::Patch, b"{}".to_vec())
        .await
        .unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert_eq!(
        manager.current_version().await.unwrap(),
        Version::new(1, 0, 0)
    );
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

#[test]
fn prompt_change_gives_up_after_two_invalid_inputs() {
    let mut prompt = ScriptedPrompt::new(&["4", "5"]);
    let result = manager().prompt_change(&mut prompt).unwrap();

    assert_eq!(result, None);
    assert_eq!(prompt.questions.len(), 2);
    assert_eq!(
        prompt.notices.last().unwrap(),
        "Invalid change type. Model not saved."
    );
}

#[test]
fn prompt_change_accepts_second_answer() {
    let mut prompt = ScriptedPrompt::new(&["4", "3"]);
    let result = manager().prompt_change(&mut prompt).unwrap();

    assert_eq!(result, Some(ChangeType::Patch));
    assert_eq!(prompt.questions.len(), 2);
}

#[test]
fn prompt_change_accepts_first_answer() {
    let mut prompt = ScriptedPrompt::new(&["1"]);
    let result = manager().prompt_change(&mut prompt).unwrap();

    assert_eq!(result, Some(ChangeType::Major));
    assert_eq!(prompt.questions.len(), 1);
}

#[tokio::test]
async fn prompt_and_save_success() {
    let manager = manager();
    let mut prompt = ScriptedPrompt::new(&["yes", "2"]);

    let version = manager
        .prompt_and_save(&mut prompt, &fitted_model())
        .await
        .unwrap();

    assert_eq!(version, Some(Version::new(5, 7, 0)));
    assert_eq!(
        manager.objects().keys(),
        [(
            BUCKET.to_string(),
            "model/test/version/5.7.0/model.json".to_string()
        )]
    );
    assert_eq!(
        manager.current_version().await.unwrap(),
        Version::new(5, 7, 0)
    );
}

#[tokio::test]
async fn prompt_and_save_is_case_insensitive() {
    let manager = manager();
    let mut prompt = ScriptedPrompt::new(&["YES", "3"]);

    let version = manager
        .prompt_and_save(&mut prompt, &fitted_model())
        .await
        .unwrap();

    assert_eq!(version, Some(Version::new(5, 6, 8)));
}

#[tokio::test]
async fn prompt_and_save_no_save() {
    let manager = manager();
    let mut prompt = ScriptedPrompt::new(&["no"]);

    let version = manager
        .prompt_and_save(&mut prompt, &fitted_model())
        .await
        .unwrap();

    assert_eq!(version, None);
    assert_eq!(prompt.questions.len(), 1);
    assert!(manager.objects().keys().is_empty());
    assert_eq!(
        manager.current_version().await.unwrap(),
        Version::new(5, 6, 7)
    );
}

#[tokio::test]
async fn prompt_and_save_declined_change_type_saves_nothing() {
    let manager = manager();
    let mut prompt = ScriptedPrompt::new(&["yes", "x", "y"]);

    let version = manager
        .prompt_and_save(&mut prompt, &fitted_model())
        .await
        .unwrap();

    assert_eq!(version, None);
    assert!(manager.objects().keys().is_empty());
}

#[tokio::test]
async fn prompt_and_save_first_release() {
    let manager = empty_manager();
    let mut prompt = ScriptedPrompt::new(&["yes", "1"]);

    let version = manager
        .prompt_and_save(&mut prompt, &fitted_model())
        .await
        .unwrap();

    assert_eq!(version, Some(Version::INITIAL));
    assert_eq!(
        manager.parameters().get(PARAMETER).unwrap(),
        r#"{"Current Version":"0.1.0"}"#
    );
}
