use tracing::info;

/// Interactive input used by
/// [`VersionManager::prompt_and_save`](super::VersionManager::prompt_and_save).
pub trait Prompt {
    /// Shows `message` and returns the answer typed by the user.
    fn input(&mut self, message: &str) -> crate::Result<String>;

    /// Shows an informational line to the user.
    fn notify(&mut self, message: &str) {
        info!("{message}");
    }
}
