use async_trait::async_trait;
use swapro_core::AppResult;

/// Storage key for the form configuration document.
pub const FORM_CONFIG_KEY: &str = "form_config";

/// Storage key for the submission statistics document.
pub const FORM_STATISTICS_KEY: &str = "form_statistics";

/// Storage key for the dev entry list document.
pub const DEV_ENTRIES_KEY: &str = "dev_entries";

/// Storage key for the developer settings document.
pub const DEV_SETTINGS_KEY: &str = "dev_settings";

/// File name offered for exported configuration downloads.
pub const CONFIG_EXPORT_FILE_NAME: &str = "swapro-form-config.json";

/// Key-value persistence port for whole JSON documents.
///
/// Every document is written wholesale under its key; there is no partial
/// update. Any key-value backend with string values satisfies this contract.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Reads the document stored under `key`, if any.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replaces the document stored under `key`.
    async fn put(&self, key: &str, value: String) -> AppResult<()>;

    /// Removes the document stored under `key`, if any.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
