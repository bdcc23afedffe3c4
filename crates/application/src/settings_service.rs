use std::sync::Arc;

use swapro_core::{AppError, AppResult};
use swapro_domain::DevSettings;
use tracing::warn;

use crate::storage_ports::{DEV_SETTINGS_KEY, DocumentStorage};

/// Application service for developer-mode settings.
#[derive(Clone)]
pub struct SettingsService {
    storage: Arc<dyn DocumentStorage>,
}

impl SettingsService {
    /// Creates a new settings service over a storage implementation.
    #[must_use]
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    /// Loads the settings document; every absent flag falls back to `false`
    /// individually.
    pub async fn load_settings(&self) -> AppResult<DevSettings> {
        let Some(raw) = self.storage.get(DEV_SETTINGS_KEY).await? else {
            return Ok(DevSettings::default());
        };

        match serde_json::from_str::<DevSettings>(&raw) {
            Ok(settings) => Ok(settings),
            Err(error) => {
                warn!(%error, "stored dev settings are unreadable, using defaults");
                Ok(DevSettings::default())
            }
        }
    }

    /// Persists the settings document wholesale.
    pub async fn save_settings(&self, settings: DevSettings) -> AppResult<()> {
        let raw = serde_json::to_string(&settings).map_err(|error| {
            AppError::Internal(format!("failed to serialize dev settings: {error}"))
        })?;
        self.storage.put(DEV_SETTINGS_KEY, raw).await
    }
}
