use std::sync::Arc;

use serde_json::Value;
use swapro_core::{AppError, AppResult};
use swapro_domain::{
    ClientConfig, FormConfig, FormField, FormFieldInput, LocationConfig, StoredFormConfig,
    default_form_config,
};
use tracing::warn;

use crate::storage_ports::{DocumentStorage, FORM_CONFIG_KEY};

/// Application service for the form schema and reference tables.
///
/// Owns the single mutation surface over the configuration document: every
/// operation is a read-whole-document / modify / write-whole-document
/// sequence.
#[derive(Clone)]
pub struct SchemaService {
    storage: Arc<dyn DocumentStorage>,
}

impl SchemaService {
    /// Creates a new schema service over a storage implementation.
    #[must_use]
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    /// Loads the configuration document, filling absent sections from the
    /// built-in default.
    ///
    /// An unreadable stored document falls back to the default wholesale;
    /// only storage failures propagate.
    pub async fn load_config(&self) -> AppResult<FormConfig> {
        let Some(raw) = self.storage.get(FORM_CONFIG_KEY).await? else {
            return Ok(default_form_config());
        };

        match serde_json::from_str::<StoredFormConfig>(&raw) {
            Ok(stored) => Ok(FormConfig::from_stored(stored, default_form_config())),
            Err(error) => {
                warn!(%error, "stored form configuration is unreadable, using defaults");
                Ok(default_form_config())
            }
        }
    }

    /// Persists the configuration document wholesale.
    pub async fn save_config(&self, config: &FormConfig) -> AppResult<()> {
        let raw = serde_json::to_string(config).map_err(|error| {
            AppError::Internal(format!("failed to serialize form configuration: {error}"))
        })?;
        self.storage.put(FORM_CONFIG_KEY, raw).await
    }

    /// Adds a field to the step its `step` index names.
    pub async fn add_field(&self, input: FormFieldInput) -> AppResult<FormField> {
        let field = FormField::new(input)?;
        let mut config = self.load_config().await?;
        config.add_field(field.clone())?;
        self.save_config(&config).await?;
        Ok(field)
    }

    /// Edits a field, moving it between steps when its `step` index changed.
    ///
    /// An unknown id acts as insert.
    pub async fn edit_field(&self, input: FormFieldInput) -> AppResult<FormField> {
        let field = FormField::new(input)?;
        let mut config = self.load_config().await?;
        config.upsert_field(field.clone())?;
        self.save_config(&config).await?;
        Ok(field)
    }

    /// Deletes a field by id from every step. Returns whether anything was
    /// removed.
    pub async fn delete_field(&self, id: &str) -> AppResult<bool> {
        let mut config = self.load_config().await?;
        let removed = config.remove_field(id);
        if removed {
            self.save_config(&config).await?;
        }
        Ok(removed)
    }

    /// Adds a client, or replaces the one sharing its id.
    pub async fn upsert_client(&self, client: ClientConfig) -> AppResult<()> {
        let mut config = self.load_config().await?;
        config.upsert_client(client);
        self.save_config(&config).await
    }

    /// Deletes a client by id. Returns whether anything was removed.
    ///
    /// Callers confirm destructive intent before calling; the service does
    /// not second-guess them.
    pub async fn delete_client(&self, id: &str) -> AppResult<bool> {
        let mut config = self.load_config().await?;
        let removed = config.remove_client(id);
        if removed {
            self.save_config(&config).await?;
        }
        Ok(removed)
    }

    /// Adds a location, or replaces the one sharing its id.
    pub async fn upsert_location(&self, location: LocationConfig) -> AppResult<()> {
        let mut config = self.load_config().await?;
        config.upsert_location(location);
        self.save_config(&config).await
    }

    /// Deletes a location by id. Returns whether anything was removed.
    pub async fn delete_location(&self, id: &str) -> AppResult<bool> {
        let mut config = self.load_config().await?;
        let removed = config.remove_location(id);
        if removed {
            self.save_config(&config).await?;
        }
        Ok(removed)
    }

    /// Renames a position across every client and the placements table, as
    /// one persisted mutation.
    pub async fn rename_position(&self, old: &str, new: &str) -> AppResult<()> {
        let mut config = self.load_config().await?;
        config.rename_position(old, new)?;
        self.save_config(&config).await
    }

    /// Replaces the allowed-placement list for one position.
    pub async fn set_position_placements(
        &self,
        position: &str,
        placements: Vec<String>,
    ) -> AppResult<()> {
        let mut config = self.load_config().await?;
        config.set_position_placements(position, placements)?;
        self.save_config(&config).await
    }

    /// Serializes the current configuration as a pretty-printed document for
    /// download.
    pub async fn export_config(&self) -> AppResult<String> {
        let config = self.load_config().await?;
        serde_json::to_string_pretty(&config).map_err(|error| {
            AppError::Internal(format!("failed to serialize form configuration: {error}"))
        })
    }

    /// Replaces the stored configuration with a user-supplied document.
    ///
    /// Only JSON well-formedness is checked; a parseable document is accepted
    /// as-is and shape problems surface as default-fills on the next load.
    /// On parse failure the stored configuration is left untouched.
    pub async fn import_config(&self, document: &str) -> AppResult<()> {
        let value = serde_json::from_str::<Value>(document)
            .map_err(|error| AppError::Parse(format!("imported configuration: {error}")))?;
        let raw = serde_json::to_string(&value).map_err(|error| {
            AppError::Internal(format!("failed to serialize imported configuration: {error}"))
        })?;
        self.storage.put(FORM_CONFIG_KEY, raw).await
    }

    /// Removes the stored configuration so the next load yields the default.
    pub async fn reset_config(&self) -> AppResult<()> {
        self.storage.remove(FORM_CONFIG_KEY).await
    }
}
