use std::sync::Arc;

use chrono::Utc;
use swapro_core::{AppError, AppResult};
use swapro_domain::{
    DevEntry, DevEntryPatch, EntryMetadataOverrides, FormRecord, delete_entries, sample_records,
    update_entries,
};
use tracing::warn;

use crate::storage_ports::{DEV_ENTRIES_KEY, DocumentStorage};

const UNKNOWN: &str = "Unknown";

/// Application service for saved developer test entries.
#[derive(Clone)]
pub struct EntryService {
    storage: Arc<dyn DocumentStorage>,
}

impl EntryService {
    /// Creates a new entry service over a storage implementation.
    #[must_use]
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    /// Loads the stored entry list; absent or unreadable documents yield an
    /// empty list.
    pub async fn list_entries(&self) -> AppResult<Vec<DevEntry>> {
        let Some(raw) = self.storage.get(DEV_ENTRIES_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<DevEntry>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                warn!(%error, "stored dev entries are unreadable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save_entries(&self, entries: &[DevEntry]) -> AppResult<()> {
        let raw = serde_json::to_string(entries).map_err(|error| {
            AppError::Internal(format!("failed to serialize dev entries: {error}"))
        })?;
        self.storage.put(DEV_ENTRIES_KEY, raw).await
    }

    /// Creates and persists a new entry with default metadata overridden by
    /// `overrides`.
    pub async fn create_entry(
        &self,
        name: impl Into<String>,
        form_data: FormRecord,
        overrides: EntryMetadataOverrides,
    ) -> AppResult<DevEntry> {
        let entry = DevEntry::create(name, form_data, overrides, Utc::now())?;

        let mut entries = self.list_entries().await?;
        entries.push(entry.clone());
        self.save_entries(&entries).await?;

        Ok(entry)
    }

    /// Merge-updates the entry matching `id` and persists the new list.
    ///
    /// The entry's `lastModified` is refreshed even for an empty patch.
    pub async fn update_entry(&self, id: &str, patch: &DevEntryPatch) -> AppResult<DevEntry> {
        let entries = self.list_entries().await?;
        if !entries.iter().any(|entry| entry.id() == id) {
            return Err(AppError::NotFound(format!("dev entry '{id}'")));
        }

        let updated = update_entries(&entries, id, patch, Utc::now());
        self.save_entries(&updated).await?;

        updated
            .into_iter()
            .find(|entry| entry.id() == id)
            .ok_or_else(|| AppError::Internal(format!("updated dev entry '{id}' disappeared")))
    }

    /// Removes the entry matching `id`, if any, and persists the new list.
    pub async fn delete_entry(&self, id: &str) -> AppResult<()> {
        let entries = self.list_entries().await?;
        let remaining = delete_entries(&entries, id);
        self.save_entries(&remaining).await
    }

    /// Builds entries from the built-in sample records, appends them to the
    /// stored list, and returns the created entries.
    ///
    /// The first sample is flagged urgent and the second recommended,
    /// matching the dashboard's showcase expectations.
    pub async fn generate_samples(&self) -> AppResult<Vec<DevEntry>> {
        let now = Utc::now();
        let mut created = Vec::new();

        for (index, record) in sample_records().into_iter().enumerate() {
            let name = format!(
                "Sample {} - {} ({})",
                index + 1,
                record.full_name().unwrap_or(UNKNOWN),
                record.position().unwrap_or(UNKNOWN),
            );
            let overrides = EntryMetadataOverrides {
                is_urgent: Some(index == 0),
                is_recommended: Some(index == 1),
                hidden_fields: None,
            };
            created.push(DevEntry::create(name, record, overrides, now)?);
        }

        let mut entries = self.list_entries().await?;
        entries.extend(created.iter().cloned());
        self.save_entries(&entries).await?;

        Ok(created)
    }
}
