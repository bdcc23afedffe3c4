use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swapro_core::{AppResult, NonEmptyString, new_document_id};

use crate::record::FormRecord;

const ENTRY_ID_PREFIX: &str = "dev";

/// Metadata carried by a saved test entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    /// Whether the entry is highlighted as urgent.
    pub is_urgent: bool,
    /// Whether the entry is highlighted as recommended.
    pub is_recommended: bool,
    /// Field names hidden when this entry pre-fills the form.
    #[serde(default)]
    pub hidden_fields: Vec<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last merge-update.
    pub last_modified: DateTime<Utc>,
}

/// Optional metadata overrides applied at creation or merge-update time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryMetadataOverrides {
    /// Replaces the urgent flag when set.
    pub is_urgent: Option<bool>,
    /// Replaces the recommended flag when set.
    pub is_recommended: Option<bool>,
    /// Replaces the hidden-field list when set.
    pub hidden_fields: Option<Vec<String>>,
}

/// Merge-update patch for one entry.
///
/// Unset members leave the corresponding entry members untouched; metadata
/// is merged key-wise, never replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DevEntryPatch {
    /// Replaces the display name when set.
    pub name: Option<String>,
    /// Replaces the form snapshot when set.
    pub form_data: Option<FormRecord>,
    /// Metadata overrides merged into the entry metadata.
    pub metadata: EntryMetadataOverrides,
}

/// A saved test snapshot of a full form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevEntry {
    id: String,
    name: String,
    form_data: FormRecord,
    metadata: EntryMetadata,
}

impl DevEntry {
    /// Creates an entry with a fresh id, `now` timestamps, and default
    /// metadata overridden by `overrides`.
    pub fn create(
        name: impl Into<String>,
        form_data: FormRecord,
        overrides: EntryMetadataOverrides,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let name = String::from(NonEmptyString::new(name)?);

        Ok(Self {
            id: new_document_id(ENTRY_ID_PREFIX),
            name,
            form_data,
            metadata: EntryMetadata {
                is_urgent: overrides.is_urgent.unwrap_or(false),
                is_recommended: overrides.is_recommended.unwrap_or(false),
                hidden_fields: overrides.hidden_fields.unwrap_or_default(),
                created_at: now,
                last_modified: now,
            },
        })
    }

    /// Returns the unique entry identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the saved form snapshot.
    #[must_use]
    pub fn form_data(&self) -> &FormRecord {
        &self.form_data
    }

    /// Returns the entry metadata.
    #[must_use]
    pub fn metadata(&self) -> &EntryMetadata {
        &self.metadata
    }

    /// Returns a copy with `patch` merged in and `lastModified` set to `now`.
    ///
    /// `lastModified` is refreshed even when the patch is empty; `createdAt`
    /// is never touched.
    #[must_use]
    pub fn with_patch(&self, patch: &DevEntryPatch, now: DateTime<Utc>) -> Self {
        let metadata = EntryMetadata {
            is_urgent: patch.metadata.is_urgent.unwrap_or(self.metadata.is_urgent),
            is_recommended: patch
                .metadata
                .is_recommended
                .unwrap_or(self.metadata.is_recommended),
            hidden_fields: patch
                .metadata
                .hidden_fields
                .clone()
                .unwrap_or_else(|| self.metadata.hidden_fields.clone()),
            created_at: self.metadata.created_at,
            last_modified: now,
        };

        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            form_data: patch
                .form_data
                .clone()
                .unwrap_or_else(|| self.form_data.clone()),
            metadata,
        }
    }
}

/// Returns a new collection with the entry matching `id` patched.
///
/// Entries with other ids pass through unchanged; the input collection is
/// never mutated.
#[must_use]
pub fn update_entries(
    entries: &[DevEntry],
    id: &str,
    patch: &DevEntryPatch,
    now: DateTime<Utc>,
) -> Vec<DevEntry> {
    entries
        .iter()
        .map(|entry| {
            if entry.id() == id {
                entry.with_patch(patch, now)
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Returns a new collection without the entry matching `id`.
#[must_use]
pub fn delete_entries(entries: &[DevEntry], id: &str) -> Vec<DevEntry> {
    entries
        .iter()
        .filter(|entry| entry.id() != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use super::{DevEntry, DevEntryPatch, EntryMetadataOverrides, delete_entries, update_entries};
    use crate::record::FormRecord;

    fn entry(name: &str) -> DevEntry {
        let form_data = FormRecord::new(json!({"namaLengkap": name}))
            .unwrap_or_else(|_| unreachable!());
        DevEntry::create(name, form_data, EntryMetadataOverrides::default(), Utc::now())
            .unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn create_applies_metadata_defaults_and_overrides() {
        let created = DevEntry::create(
            "Sample",
            FormRecord::empty(),
            EntryMetadataOverrides {
                is_urgent: Some(true),
                ..EntryMetadataOverrides::default()
            },
            Utc::now(),
        )
        .unwrap_or_else(|_| unreachable!());

        assert!(created.id().starts_with("dev_"));
        assert!(created.metadata().is_urgent);
        assert!(!created.metadata().is_recommended);
        assert!(created.metadata().hidden_fields.is_empty());
        assert_eq!(created.metadata().created_at, created.metadata().last_modified);
    }

    #[test]
    fn update_touches_only_the_matching_entry() {
        let first = entry("John Doe");
        let second = entry("Sarah Wilson");
        let entries = vec![first.clone(), second.clone()];
        let later = Utc::now() + Duration::seconds(5);

        let updated = update_entries(
            &entries,
            first.id(),
            &DevEntryPatch {
                name: Some("Renamed".to_owned()),
                ..DevEntryPatch::default()
            },
            later,
        );

        assert_eq!(updated[0].name(), "Renamed");
        assert_eq!(updated[0].form_data(), first.form_data());
        assert_eq!(updated[0].metadata().created_at, first.metadata().created_at);
        assert_eq!(updated[0].metadata().last_modified, later);
        assert_eq!(updated[1], second);
    }

    #[test]
    fn metadata_patch_merges_instead_of_replacing() {
        let original = entry("John Doe");
        let later = Utc::now() + Duration::seconds(5);

        let patched = original.with_patch(
            &DevEntryPatch {
                metadata: EntryMetadataOverrides {
                    hidden_fields: Some(vec!["nik".to_owned()]),
                    ..EntryMetadataOverrides::default()
                },
                ..DevEntryPatch::default()
            },
            later,
        );

        assert_eq!(patched.metadata().hidden_fields, vec!["nik".to_owned()]);
        assert_eq!(patched.metadata().is_urgent, original.metadata().is_urgent);
        assert_eq!(patched.metadata().last_modified, later);
    }

    #[test]
    fn empty_patch_still_refreshes_last_modified() {
        let original = entry("John Doe");
        let later = Utc::now() + Duration::seconds(5);

        let patched = original.with_patch(&DevEntryPatch::default(), later);

        assert_eq!(patched.name(), original.name());
        assert_eq!(patched.metadata().last_modified, later);
    }

    #[test]
    fn delete_filters_by_id_only() {
        let first = entry("John Doe");
        let second = entry("Sarah Wilson");
        let entries = vec![first.clone(), second.clone()];

        let remaining = delete_entries(&entries, second.id());

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), first.id());

        let untouched = delete_entries(&entries, "dev_missing");
        assert_eq!(untouched.len(), 2);
    }
}
