//! Domain entities and invariants.

#![forbid(unsafe_code)]
#![recursion_limit = "256"]

mod defaults;
mod dev_entry;
mod field;
mod record;
mod reference;
mod schema;
mod settings;
mod statistics;

pub use defaults::{default_form_config, sample_records};
pub use dev_entry::{
    DevEntry, DevEntryPatch, EntryMetadata, EntryMetadataOverrides, delete_entries, update_entries,
};
pub use field::{FieldControl, FieldType, FormField, FormFieldInput, GridCols};
pub use record::{
    FormRecord, KEY_CLIENT, KEY_FULL_NAME, KEY_GENDER, KEY_PLACEMENT, KEY_PLACEMENT_DETAIL,
    KEY_POSITION,
};
pub use reference::{ClientConfig, LocationConfig};
pub use schema::{FormConfig, FormStep, StoredFormConfig};
pub use settings::DevSettings;
pub use statistics::{
    FormStatistics, GENDER_FEMALE, GENDER_MALE, GenderCounts, RECENT_SUBMISSIONS_CAP,
    RecentSubmission,
};
