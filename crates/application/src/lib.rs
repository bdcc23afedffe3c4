//! Application services and ports.

#![forbid(unsafe_code)]

mod entry_service;
mod schema_service;
mod settings_service;
mod statistics_service;
mod storage_ports;

pub use entry_service::EntryService;
pub use schema_service::SchemaService;
pub use settings_service::SettingsService;
pub use statistics_service::{StatisticsService, StatisticsSummary, TOP_SUMMARY_LIMIT};
pub use storage_ports::{
    CONFIG_EXPORT_FILE_NAME, DEV_ENTRIES_KEY, DEV_SETTINGS_KEY, DocumentStorage, FORM_CONFIG_KEY,
    FORM_STATISTICS_KEY,
};
