use std::sync::Arc;

use chrono::Utc;
use swapro_core::{AppError, AppResult};
use swapro_domain::{FormRecord, FormStatistics, RecentSubmission};
use tracing::warn;

use crate::storage_ports::{DocumentStorage, FORM_STATISTICS_KEY};

/// Number of positions/clients/locations shown in the dashboard summary.
pub const TOP_SUMMARY_LIMIT: usize = 5;

/// Dashboard view over the statistics document.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    /// Total recorded submissions.
    pub total_submissions: u64,
    /// Most-submitted positions, highest count first.
    pub top_positions: Vec<(String, u64)>,
    /// Most-submitted clients, highest count first.
    pub top_clients: Vec<(String, u64)>,
    /// Most-submitted locations, highest count first.
    pub top_locations: Vec<(String, u64)>,
    /// Newest-first recent submissions.
    pub recent_submissions: Vec<RecentSubmission>,
}

/// Application service for submission statistics.
#[derive(Clone)]
pub struct StatisticsService {
    storage: Arc<dyn DocumentStorage>,
}

impl StatisticsService {
    /// Creates a new statistics service over a storage implementation.
    #[must_use]
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    /// Loads the statistics document; absent or unreadable documents yield
    /// the zero-valued default.
    pub async fn load_statistics(&self) -> AppResult<FormStatistics> {
        let Some(raw) = self.storage.get(FORM_STATISTICS_KEY).await? else {
            return Ok(FormStatistics::default());
        };

        match serde_json::from_str::<FormStatistics>(&raw) {
            Ok(statistics) => Ok(statistics),
            Err(error) => {
                warn!(%error, "stored statistics are unreadable, starting from zero");
                Ok(FormStatistics::default())
            }
        }
    }

    /// Folds one submitted record into the statistics document.
    ///
    /// The whole document is read, mutated, and rewritten; a persistence
    /// failure leaves the stored document at its previous state and is
    /// returned to the caller rather than swallowed.
    pub async fn record_submission(&self, record: &FormRecord) -> AppResult<FormStatistics> {
        let mut statistics = self.load_statistics().await?;
        statistics.record_submission(record, Utc::now());

        let raw = serde_json::to_string(&statistics).map_err(|error| {
            AppError::Internal(format!("failed to serialize statistics: {error}"))
        })?;
        self.storage.put(FORM_STATISTICS_KEY, raw).await?;

        Ok(statistics)
    }

    /// Builds the dashboard summary from the current statistics document.
    pub async fn summary(&self) -> AppResult<StatisticsSummary> {
        let statistics = self.load_statistics().await?;

        Ok(StatisticsSummary {
            total_submissions: statistics.total_submissions(),
            top_positions: statistics.top_positions(TOP_SUMMARY_LIMIT),
            top_clients: statistics.top_clients(TOP_SUMMARY_LIMIT),
            top_locations: statistics.top_locations(TOP_SUMMARY_LIMIT),
            recent_submissions: statistics.recent_submissions().to_vec(),
        })
    }

    /// Removes the stored statistics document.
    pub async fn reset_statistics(&self) -> AppResult<()> {
        self.storage.remove(FORM_STATISTICS_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;
    use swapro_core::{AppError, AppResult};
    use swapro_domain::{FormRecord, RECENT_SUBMISSIONS_CAP};
    use tokio::sync::Mutex;

    use super::{StatisticsService, TOP_SUMMARY_LIMIT};
    use crate::storage_ports::{DocumentStorage, FORM_STATISTICS_KEY};

    #[derive(Default)]
    struct FakeStorage {
        documents: Mutex<HashMap<String, String>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl DocumentStorage for FakeStorage {
        async fn get(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.documents.lock().await.get(key).cloned())
        }

        async fn put(&self, key: &str, value: String) -> AppResult<()> {
            if self.fail_writes {
                return Err(AppError::Storage("disk full".to_owned()));
            }
            self.documents.lock().await.insert(key.to_owned(), value);
            Ok(())
        }

        async fn remove(&self, key: &str) -> AppResult<()> {
            self.documents.lock().await.remove(key);
            Ok(())
        }
    }

    fn record(value: serde_json::Value) -> FormRecord {
        FormRecord::new(value).unwrap_or_else(|_| unreachable!())
    }

    fn full_record() -> FormRecord {
        record(json!({
            "posisiDilamar": "Sales Officer - CMO",
            "client": "ADIRA",
            "penempatan": "JAKARTA",
            "jenisKelamin": "Laki-laki",
            "namaLengkap": "Test"
        }))
    }

    #[tokio::test]
    async fn first_submission_on_fresh_document() {
        let service = StatisticsService::new(Arc::new(FakeStorage::default()));

        let recorded = service.record_submission(&full_record()).await;
        assert!(recorded.is_ok());

        let statistics = service
            .load_statistics()
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(statistics.total_submissions(), 1);
        assert_eq!(
            statistics.submissions_by_position().get("Sales Officer - CMO"),
            Some(&1)
        );
        assert_eq!(statistics.submissions_by_gender().male, 1);
        assert_eq!(statistics.submissions_by_gender().female, 0);
        assert_eq!(statistics.submissions_by_client().get("ADIRA"), Some(&1));
        assert_eq!(statistics.submissions_by_location().get("JAKARTA"), Some(&1));
        assert_eq!(statistics.recent_submissions().len(), 1);
        assert_eq!(statistics.recent_submissions()[0].name, "Test");
    }

    #[tokio::test]
    async fn repeated_submissions_keep_invariants() {
        let service = StatisticsService::new(Arc::new(FakeStorage::default()));

        for _ in 0..12 {
            let recorded = service.record_submission(&full_record()).await;
            assert!(recorded.is_ok());
        }

        let statistics = service
            .load_statistics()
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(statistics.total_submissions(), 12);
        let counted: u64 = statistics.submissions_by_position().values().sum();
        assert!(counted <= statistics.total_submissions());
        assert_eq!(statistics.recent_submissions().len(), RECENT_SUBMISSIONS_CAP);
    }

    #[tokio::test]
    async fn write_failure_surfaces_and_leaves_stored_state() {
        let storage = Arc::new(FakeStorage {
            fail_writes: true,
            ..FakeStorage::default()
        });
        let service = StatisticsService::new(storage.clone());

        let recorded = service.record_submission(&full_record()).await;
        assert!(matches!(recorded, Err(AppError::Storage(_))));

        assert!(
            storage
                .documents
                .lock()
                .await
                .get(FORM_STATISTICS_KEY)
                .is_none()
        );
    }

    #[tokio::test]
    async fn corrupt_document_restarts_from_zero() {
        let storage = Arc::new(FakeStorage::default());
        storage
            .documents
            .lock()
            .await
            .insert(FORM_STATISTICS_KEY.to_owned(), "][".to_owned());
        let service = StatisticsService::new(storage);

        let statistics = service
            .load_statistics()
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(statistics.total_submissions(), 0);
    }

    #[tokio::test]
    async fn summary_ranks_and_truncates() {
        let service = StatisticsService::new(Arc::new(FakeStorage::default()));

        for index in 0..7 {
            let recorded = service
                .record_submission(&record(json!({
                    "posisiDilamar": format!("Position {index}"),
                    "client": "ADIRA"
                })))
                .await;
            assert!(recorded.is_ok());
        }

        let summary = service.summary().await.unwrap_or_else(|_| unreachable!());
        assert_eq!(summary.total_submissions, 7);
        assert_eq!(summary.top_positions.len(), TOP_SUMMARY_LIMIT);
        assert_eq!(summary.top_clients, vec![("ADIRA".to_owned(), 7)]);
    }

    #[tokio::test]
    async fn reset_clears_the_document() {
        let service = StatisticsService::new(Arc::new(FakeStorage::default()));
        let recorded = service.record_submission(&full_record()).await;
        assert!(recorded.is_ok());

        let reset = service.reset_statistics().await;
        assert!(reset.is_ok());

        let statistics = service
            .load_statistics()
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(statistics.total_submissions(), 0);
    }
}
