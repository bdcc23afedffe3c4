use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::FormRecord;

/// Maximum number of entries kept in the recent-submissions log.
pub const RECENT_SUBMISSIONS_CAP: usize = 10;

/// Gender value counted into the male bucket.
pub const GENDER_MALE: &str = "Laki-laki";
/// Gender value counted into the female bucket.
pub const GENDER_FEMALE: &str = "Perempuan";

const UNKNOWN: &str = "Unknown";

/// Per-gender submission counters.
///
/// Only the two recognized values are counted; anything else is ignored
/// rather than bucketed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    /// Submissions with the recognized male value.
    pub male: u64,
    /// Submissions with the recognized female value.
    pub female: u64,
}

/// One line of the recent-submissions log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSubmission {
    /// Applicant name, or `Unknown`.
    pub name: String,
    /// Applied-for position, or `Unknown`.
    pub position: String,
    /// Selected client, or `Unknown`.
    pub client: String,
    /// Submission time.
    pub timestamp: DateTime<Utc>,
}

/// Aggregate submission statistics, persisted as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStatistics {
    total_submissions: u64,
    #[serde(default)]
    submissions_by_position: BTreeMap<String, u64>,
    #[serde(default)]
    submissions_by_gender: GenderCounts,
    #[serde(default)]
    submissions_by_client: BTreeMap<String, u64>,
    #[serde(default)]
    submissions_by_location: BTreeMap<String, u64>,
    #[serde(default)]
    recent_submissions: Vec<RecentSubmission>,
}

impl FormStatistics {
    /// Folds one submitted record into the counters and the recent log.
    ///
    /// Counter keys are created on first use; empty values skip their
    /// counter. The recent log is newest-first and capped at
    /// [`RECENT_SUBMISSIONS_CAP`].
    pub fn record_submission(&mut self, record: &FormRecord, now: DateTime<Utc>) {
        self.total_submissions += 1;

        if let Some(position) = record.position() {
            *self
                .submissions_by_position
                .entry(position.to_owned())
                .or_insert(0) += 1;
        }

        match record.gender() {
            Some(GENDER_MALE) => self.submissions_by_gender.male += 1,
            Some(GENDER_FEMALE) => self.submissions_by_gender.female += 1,
            _ => {}
        }

        if let Some(client) = record.client() {
            *self
                .submissions_by_client
                .entry(client.to_owned())
                .or_insert(0) += 1;
        }

        if let Some(location) = record.placement() {
            *self
                .submissions_by_location
                .entry(location.to_owned())
                .or_insert(0) += 1;
        }

        self.recent_submissions.insert(
            0,
            RecentSubmission {
                name: record.full_name().unwrap_or(UNKNOWN).to_owned(),
                position: record.position().unwrap_or(UNKNOWN).to_owned(),
                client: record.client().unwrap_or(UNKNOWN).to_owned(),
                timestamp: now,
            },
        );
        self.recent_submissions.truncate(RECENT_SUBMISSIONS_CAP);
    }

    /// Returns the total number of recorded submissions.
    #[must_use]
    pub fn total_submissions(&self) -> u64 {
        self.total_submissions
    }

    /// Returns the per-position counters.
    #[must_use]
    pub fn submissions_by_position(&self) -> &BTreeMap<String, u64> {
        &self.submissions_by_position
    }

    /// Returns the per-gender counters.
    #[must_use]
    pub fn submissions_by_gender(&self) -> GenderCounts {
        self.submissions_by_gender
    }

    /// Returns the per-client counters.
    #[must_use]
    pub fn submissions_by_client(&self) -> &BTreeMap<String, u64> {
        &self.submissions_by_client
    }

    /// Returns the per-location counters.
    #[must_use]
    pub fn submissions_by_location(&self) -> &BTreeMap<String, u64> {
        &self.submissions_by_location
    }

    /// Returns the newest-first recent-submissions log.
    #[must_use]
    pub fn recent_submissions(&self) -> &[RecentSubmission] {
        self.recent_submissions.as_slice()
    }

    /// Returns the `limit` most-submitted positions, highest count first.
    #[must_use]
    pub fn top_positions(&self, limit: usize) -> Vec<(String, u64)> {
        top_counts(&self.submissions_by_position, limit)
    }

    /// Returns the `limit` most-submitted clients, highest count first.
    #[must_use]
    pub fn top_clients(&self, limit: usize) -> Vec<(String, u64)> {
        top_counts(&self.submissions_by_client, limit)
    }

    /// Returns the `limit` most-submitted locations, highest count first.
    #[must_use]
    pub fn top_locations(&self, limit: usize) -> Vec<(String, u64)> {
        top_counts(&self.submissions_by_location, limit)
    }
}

fn top_counts(counts: &BTreeMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = counts
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();
    // BTreeMap iteration is name-ascending, so equal counts stay
    // alphabetical after the stable sort by count.
    ranked.sort_by(|left, right| right.1.cmp(&left.1));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::{FormStatistics, RECENT_SUBMISSIONS_CAP};
    use crate::record::FormRecord;

    fn record(value: serde_json::Value) -> FormRecord {
        FormRecord::new(value).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn single_submission_populates_every_counter() {
        let mut statistics = FormStatistics::default();
        let submitted = record(json!({
            "posisiDilamar": "Sales Officer - CMO",
            "client": "ADIRA",
            "penempatan": "JAKARTA",
            "jenisKelamin": "Laki-laki",
            "namaLengkap": "Test"
        }));

        statistics.record_submission(&submitted, Utc::now());

        assert_eq!(statistics.total_submissions(), 1);
        assert_eq!(
            statistics.submissions_by_position().get("Sales Officer - CMO"),
            Some(&1)
        );
        assert_eq!(statistics.submissions_by_gender().male, 1);
        assert_eq!(statistics.submissions_by_gender().female, 0);
        assert_eq!(statistics.submissions_by_client().get("ADIRA"), Some(&1));
        assert_eq!(
            statistics.submissions_by_location().get("JAKARTA"),
            Some(&1)
        );
        assert_eq!(statistics.recent_submissions().len(), 1);
        assert_eq!(statistics.recent_submissions()[0].name, "Test");
        assert_eq!(
            statistics.recent_submissions()[0].position,
            "Sales Officer - CMO"
        );
        assert_eq!(statistics.recent_submissions()[0].client, "ADIRA");
    }

    #[test]
    fn unrecognized_gender_skips_both_buckets() {
        let mut statistics = FormStatistics::default();

        for _ in 0..3 {
            statistics.record_submission(&record(json!({"jenisKelamin": "Laki-laki"})), Utc::now());
        }
        for _ in 0..2 {
            statistics.record_submission(&record(json!({"jenisKelamin": "Perempuan"})), Utc::now());
        }
        statistics.record_submission(&record(json!({"jenisKelamin": "lainnya"})), Utc::now());
        statistics.record_submission(&record(json!({})), Utc::now());

        let gender = statistics.submissions_by_gender();
        assert_eq!(gender.male, 3);
        assert_eq!(gender.female, 2);
        assert_eq!(statistics.total_submissions(), 7);
        assert!(gender.male + gender.female <= statistics.total_submissions());
    }

    #[test]
    fn recent_log_is_newest_first_and_capped() {
        let mut statistics = FormStatistics::default();

        for index in 0..15 {
            let submitted = record(json!({"namaLengkap": format!("Applicant {index}")}));
            statistics.record_submission(&submitted, Utc::now());
        }

        assert_eq!(statistics.total_submissions(), 15);
        assert_eq!(statistics.recent_submissions().len(), RECENT_SUBMISSIONS_CAP);
        assert_eq!(statistics.recent_submissions()[0].name, "Applicant 14");
        assert_eq!(statistics.recent_submissions()[9].name, "Applicant 5");
        assert_eq!(statistics.recent_submissions()[0].position, "Unknown");
    }

    #[test]
    fn position_counts_never_exceed_total() {
        let mut statistics = FormStatistics::default();

        statistics.record_submission(&record(json!({"posisiDilamar": "TELLER"})), Utc::now());
        statistics.record_submission(&record(json!({"posisiDilamar": "TELLER"})), Utc::now());
        statistics.record_submission(&record(json!({})), Utc::now());

        let counted: u64 = statistics.submissions_by_position().values().sum();
        assert_eq!(counted, 2);
        assert_eq!(statistics.total_submissions(), 3);
    }

    #[test]
    fn top_counts_rank_by_count_descending() {
        let mut statistics = FormStatistics::default();

        for _ in 0..3 {
            statistics.record_submission(&record(json!({"client": "WOM"})), Utc::now());
        }
        statistics.record_submission(&record(json!({"client": "ADIRA"})), Utc::now());
        statistics.record_submission(&record(json!({"client": "FIF"})), Utc::now());

        let top = statistics.top_clients(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ("WOM".to_owned(), 3));
        assert_eq!(top[1], ("ADIRA".to_owned(), 1));
    }
}
