use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use swapro_core::{AppError, AppResult};

/// Data key for the selected client.
pub const KEY_CLIENT: &str = "client";
/// Data key for the applied-for position.
pub const KEY_POSITION: &str = "posisiDilamar";
/// Data key for the selected placement location.
pub const KEY_PLACEMENT: &str = "penempatan";
/// Data key for the placement sub-location.
pub const KEY_PLACEMENT_DETAIL: &str = "detailPenempatan";
/// Data key for the applicant's full name.
pub const KEY_FULL_NAME: &str = "namaLengkap";
/// Data key for the applicant's gender.
pub const KEY_GENDER: &str = "jenisKelamin";

/// One submitted (or pre-filled) form payload.
///
/// The keys are schema-driven, so the payload stays an open JSON object; the
/// accessors cover the well-known keys the statistics aggregator and sample
/// tooling read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord(Map<String, Value>);

impl FormRecord {
    /// Creates a record from a JSON object value.
    pub fn new(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(AppError::Validation(format!(
                "form record must be a JSON object, got '{other}'"
            ))),
        }
    }

    /// Creates an empty record.
    #[must_use]
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Returns the raw key/value map.
    #[must_use]
    pub fn values(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the trimmed string value under `key`, if present and non-empty.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Returns the selected client name.
    #[must_use]
    pub fn client(&self) -> Option<&str> {
        self.text(KEY_CLIENT)
    }

    /// Returns the applied-for position.
    #[must_use]
    pub fn position(&self) -> Option<&str> {
        self.text(KEY_POSITION)
    }

    /// Returns the selected placement location.
    #[must_use]
    pub fn placement(&self) -> Option<&str> {
        self.text(KEY_PLACEMENT)
    }

    /// Returns the placement sub-location.
    #[must_use]
    pub fn placement_detail(&self) -> Option<&str> {
        self.text(KEY_PLACEMENT_DETAIL)
    }

    /// Returns the applicant's full name.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.text(KEY_FULL_NAME)
    }

    /// Returns the applicant's gender value as submitted.
    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.text(KEY_GENDER)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::FormRecord;

    #[test]
    fn record_requires_object_payload() {
        let result = FormRecord::new(json!("not-object"));
        assert!(result.is_err());
    }

    #[test]
    fn blank_values_read_as_absent() {
        let record = FormRecord::new(json!({
            "client": "ADIRA",
            "posisiDilamar": "   ",
            "namaLengkap": ""
        }))
        .unwrap_or_else(|_| unreachable!());

        assert_eq!(record.client(), Some("ADIRA"));
        assert_eq!(record.position(), None);
        assert_eq!(record.full_name(), None);
    }
}
