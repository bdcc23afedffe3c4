use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use swapro_core::{AppResult, NonEmptyString};

/// An employer/partner entity offering positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    id: String,
    name: String,
    positions: Vec<String>,
    is_active: bool,
}

impl ClientConfig {
    /// Creates a validated client entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        positions: Vec<String>,
        is_active: bool,
    ) -> AppResult<Self> {
        let id = String::from(NonEmptyString::new(id)?);
        let name = String::from(NonEmptyString::new(name)?);

        Ok(Self::from_parts(id, name, positions, is_active))
    }

    pub(crate) fn from_parts(
        id: String,
        name: String,
        positions: Vec<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name,
            positions,
            is_active,
        }
    }

    /// Returns the stable client identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the ordered position names offered by this client.
    #[must_use]
    pub fn positions(&self) -> &[String] {
        self.positions.as_slice()
    }

    /// Returns whether the client is offered to applicants.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn rename_position(&mut self, old: &str, new: &str) {
        for position in &mut self.positions {
            if position == old {
                *position = new.to_owned();
            }
        }
    }
}

/// A geographic placement with per-client sub-locations.
///
/// `details` maps client id to the ordered sub-location names available at
/// this location for that client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationConfig {
    id: String,
    name: String,
    #[serde(default)]
    details: BTreeMap<String, Vec<String>>,
    is_active: bool,
}

impl LocationConfig {
    /// Creates a validated location entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        details: BTreeMap<String, Vec<String>>,
        is_active: bool,
    ) -> AppResult<Self> {
        let id = String::from(NonEmptyString::new(id)?);
        let name = String::from(NonEmptyString::new(name)?);

        Ok(Self::from_parts(id, name, details, is_active))
    }

    pub(crate) fn from_parts(
        id: String,
        name: String,
        details: BTreeMap<String, Vec<String>>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name,
            details,
            is_active,
        }
    }

    /// Returns the stable location identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the client-id-keyed sub-location table.
    #[must_use]
    pub fn details(&self) -> &BTreeMap<String, Vec<String>> {
        &self.details
    }

    /// Returns the ordered sub-locations offered to one client here.
    #[must_use]
    pub fn sublocations_for(&self, client_id: &str) -> &[String] {
        self.details
            .get(client_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether the location is offered to applicants.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
