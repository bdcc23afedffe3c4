use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use swapro_core::{AppError, AppResult, NonEmptyString};

use crate::field::FormField;
use crate::reference::{ClientConfig, LocationConfig};

/// An ordered stage of the multi-part form, grouping related fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStep {
    id: String,
    title: String,
    icon: String,
    color: String,
    #[serde(default)]
    fields: Vec<FormField>,
}

impl FormStep {
    /// Creates a validated step.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        fields: Vec<FormField>,
    ) -> AppResult<Self> {
        let id = String::from(NonEmptyString::new(id)?);
        let title = String::from(NonEmptyString::new(title)?);

        Ok(Self::from_parts(id, title, icon.into(), color.into(), fields))
    }

    pub(crate) fn from_parts(
        id: String,
        title: String,
        icon: String,
        color: String,
        fields: Vec<FormField>,
    ) -> Self {
        Self {
            id,
            title,
            icon,
            color,
            fields,
        }
    }

    /// Returns the stable step identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the renderer icon hint.
    #[must_use]
    pub fn icon(&self) -> &str {
        self.icon.as_str()
    }

    /// Returns the renderer color hint.
    #[must_use]
    pub fn color(&self) -> &str {
        self.color.as_str()
    }

    /// Returns the ordered fields of this step.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        self.fields.as_slice()
    }

    /// Returns the ordered fields the renderer should draw.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<&FormField> {
        self.fields.iter().filter(|field| !field.is_hidden()).collect()
    }

    fn insert_sorted(&mut self, field: FormField) {
        self.fields.push(field);
        // Stable: equal orders keep insertion order.
        self.fields.sort_by_key(FormField::order);
    }

    fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|field| field.id() != id);
        self.fields.len() != before
    }
}

/// Stored shape of the configuration document.
///
/// Every section is optional so documents written by older or partial
/// editors load with the missing sections filled from the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFormConfig {
    /// Ordered steps, when present.
    pub steps: Option<Vec<FormStep>>,
    /// Ordered clients, when present.
    pub clients: Option<Vec<ClientConfig>>,
    /// Ordered locations, when present.
    pub locations: Option<Vec<LocationConfig>>,
    /// Position → allowed-placements table, when present.
    pub position_placements: Option<BTreeMap<String, Vec<String>>>,
}

/// Aggregate root of the form configuration: schema plus reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    steps: Vec<FormStep>,
    clients: Vec<ClientConfig>,
    locations: Vec<LocationConfig>,
    position_placements: BTreeMap<String, Vec<String>>,
}

impl FormConfig {
    pub(crate) fn from_parts(
        steps: Vec<FormStep>,
        clients: Vec<ClientConfig>,
        locations: Vec<LocationConfig>,
        position_placements: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            steps,
            clients,
            locations,
            position_placements,
        }
    }

    /// Builds a configuration from a stored document, filling each absent
    /// section from `fallback` independently.
    #[must_use]
    pub fn from_stored(stored: StoredFormConfig, fallback: FormConfig) -> Self {
        Self {
            steps: stored.steps.unwrap_or(fallback.steps),
            clients: stored.clients.unwrap_or(fallback.clients),
            locations: stored.locations.unwrap_or(fallback.locations),
            position_placements: stored
                .position_placements
                .unwrap_or(fallback.position_placements),
        }
    }

    /// Returns the ordered steps.
    #[must_use]
    pub fn steps(&self) -> &[FormStep] {
        self.steps.as_slice()
    }

    /// Returns the ordered clients.
    #[must_use]
    pub fn clients(&self) -> &[ClientConfig] {
        self.clients.as_slice()
    }

    /// Returns the ordered locations.
    #[must_use]
    pub fn locations(&self) -> &[LocationConfig] {
        self.locations.as_slice()
    }

    /// Returns the position → allowed-placements table.
    #[must_use]
    pub fn position_placements(&self) -> &BTreeMap<String, Vec<String>> {
        &self.position_placements
    }

    /// Returns the total number of fields across all steps.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.steps.iter().map(|step| step.fields().len()).sum()
    }

    /// Finds a field by id across all steps.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.steps
            .iter()
            .flat_map(|step| step.fields().iter())
            .find(|field| field.id() == id)
    }

    /// Inserts a field into the step its `step` index names, keeping that
    /// step sorted by `order`.
    ///
    /// No duplicate-id check is performed; callers generate unique ids.
    pub fn add_field(&mut self, field: FormField) -> AppResult<()> {
        let step_count = self.steps.len();
        let step = self.steps.get_mut(field.step()).ok_or_else(|| {
            AppError::Validation(format!(
                "field '{}' references step index '{}' but only '{step_count}' steps exist",
                field.id(),
                field.step(),
            ))
        })?;

        step.insert_sorted(field);
        Ok(())
    }

    /// Replaces a field wherever it lives, then inserts it into the step its
    /// `step` index names.
    ///
    /// Removing by id first makes the edit idempotent even when the edit
    /// moved the field to a different step. An unknown id acts as insert.
    pub fn upsert_field(&mut self, field: FormField) -> AppResult<()> {
        if field.step() >= self.steps.len() {
            return Err(AppError::Validation(format!(
                "field '{}' references step index '{}' but only '{}' steps exist",
                field.id(),
                field.step(),
                self.steps.len()
            )));
        }

        self.remove_field(field.id());
        self.add_field(field)
    }

    /// Removes the field with matching id from every step.
    ///
    /// Returns whether anything was removed. Scanning all steps keeps the
    /// delete safe for historical documents where one id ended up in two
    /// steps.
    pub fn remove_field(&mut self, id: &str) -> bool {
        let mut removed = false;
        for step in &mut self.steps {
            removed |= step.remove_by_id(id);
        }
        removed
    }

    /// Inserts the client, or replaces the one sharing its id in place.
    pub fn upsert_client(&mut self, client: ClientConfig) {
        match self
            .clients
            .iter_mut()
            .find(|existing| existing.id() == client.id())
        {
            Some(existing) => *existing = client,
            None => self.clients.push(client),
        }
    }

    /// Removes the client with matching id. Returns whether anything was
    /// removed.
    pub fn remove_client(&mut self, id: &str) -> bool {
        let before = self.clients.len();
        self.clients.retain(|client| client.id() != id);
        self.clients.len() != before
    }

    /// Inserts the location, or replaces the one sharing its id in place.
    pub fn upsert_location(&mut self, location: LocationConfig) {
        match self
            .locations
            .iter_mut()
            .find(|existing| existing.id() == location.id())
        {
            Some(existing) => *existing = location,
            None => self.locations.push(location),
        }
    }

    /// Removes the location with matching id. Returns whether anything was
    /// removed.
    pub fn remove_location(&mut self, id: &str) -> bool {
        let before = self.locations.len();
        self.locations.retain(|location| location.id() != id);
        self.locations.len() != before
    }

    /// Renames a position in every client position list and in the
    /// placements table, as one mutation.
    ///
    /// Position names are free text keyed by value, so every dependent must
    /// move together or downstream lookups break.
    pub fn rename_position(&mut self, old: &str, new: &str) -> AppResult<()> {
        let new = String::from(NonEmptyString::new(new)?);
        if old == new {
            return Ok(());
        }

        let known_to_clients = self
            .clients
            .iter()
            .any(|client| client.positions().iter().any(|position| position == old));
        if !known_to_clients && !self.position_placements.contains_key(old) {
            return Err(AppError::NotFound(format!("position '{old}'")));
        }

        let taken_by_clients = self
            .clients
            .iter()
            .any(|client| client.positions().iter().any(|position| position == &new));
        if taken_by_clients || self.position_placements.contains_key(&new) {
            return Err(AppError::Conflict(format!(
                "position '{new}' already exists"
            )));
        }

        for client in &mut self.clients {
            client.rename_position(old, &new);
        }
        if let Some(placements) = self.position_placements.remove(old) {
            self.position_placements.insert(new, placements);
        }

        Ok(())
    }

    /// Replaces the allowed-placement list for one position.
    pub fn set_position_placements(
        &mut self,
        position: impl Into<String>,
        placements: Vec<String>,
    ) -> AppResult<()> {
        let position = String::from(NonEmptyString::new(position)?);
        self.position_placements.insert(position, placements);
        Ok(())
    }

    /// Returns the clients currently offered to applicants.
    #[must_use]
    pub fn active_clients(&self) -> Vec<&ClientConfig> {
        self.clients.iter().filter(|client| client.is_active()).collect()
    }

    /// Returns the locations currently offered to applicants.
    #[must_use]
    pub fn active_locations(&self) -> Vec<&LocationConfig> {
        self.locations
            .iter()
            .filter(|location| location.is_active())
            .collect()
    }

    /// Returns the position names offered by one client.
    #[must_use]
    pub fn positions_for_client(&self, client_id: &str) -> &[String] {
        self.clients
            .iter()
            .find(|client| client.id() == client_id)
            .map(ClientConfig::positions)
            .unwrap_or_default()
    }

    /// Returns the sub-locations one client offers at one location.
    #[must_use]
    pub fn sublocations(&self, client_id: &str, location_id: &str) -> &[String] {
        self.locations
            .iter()
            .find(|location| location.id() == location_id)
            .map(|location| location.sublocations_for(client_id))
            .unwrap_or_default()
    }

    /// Returns the allowed placements for one position.
    #[must_use]
    pub fn placements_for_position(&self, position: &str) -> &[String] {
        self.position_placements
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::{FormConfig, FormStep, StoredFormConfig};
    use crate::defaults::default_form_config;
    use crate::field::{FieldControl, FormField, FormFieldInput, GridCols};
    use crate::reference::ClientConfig;

    fn input(id: &str, step: usize, order: i32) -> FormFieldInput {
        FormFieldInput {
            id: id.to_owned(),
            name: id.to_owned(),
            label: id.to_owned(),
            control: FieldControl::Text { max_length: None },
            required: false,
            placeholder: None,
            icon: None,
            step,
            order,
            grid_cols: Some(GridCols::Full),
            is_urgent: false,
            is_hidden: false,
        }
    }

    fn field(id: &str, step: usize, order: i32) -> FormField {
        FormField::new(input(id, step, order)).unwrap_or_else(|_| unreachable!())
    }

    fn two_step_config() -> FormConfig {
        let steps = vec![
            FormStep::new("first", "First", "User", "from-blue-400 to-blue-500", Vec::new())
                .unwrap_or_else(|_| unreachable!()),
            FormStep::new("second", "Second", "MapPin", "from-green-400 to-green-500", Vec::new())
                .unwrap_or_else(|_| unreachable!()),
        ];
        FormConfig::from_parts(steps, Vec::new(), Vec::new(), BTreeMap::new())
    }

    fn step_order(config: &FormConfig, step: usize) -> Vec<&str> {
        config.steps()[step]
            .fields()
            .iter()
            .map(super::FormField::id)
            .collect()
    }

    #[test]
    fn add_field_sorts_the_target_step_by_order() {
        let mut config = two_step_config();

        config
            .add_field(field("f1", 0, 5))
            .unwrap_or_else(|_| unreachable!());
        config
            .add_field(field("f2", 0, 2))
            .unwrap_or_else(|_| unreachable!());

        assert_eq!(step_order(&config, 0), vec!["f2", "f1"]);
    }

    #[test]
    fn add_field_rejects_out_of_range_step() {
        let mut config = two_step_config();
        let result = config.add_field(field("f1", 9, 0));
        assert!(result.is_err());
    }

    #[test]
    fn equal_orders_keep_insertion_order() {
        let mut config = two_step_config();

        for id in ["a", "b", "c"] {
            config
                .add_field(field(id, 0, 1))
                .unwrap_or_else(|_| unreachable!());
        }

        assert_eq!(step_order(&config, 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn edit_moves_field_between_steps_without_duplicating() {
        let mut config = two_step_config();
        config
            .add_field(field("f1", 0, 0))
            .unwrap_or_else(|_| unreachable!());

        config
            .upsert_field(field("f1", 1, 3))
            .unwrap_or_else(|_| unreachable!());

        assert!(step_order(&config, 0).is_empty());
        assert_eq!(step_order(&config, 1), vec!["f1"]);

        config.remove_field("f1");
        assert!(config.field("f1").is_none());
    }

    #[test]
    fn hidden_fields_are_not_rendered() {
        let mut config = two_step_config();
        config
            .add_field(field("shown", 0, 0))
            .unwrap_or_else(|_| unreachable!());
        let concealed = FormField::new(FormFieldInput {
            is_hidden: true,
            required: true,
            ..input("concealed", 0, 1)
        })
        .unwrap_or_else(|_| unreachable!());
        config.add_field(concealed).unwrap_or_else(|_| unreachable!());

        let visible = config.steps()[0].visible_fields();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "shown");

        let stored = config.field("concealed").unwrap_or_else(|| unreachable!());
        assert!(!stored.is_required());
    }

    #[test]
    fn remove_field_scans_every_step() {
        let mut config = two_step_config();
        config
            .add_field(field("f1", 0, 0))
            .unwrap_or_else(|_| unreachable!());
        config
            .add_field(field("f2", 1, 0))
            .unwrap_or_else(|_| unreachable!());

        assert!(config.remove_field("f2"));
        assert!(!config.remove_field("f2"));
        assert!(config.field("f1").is_some());
        assert!(config.field("f2").is_none());
    }

    #[test]
    fn upsert_client_replaces_in_place() {
        let mut config = two_step_config();
        config.upsert_client(
            ClientConfig::new("adira", "ADIRA", vec!["TELLER".to_owned()], true)
                .unwrap_or_else(|_| unreachable!()),
        );
        config.upsert_client(
            ClientConfig::new("sms", "SMS", Vec::new(), true).unwrap_or_else(|_| unreachable!()),
        );

        config.upsert_client(
            ClientConfig::new("adira", "ADIRA FINANCE", vec!["TELLER".to_owned()], false)
                .unwrap_or_else(|_| unreachable!()),
        );

        assert_eq!(config.clients().len(), 2);
        assert_eq!(config.clients()[0].name(), "ADIRA FINANCE");
        assert!(!config.clients()[0].is_active());
        assert_eq!(config.active_clients().len(), 1);
    }

    #[test]
    fn rename_position_updates_clients_and_placements_together() {
        let mut config = default_form_config();
        let old = "Sales Officer - CMO";
        let new = "Sales Officer";
        let placements = config.placements_for_position(old).to_vec();
        assert!(!placements.is_empty());

        config
            .rename_position(old, new)
            .unwrap_or_else(|_| unreachable!());

        for client in config.clients() {
            assert!(!client.positions().iter().any(|position| position == old));
        }
        assert!(config.placements_for_position(old).is_empty());
        assert_eq!(config.placements_for_position(new), placements.as_slice());
    }

    #[test]
    fn rename_position_rejects_unknown_and_taken_names() {
        let mut config = default_form_config();

        assert!(config.rename_position("No Such Position", "Whatever").is_err());
        assert!(
            config
                .rename_position("Sales Officer - CMO", "TELLER")
                .is_err()
        );
    }

    #[test]
    fn stored_sections_fall_back_independently() {
        let stored = StoredFormConfig {
            clients: Some(vec![
                ClientConfig::new("acme", "ACME", Vec::new(), true)
                    .unwrap_or_else(|_| unreachable!()),
            ]),
            ..StoredFormConfig::default()
        };

        let config = FormConfig::from_stored(stored, default_form_config());
        let fallback = default_form_config();

        assert_eq!(config.clients().len(), 1);
        assert_eq!(config.clients()[0].id(), "acme");
        assert_eq!(config.steps(), fallback.steps());
        assert_eq!(config.locations(), fallback.locations());
        assert_eq!(config.position_placements(), fallback.position_placements());
    }

    #[test]
    fn stored_empty_sections_are_kept_as_is() {
        let stored = StoredFormConfig {
            steps: Some(Vec::new()),
            ..StoredFormConfig::default()
        };

        let config = FormConfig::from_stored(stored, default_form_config());

        assert!(config.steps().is_empty());
        assert!(!config.clients().is_empty());
    }

    proptest! {
        #[test]
        fn step_stays_sorted_and_stable_under_adds(orders in proptest::collection::vec(-3i32..3, 1..24)) {
            let mut config = two_step_config();

            for (index, order) in orders.iter().enumerate() {
                config
                    .add_field(field(&format!("f{index:02}"), 0, *order))
                    .unwrap_or_else(|_| unreachable!());
            }

            let fields = config.steps()[0].fields();
            for pair in fields.windows(2) {
                prop_assert!(pair[0].order() <= pair[1].order());
                if pair[0].order() == pair[1].order() {
                    // Ids encode insertion order; equal orders must keep it.
                    prop_assert!(pair[0].id() < pair[1].id());
                }
            }
        }
    }
}
