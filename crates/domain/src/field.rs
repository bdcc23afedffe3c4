use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swapro_core::{AppError, AppResult, NonEmptyString};

/// Supported form input types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Dropdown with a fixed option list.
    Select,
    /// Multi-line text input.
    Textarea,
    /// Date-only input.
    Date,
    /// Phone-number input.
    Tel,
    /// Numeric input.
    Number,
    /// E-mail input.
    Email,
    /// Yes/no toggle.
    Boolean,
}

impl FieldType {
    /// Returns stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Email => "email",
            Self::Boolean => "boolean",
        }
    }
}

impl FromStr for FieldType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "select" => Ok(Self::Select),
            "textarea" => Ok(Self::Textarea),
            "date" => Ok(Self::Date),
            "tel" => Ok(Self::Tel),
            "number" => Ok(Self::Number),
            "email" => Ok(Self::Email),
            "boolean" => Ok(Self::Boolean),
            _ => Err(AppError::Validation(format!(
                "unknown field type '{value}'"
            ))),
        }
    }
}

/// Type-dependent input payload.
///
/// Only the payload meaningful for a field's type exists: option lists for
/// selects, row counts and length limits for text inputs. Serializes into the
/// flat wire shape (`type` tag plus payload keys) of the stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldControl {
    /// Single-line text with an optional length limit.
    Text {
        /// Maximum accepted input length.
        #[serde(
            rename = "maxLength",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        max_length: Option<u32>,
    },
    /// Dropdown over an ordered option list.
    ///
    /// Reference-driven selects (client, position, placement) persist an
    /// empty list; the renderer sources their options from the reference
    /// tables instead.
    Select {
        /// Ordered option labels.
        #[serde(default)]
        options: Vec<String>,
    },
    /// Multi-line text area.
    Textarea {
        /// Rendered row count.
        #[serde(default = "default_textarea_rows")]
        rows: u16,
        /// Maximum accepted input length.
        #[serde(
            rename = "maxLength",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        max_length: Option<u32>,
    },
    /// Date-only input.
    Date,
    /// Phone-number input.
    Tel,
    /// Numeric input.
    Number,
    /// E-mail input.
    Email,
    /// Yes/no toggle.
    Boolean,
}

fn default_textarea_rows() -> u16 {
    4
}

impl FieldControl {
    /// Returns the field type this control renders as.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text { .. } => FieldType::Text,
            Self::Select { .. } => FieldType::Select,
            Self::Textarea { .. } => FieldType::Textarea,
            Self::Date => FieldType::Date,
            Self::Tel => FieldType::Tel,
            Self::Number => FieldType::Number,
            Self::Email => FieldType::Email,
            Self::Boolean => FieldType::Boolean,
        }
    }

    /// Returns the option list for select controls.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Select { options } => Some(options.as_slice()),
            _ => None,
        }
    }
}

/// Grid span of a rendered field: full row or half row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridCols {
    /// Field spans the full row.
    Full,
    /// Field shares the row with one neighbor.
    Half,
}

impl From<GridCols> for u8 {
    fn from(value: GridCols) -> Self {
        match value {
            GridCols::Full => 1,
            GridCols::Half => 2,
        }
    }
}

impl TryFrom<u8> for GridCols {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Full),
            2 => Ok(Self::Half),
            _ => Err(AppError::Validation(format!(
                "grid columns must be 1 or 2, got '{value}'"
            ))),
        }
    }
}

/// Raw inputs for a field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldInput {
    /// Globally unique field identifier.
    pub id: String,
    /// Data key under which the submitted value is stored.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Type-dependent input payload.
    pub control: FieldControl,
    /// Whether a value must be supplied.
    pub required: bool,
    /// Placeholder hint text.
    pub placeholder: Option<String>,
    /// Icon hint for the renderer.
    pub icon: Option<String>,
    /// Index of the owning step.
    pub step: usize,
    /// Display order within the step.
    pub order: i32,
    /// Grid span of the rendered input.
    pub grid_cols: Option<GridCols>,
    /// Whether the field is highlighted as urgent.
    pub is_urgent: bool,
    /// Whether the field is hidden from the renderer.
    pub is_hidden: bool,
}

/// One input's definition within a form step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    id: String,
    name: String,
    label: String,
    #[serde(flatten)]
    control: FieldControl,
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    step: usize,
    order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grid_cols: Option<GridCols>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_urgent: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_hidden: bool,
}

impl FormField {
    /// Creates a validated field definition.
    ///
    /// The step index is validated against the owning configuration when the
    /// field is inserted, since only the aggregate knows the step count.
    pub fn new(input: FormFieldInput) -> AppResult<Self> {
        NonEmptyString::new(input.id.as_str())?;
        NonEmptyString::new(input.name.as_str())?;
        NonEmptyString::new(input.label.as_str())?;

        Ok(Self::from_parts(input))
    }

    pub(crate) fn from_parts(input: FormFieldInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
            label: input.label,
            control: input.control,
            required: input.required,
            placeholder: input.placeholder,
            icon: input.icon,
            step: input.step,
            order: input.order,
            grid_cols: input.grid_cols,
            is_urgent: input.is_urgent,
            is_hidden: input.is_hidden,
        }
    }

    /// Returns the unique field identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the data key for submitted values.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns the type-dependent control payload.
    #[must_use]
    pub fn control(&self) -> &FieldControl {
        &self.control
    }

    /// Returns the field type.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.control.field_type()
    }

    /// Returns whether a value must be supplied.
    ///
    /// Hidden fields are never required, whatever their stored flag says.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required && !self.is_hidden
    }

    /// Returns the placeholder hint.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Returns the renderer icon hint.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the index of the owning step.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the display order within the step.
    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Returns the grid span of the rendered input.
    #[must_use]
    pub fn grid_cols(&self) -> Option<GridCols> {
        self.grid_cols
    }

    /// Returns whether the field is highlighted as urgent.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.is_urgent
    }

    /// Returns whether the field is hidden from the renderer.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }
}
