//! Project input form.
//!
//! # Responsibility
//! - Hold raw title/description/people input values.
//! - Validate them against `FormRules` and submit accepted drafts to the store.
//!
//! # Invariants
//! - Invalid input is never passed to the store and is kept for correction.
//! - Accepted input is cleared after the project is added.
//! - Rejections carry one user-facing message regardless of which field failed.

use crate::model::project::ProjectId;
use crate::store::project_store::ProjectStore;
use crate::validation::rules::{validate, Validatable, ValidationValue};
use crate::view::component::{Component, ComponentConfig, InsertPosition};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Message shown to the user when any field fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input please try again.";

const INPUT_TEMPLATE_ID: &str = "project-input";
const INPUT_ELEMENT_ID: &str = "user-input";
const APP_HOST_ID: &str = "app";

/// Constraint set for one form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRules {
    /// Attaches these constraints to `value`.
    pub fn apply(&self, value: ValidationValue) -> Validatable {
        Validatable {
            value,
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }
}

/// Constraints for the whole project form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRules {
                required: true,
                ..FieldRules::default()
            },
            description: FieldRules {
                required: true,
                min_length: Some(5),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(1.0),
                max: Some(5.0),
                ..FieldRules::default()
            },
        }
    }
}

/// Form field identifier, used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Form submission error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A field failed validation. Displays [`INVALID_INPUT_MESSAGE`].
    Invalid(FormField),
    /// `submit` was called before `configure` attached a store.
    NotConfigured,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(_) => f.write_str(INVALID_INPUT_MESSAGE),
            Self::NotConfigured => f.write_str("project form is not attached to a store"),
        }
    }
}

impl Error for InputError {}

/// Validated values ready to become a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Headless project input form.
pub struct ProjectInputForm {
    config: ComponentConfig,
    rules: FormRules,
    title: String,
    description: String,
    people: String,
    store: Option<Arc<ProjectStore>>,
}

impl Default for ProjectInputForm {
    fn default() -> Self {
        Self::new(FormRules::default())
    }
}

impl ProjectInputForm {
    pub fn new(rules: FormRules) -> Self {
        Self {
            config: ComponentConfig::new(INPUT_TEMPLATE_ID, APP_HOST_ID)
                .with_position(InsertPosition::AfterBegin)
                .with_element_id(INPUT_ELEMENT_ID),
            rules,
            title: String::new(),
            description: String::new(),
            people: String::new(),
            store: None,
        }
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Replaces all three raw input values.
    pub fn set_inputs(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    /// Current raw `(title, description, people)` values.
    pub fn inputs(&self) -> (&str, &str, &str) {
        (&self.title, &self.description, &self.people)
    }

    /// Validates the current inputs without submitting them.
    ///
    /// Title and description are returned untrimmed, as entered.
    pub fn gather(&self) -> Result<ProjectDraft, InputError> {
        let people = coerce_number(&self.people);

        if !validate(&self.rules.title.apply(ValidationValue::Text(self.title.clone()))) {
            return Err(InputError::Invalid(FormField::Title));
        }
        if !validate(
            &self
                .rules
                .description
                .apply(ValidationValue::Text(self.description.clone())),
        ) {
            return Err(InputError::Invalid(FormField::Description));
        }
        if !validate(&self.rules.people.apply(ValidationValue::Number(people))) {
            return Err(InputError::Invalid(FormField::People));
        }
        let people = whole_people(people).ok_or(InputError::Invalid(FormField::People))?;

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    /// Validates and adds the current inputs to the configured store.
    ///
    /// On success the inputs are cleared. On failure they are left untouched.
    pub fn submit(&mut self) -> Result<ProjectId, InputError> {
        let store = self.store.clone().ok_or(InputError::NotConfigured)?;
        let draft = match self.gather() {
            Ok(draft) => draft,
            Err(err) => {
                if let InputError::Invalid(field) = &err {
                    warn!(
                        "event=input_rejected module=form status=error field={}",
                        field.as_str()
                    );
                }
                return Err(err);
            }
        };

        let id = store.add_project(draft.title, draft.description, draft.people);
        self.clear_inputs();
        debug!("event=form_submitted module=form status=ok project_id={id}");
        Ok(id)
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

impl Component for ProjectInputForm {
    fn config(&self) -> &ComponentConfig {
        &self.config
    }

    fn configure(&mut self, store: &Arc<ProjectStore>) {
        self.store = Some(Arc::clone(store));
    }

    // Form markup is static.
    fn render_content(&mut self) {}
}

/// Numeric coercion of a raw input: blank is zero, junk is NaN.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn whole_people(value: f64) -> Option<u32> {
    if value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}
