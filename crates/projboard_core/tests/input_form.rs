use projboard_core::{
    validate, Component, FieldRules, FormField, FormRules, InputError, ProjectInputForm,
    ProjectStore, Validatable, INVALID_INPUT_MESSAGE,
};
use std::sync::Arc;

fn configured_form() -> (ProjectInputForm, Arc<ProjectStore>) {
    let store = Arc::new(ProjectStore::new());
    let mut form = ProjectInputForm::default();
    form.configure(&store);
    (form, store)
}

#[test]
fn validate_matches_documented_examples() {
    assert!(!validate(&Validatable::text("").required()));
    assert!(!validate(&Validatable::text("hello").required().min_length(5)));
    assert!(validate(&Validatable::text("hello!").required().min_length(5)));
    assert!(validate(&Validatable::number(5.0).min(1.0).max(5.0)));
    assert!(!validate(&Validatable::number(6.0).min(1.0).max(5.0)));
}

#[test]
fn valid_submission_reaches_store_and_clears_inputs() {
    let (mut form, store) = configured_form();
    form.set_inputs("Roadmap", "Plan the next quarter", "3");

    let id = form.submit().unwrap();

    let projects = store.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id(), id);
    assert_eq!(projects[0].title(), "Roadmap");
    assert_eq!(projects[0].people(), 3);
    assert_eq!(form.inputs(), ("", "", ""));
}

#[test]
fn invalid_submission_keeps_inputs_and_reports_alert_message() {
    let (mut form, store) = configured_form();
    form.set_inputs("Roadmap", "short", "3");

    let err = form.submit().unwrap_err();

    assert_eq!(err, InputError::Invalid(FormField::Description));
    assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
    assert_eq!(err.to_string(), "Invalid input please try again.");
    assert_eq!(form.inputs(), ("Roadmap", "short", "3"));
    assert!(store.is_empty());
}

#[test]
fn blank_title_is_rejected() {
    let (mut form, _store) = configured_form();
    form.set_inputs("   ", "A long enough description", "2");
    assert_eq!(form.gather().unwrap_err(), InputError::Invalid(FormField::Title));
}

#[test]
fn people_must_be_a_whole_number_in_range() {
    let (mut form, _store) = configured_form();

    for raw in ["", "0", "1", "6", "abc", "2.5"] {
        form.set_inputs("Title", "Valid description", raw);
        assert_eq!(
            form.gather().unwrap_err(),
            InputError::Invalid(FormField::People),
            "people input `{raw}` should be rejected"
        );
    }

    for (raw, expected) in [("2", 2), (" 5 ", 5), ("4.0", 4)] {
        form.set_inputs("Title", "Valid description", raw);
        assert_eq!(form.gather().unwrap().people, expected);
    }
}

#[test]
fn submit_without_store_is_rejected() {
    let mut form = ProjectInputForm::default();
    form.set_inputs("Roadmap", "Plan the next quarter", "3");
    assert_eq!(form.submit().unwrap_err(), InputError::NotConfigured);
    assert_eq!(form.inputs().0, "Roadmap");
}

#[test]
fn custom_rules_are_honoured() {
    let rules = FormRules {
        people: FieldRules {
            required: true,
            min: Some(0.0),
            max: Some(10.0),
            ..FieldRules::default()
        },
        ..FormRules::default()
    };
    let store = Arc::new(ProjectStore::new());
    let mut form = ProjectInputForm::new(rules);
    form.configure(&store);
    form.set_inputs("Big team", "Needs lots of people", "9");

    form.submit().unwrap();
    assert_eq!(store.projects()[0].people(), 9);
}

#[test]
fn form_rules_deserialize_with_defaults_for_missing_fields() {
    let rules: FormRules = serde_json::from_value(serde_json::json!({
        "description": { "required": true, "min_length": 10 }
    }))
    .unwrap();

    assert_eq!(rules.description.min_length, Some(10));
    assert_eq!(rules.title, FormRules::default().title);
    assert_eq!(rules.people.max, Some(5.0));
}
