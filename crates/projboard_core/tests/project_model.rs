use projboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_new_sets_defaults() {
    let project = Project::new("Website", "Relaunch the site", 4);

    assert!(!project.id().is_nil());
    assert_eq!(project.title(), "Website");
    assert_eq!(project.description(), "Relaunch the site");
    assert_eq!(project.people(), 4);
    assert_eq!(project.status(), ProjectStatus::Active);
}

#[test]
fn generated_ids_differ() {
    let first = Project::new("a", "first project", 1);
    let second = Project::new("a", "first project", 1);
    assert_ne!(first.id(), second.id());
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project = Project::with_id(id, "Docs", "Write the handbook", 2);

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Docs");
    assert_eq!(json["description"], "Write the handbook");
    assert_eq!(json["people"], 2);
    assert_eq!(json["status"], "active");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn finished_status_deserializes_from_wire_name() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Done",
        "description": "Already shipped",
        "people": 1,
        "status": "finished"
    });

    let project: Project = serde_json::from_value(value).unwrap();
    assert_eq!(project.status(), ProjectStatus::Finished);
    assert!(project.has_status(ProjectStatus::Finished));
}

#[test]
fn status_names_round_trip() {
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        assert_eq!(ProjectStatus::parse(status.as_str()).unwrap(), status);
    }
}
