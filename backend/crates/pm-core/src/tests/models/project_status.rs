use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Active.as_str(), "ACTIVE");
    assert_eq!(ProjectStatus::Archived.as_str(), "ARCHIVED");
    assert_eq!(ProjectStatus::Completed.as_str(), "COMPLETED");
}

#[test]
fn test_project_status_from_str() {
    assert_eq!(
        ProjectStatus::from_str("ACTIVE").unwrap(),
        ProjectStatus::Active
    );
    assert_eq!(
        ProjectStatus::from_str("ARCHIVED").unwrap(),
        ProjectStatus::Archived
    );
    assert_eq!(
        ProjectStatus::from_str("COMPLETED").unwrap(),
        ProjectStatus::Completed
    );
    assert!(ProjectStatus::from_str("active").is_err());
    assert!(ProjectStatus::from_str("invalid").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
}

#[test]
fn test_project_status_serde_uses_labels() {
    let json = serde_json::to_string(&ProjectStatus::Completed).unwrap();
    assert_eq!(json, "\"COMPLETED\"");

    let parsed: ProjectStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
    assert_eq!(parsed, ProjectStatus::Archived);
}

#[test]
fn test_project_status_all_round_trips_through_from_str() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::from_str(status.as_str()).unwrap(), status);
    }
}
