//! Tests for the admin registry handed to the console.

use campus_events::server::{
    admin::{default_descriptors, parse_choice, AdminSite, FieldKind},
    error::{admin::AdminError, validation::ValidationError, Error},
    model::app::AppState,
};
use campus_events_test_utils::prelude::*;
use entity::sea_orm_active_enums::{EventStatus, EventType, Role, TargetAudience};

/// Tests that application state built from a connection carries the default registry.
///
/// Expected: all seven entities registered
#[tokio::test]
async fn app_state_uses_default_registry() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let state: AppState = test.to_app_state();

    assert_eq!(state.admin.len(), 7);
    assert!(state.admin.get("EventSuccessReport").is_some());

    Ok(())
}

/// Tests registering a descriptor twice on a site built from the defaults.
///
/// Expected: Err with the duplicate name, the site is unchanged
#[test]
fn duplicate_registration_rejected() {
    let mut site = AdminSite::new(default_descriptors()).unwrap();
    let event = site.get("Event").cloned().unwrap();

    let result = site.register(event);

    assert_eq!(result, Err(AdminError::AlreadyRegistered("Event".to_string())));
    assert_eq!(site.len(), 7);

    let err = Error::from(AdminError::AlreadyRegistered("Event".to_string()));
    assert_eq!(
        err.to_string(),
        "Entity \"Event\" is already registered with the admin site"
    );
}

/// Tests the choice labels exposed for every enum field.
///
/// Expected: labels match the admin choices verbatim
#[test]
fn choice_labels_verbatim() {
    let site = AdminSite::default();
    let labels = |entity: &str, field: &str| -> Vec<(String, String)> {
        let descriptor = site.get(entity).unwrap();
        let field = descriptor.fields.iter().find(|f| f.name == field).unwrap();
        match &field.kind {
            FieldKind::Choice { choices } => choices
                .iter()
                .map(|c| (c.code.clone(), c.label.clone()))
                .collect(),
            kind => panic!("{} is not a choice field: {:?}", field.name, kind),
        }
    };

    assert_eq!(
        labels("Event", "event_type")[2],
        ("CULTURAL".to_string(), "Cultural Fest".to_string())
    );
    assert_eq!(
        labels("Event", "target_audience"),
        vec![
            ("STUDENT".to_string(), "Students".to_string()),
            ("PARENT".to_string(), "Parents".to_string()),
            ("ALL".to_string(), "All".to_string()),
        ]
    );
    assert_eq!(
        labels("User", "role")[0],
        ("ADMIN".to_string(), "Administrator".to_string())
    );
    assert_eq!(labels("Feedback", "rating").len(), 5);
}

/// Tests parsing submitted codes for each enum.
///
/// Expected: known codes parse, unknown codes fail with InvalidChoice
#[test]
fn parse_submitted_codes() {
    assert_eq!(
        parse_choice::<EventType>("event_type", "EXAM"),
        Ok(EventType::Exam)
    );
    assert_eq!(parse_choice::<Role>("role", "MANAGEMENT"), Ok(Role::Management));
    assert_eq!(
        parse_choice::<TargetAudience>("target_audience", "ALL"),
        Ok(TargetAudience::All)
    );

    let err = parse_choice::<EventStatus>("status", "ARCHIVED").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidChoice {
            field: "status",
            value: "ARCHIVED".to_string(),
        }
    );
}
