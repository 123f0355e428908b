//! Tests for the error payloads shown on admin forms.

use campus_events::server::{
    data::{registration::RegistrationRepository, user::UserRepository},
    error::Constraint,
    model::{api::FormErrorDto, form::RegistrationForm, form::UserForm},
};
use campus_events_test_utils::prelude::*;
use entity::sea_orm_active_enums::Role;

/// Tests a registration pointing at an event that does not exist.
///
/// Expected: a form-wide foreign key message
#[tokio::test]
async fn missing_reference_is_form_wide() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let student = test.user().insert_user("student", Role::Student).await?;

    let err = RegistrationRepository::new(&test.db)
        .create(RegistrationForm {
            event_id: 404,
            user_id: student.id,
            attended: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.constraint(), Some(Constraint::ForeignKey));
    assert_eq!(
        err.to_form_error(),
        FormErrorDto {
            field: None,
            error: "Referenced record does not exist".to_string(),
        }
    );

    Ok(())
}

/// Tests a duplicate username.
///
/// Expected: a form-wide unique message that serializes for the console
#[tokio::test]
async fn duplicate_username_is_form_wide() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_campus_tables()
        .with_user("alice", Role::Teacher)
        .build()
        .await?;

    let err = UserRepository::new(&test.db)
        .create(UserForm::new("alice", Role::Student))
        .await
        .unwrap_err();
    let form_error = err.to_form_error();

    assert_eq!(err.constraint(), Some(Constraint::Unique));
    let json = serde_json::to_value(&form_error).unwrap();
    assert_eq!(json["field"], serde_json::Value::Null);
    assert_eq!(json["error"], "A record with this value already exists");

    Ok(())
}

/// Tests a blank required field.
///
/// Expected: the message is attached to the field
#[tokio::test]
async fn blank_field_is_attached() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;

    let err = UserRepository::new(&test.db)
        .create(UserForm::new("", Role::Student))
        .await
        .unwrap_err();

    assert_eq!(err.to_form_error().field.as_deref(), Some("username"));

    Ok(())
}
