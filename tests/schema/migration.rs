//! Tests for the `migration` crate.
//!
//! These run the real migrations instead of creating tables from the entities, so they
//! catch drift between the two.

use campus_events::server::{
    data::{event::EventRepository, registration::RegistrationRepository, user::UserRepository},
    error::Constraint,
    model::form::{EventForm, RegistrationForm, UserForm},
};
use campus_events_test_utils::prelude::*;
use entity::sea_orm_active_enums::{EventStatus, EventType, Role, TargetAudience};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr, EntityTrait, QuerySelect};

fn sports_day(created_by: i32) -> EventForm {
    EventForm {
        title: "Sports Day".to_string(),
        description: "Annual sports day".to_string(),
        event_type: EventType::Sports,
        status: None,
        start_datetime: constant::test_event_start(),
        end_datetime: constant::test_event_end(),
        duration_minutes: constant::TEST_EVENT_DURATION_MINUTES,
        organizing_department: constant::TEST_DEPARTMENT.to_string(),
        created_by,
        venue_id: None,
        is_registration_required: None,
        registration_deadline: None,
        target_audience: TargetAudience::All,
    }
}

async fn migrated() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Tests applying every migration to an empty database.
///
/// Expected: Ok with no pending migrations left
#[tokio::test]
async fn applies_to_empty_database() -> Result<(), TestError> {
    let db = migrated().await?;

    assert!(Migrator::get_pending_migrations(&db).await?.is_empty());

    Ok(())
}

/// Tests rolling every migration back and applying them again.
///
/// Expected: Ok on both passes
#[tokio::test]
async fn down_then_up() -> Result<(), TestError> {
    let db = migrated().await?;

    Migrator::down(&db, None).await?;
    Migrator::up(&db, None).await?;

    Ok(())
}

/// Tests the stored defaults and repository round trip against migrated tables.
///
/// Expected: Ok with status stored as the `DRAFT` code
#[tokio::test]
async fn event_status_stored_as_code() -> Result<(), TestError> {
    let db = migrated().await?;
    let user = UserRepository::new(&db)
        .create(UserForm::new("teacher", Role::Teacher))
        .await
        .unwrap();

    let event = EventRepository::new(&db)
        .create(sports_day(user.id))
        .await
        .unwrap();
    assert_eq!(event.status, EventStatus::Draft);

    let status = entity::prelude::Event::find_by_id(event.id)
        .select_only()
        .column(entity::event::Column::Status)
        .into_tuple::<String>()
        .one(&db)
        .await?;
    let status = status.unwrap();
    assert_eq!(status, "DRAFT");

    Ok(())
}

/// Tests that migrated foreign keys reject references to missing rows.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn registration_requires_event() -> Result<(), TestError> {
    let db = migrated().await?;
    let user = UserRepository::new(&db)
        .create(UserForm::new("student", Role::Student))
        .await
        .unwrap();

    let result = RegistrationRepository::new(&db)
        .create(RegistrationForm {
            event_id: 1,
            user_id: user.id,
            attended: None,
        })
        .await;

    assert_eq!(result.unwrap_err().constraint(), Some(Constraint::ForeignKey));

    Ok(())
}

/// Tests the rating check constraint on the migrated feedback table.
///
/// Inserts bypass the form validation to reach the database directly.
///
/// Expected: Err for a rating of 6
#[tokio::test]
async fn feedback_rating_checked_by_database() -> Result<(), TestError> {
    use chrono::Utc;
    use sea_orm::ActiveValue;

    let db = migrated().await?;
    let user = UserRepository::new(&db)
        .create(UserForm::new("teacher", Role::Teacher))
        .await
        .unwrap();
    let event = EventRepository::new(&db)
        .create(sports_day(user.id))
        .await
        .unwrap();

    let result = entity::prelude::Feedback::insert(entity::feedback::ActiveModel {
        event_id: ActiveValue::Set(event.id),
        user_id: ActiveValue::Set(user.id),
        rating: ActiveValue::Set(6),
        comments: ActiveValue::Set("Too good".to_string()),
        submitted_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec(&db)
    .await;

    assert!(result.is_err());

    Ok(())
}
