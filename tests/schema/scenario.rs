//! End-to-end scenarios through the repositories.

use campus_events::server::{
    data::{
        event::EventRepository, feedback::FeedbackRepository,
        registration::RegistrationRepository, user::UserRepository,
    },
    error::{validation::ValidationError, Error},
    model::form::{EventForm, FeedbackForm, RegistrationForm, UserForm},
};
use campus_events_test_utils::prelude::*;
use entity::sea_orm_active_enums::{EventStatus, EventType, Role, TargetAudience};

fn tech_fest(created_by: i32, venue_id: Option<i32>) -> EventForm {
    EventForm {
        title: constant::TEST_EVENT_TITLE.to_string(),
        description: "Robotics, hackathon and talks".to_string(),
        event_type: EventType::Cultural,
        status: None,
        start_datetime: constant::test_event_start(),
        end_datetime: constant::test_event_end(),
        duration_minutes: constant::TEST_EVENT_DURATION_MINUTES,
        organizing_department: constant::TEST_DEPARTMENT.to_string(),
        created_by,
        venue_id,
        is_registration_required: None,
        registration_deadline: None,
        target_audience: TargetAudience::All,
    }
}

/// Tests creating "Tech Fest" without a status and reading it back.
///
/// Expected: the stored event is a DRAFT
#[tokio::test]
async fn tech_fest_starts_as_draft() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = UserRepository::new(&test.db)
        .create(UserForm::new("teacher", Role::Teacher))
        .await
        .unwrap();
    let event_repository = EventRepository::new(&test.db);

    let created = event_repository
        .create(tech_fest(teacher.id, None))
        .await
        .unwrap();
    let stored = event_repository.get(created.id).await.unwrap().unwrap();

    assert_eq!(stored.status, EventStatus::Draft);
    assert_eq!(stored.title, "Tech Fest");
    assert_eq!(stored, created);

    Ok(())
}

/// Tests booking one venue for two events at the same time.
///
/// Expected: both events are stored, nothing detects the clash
#[tokio::test]
async fn overlapping_events_share_venue() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let venue = test.venue().insert_venue("Auditorium", 50).await?;
    let event_repository = EventRepository::new(&test.db);

    let mut talk = tech_fest(teacher.id, Some(venue.id));
    talk.title = "Guest Talk".to_string();
    talk.event_type = EventType::Seminar;

    event_repository
        .create(tech_fest(teacher.id, Some(venue.id)))
        .await
        .unwrap();
    event_repository.create(talk).await.unwrap();

    assert_eq!(event_repository.list_by_venue(venue.id).await.unwrap().len(), 2);

    Ok(())
}

/// Tests registering the same user for the same event twice.
///
/// Expected: both registrations are stored
#[tokio::test]
async fn duplicate_registration_allowed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let student = test.user().insert_user("student", Role::Student).await?;
    let event = test.event().insert_event(teacher.id, None).await?;
    let registration_repository = RegistrationRepository::new(&test.db);
    let form = RegistrationForm {
        event_id: event.id,
        user_id: student.id,
        attended: None,
    };

    registration_repository.create(form.clone()).await.unwrap();
    registration_repository.create(form).await.unwrap();

    assert_eq!(
        registration_repository
            .list_by_event_id(event.id)
            .await
            .unwrap()
            .len(),
        2
    );

    Ok(())
}

/// Tests rating an event outside of 1 to 5.
///
/// Expected: 0 and 6 fail validation, nothing is stored
#[tokio::test]
async fn rating_out_of_range_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let student = test.user().insert_user("student", Role::Student).await?;
    let event = test.event().insert_event(teacher.id, None).await?;
    let feedback_repository = FeedbackRepository::new(&test.db);

    for rating in [0, 6] {
        let result = feedback_repository
            .create(FeedbackForm {
                event_id: event.id,
                user_id: student.id,
                rating,
                comments: "Out of range".to_string(),
            })
            .await;

        match result {
            Err(Error::ValidationError(ValidationError::OutOfRange { value, .. })) => {
                assert_eq!(value, i64::from(rating))
            }
            other => panic!("expected out of range error, got {:?}", other),
        }
    }

    assert!(feedback_repository
        .list_by_event_id(event.id)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}

/// Tests the stored enum codes for every role.
///
/// Expected: each role round trips through the user table
#[tokio::test]
async fn every_role_round_trips() -> Result<(), TestError> {
    use sea_orm::Iterable;

    let test = TestBuilder::new().with_campus_tables().build().await?;
    let user_repository = UserRepository::new(&test.db);

    for (index, role) in Role::iter().enumerate() {
        let user = user_repository
            .create(UserForm::new(format!("user{}", index), role))
            .await
            .unwrap();

        assert_eq!(user_repository.get(user.id).await.unwrap().unwrap().role, role);
    }

    assert_eq!(user_repository.list().await.unwrap().len(), 5);

    Ok(())
}
