//! Tests for delete behaviour across the schema.
//!
//! Deleting a user or an event removes everything that hangs off it, deleting a venue only
//! detaches its events.

use campus_events::server::data::{
    event::EventRepository, feedback::FeedbackRepository, registration::RegistrationRepository,
    user::UserRepository, venue::VenueRepository,
};
use campus_events_test_utils::prelude::*;
use entity::sea_orm_active_enums::Role;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a user who registered for and rated an event.
///
/// Expected: the user's registrations and feedback are removed, other users' rows stay
#[tokio::test]
async fn deleting_user_removes_registrations_and_feedback() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let alice = test.user().insert_user("alice", Role::Student).await?;
    let bob = test.user().insert_user("bob", Role::Student).await?;
    let event = test.event().insert_event(teacher.id, None).await?;
    for student in [&alice, &bob] {
        test.event()
            .insert_registration(event.id, student.id, true)
            .await?;
        test.event().insert_feedback(event.id, student.id, 4).await?;
    }

    let result = UserRepository::new(&test.db).delete(alice.id).await.unwrap();

    assert_eq!(result.rows_affected, 1);
    let registrations = RegistrationRepository::new(&test.db);
    let feedback = FeedbackRepository::new(&test.db);
    assert!(registrations.list_by_user_id(alice.id).await.unwrap().is_empty());
    assert!(feedback.list_by_user_id(alice.id).await.unwrap().is_empty());
    assert_eq!(registrations.list_by_user_id(bob.id).await.unwrap().len(), 1);
    assert_eq!(feedback.list_by_user_id(bob.id).await.unwrap().len(), 1);

    Ok(())
}

/// Tests deleting the user who created an event.
///
/// Expected: the created event and its coordinator rows are removed with the user
#[tokio::test]
async fn deleting_creator_removes_events() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let creator = test.user().insert_user("creator", Role::Management).await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let event = test.event().insert_event(creator.id, None).await?;
    test.event().insert_coordinator(event.id, teacher.id).await?;

    UserRepository::new(&test.db).delete(creator.id).await.unwrap();

    let event_repository = EventRepository::new(&test.db);
    assert!(event_repository.get(event.id).await.unwrap().is_none());
    assert!(event_repository
        .list_coordinated_by(teacher.id)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        entity::prelude::EventCoordinator::find()
            .count(&test.db)
            .await?,
        0
    );

    Ok(())
}

/// Tests deleting a coordinator.
///
/// Expected: only the coordinator link goes, the event stays
#[tokio::test]
async fn deleting_coordinator_keeps_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let creator = test.user().insert_user("creator", Role::Admin).await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let event = test.event().insert_event(creator.id, None).await?;
    test.event().insert_coordinator(event.id, teacher.id).await?;

    UserRepository::new(&test.db).delete(teacher.id).await.unwrap();

    let event_repository = EventRepository::new(&test.db);
    assert!(event_repository.get(event.id).await.unwrap().is_some());
    assert!(event_repository
        .get_coordinators(event.id)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}

/// Tests deleting a venue that events are held at.
///
/// Expected: the events survive with no venue
#[tokio::test]
async fn deleting_venue_detaches_events() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let venue = test.venue().insert_venue("Main Hall", 300).await?;
    let first = test.event().insert_event(teacher.id, Some(venue.id)).await?;
    let second = test.event().insert_event(teacher.id, Some(venue.id)).await?;

    VenueRepository::new(&test.db).delete(venue.id).await.unwrap();

    let event_repository = EventRepository::new(&test.db);
    for event_id in [first.id, second.id] {
        let event = event_repository.get(event_id).await.unwrap().unwrap();
        assert_eq!(event.venue_id, None);
    }

    Ok(())
}

/// Tests deleting an event with every kind of dependent row.
///
/// Expected: registrations, feedback, resource requests and the report are removed while
/// users and resources stay
#[tokio::test]
async fn deleting_event_removes_dependents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_campus_tables()
        .with_resource("Projector", 2)
        .build()
        .await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let student = test.user().insert_user("student", Role::Student).await?;
    let event = test.event().insert_event(teacher.id, None).await?;
    test.event().insert_resource_request(event.id, 1, 1).await?;
    test.event()
        .insert_registration(event.id, student.id, true)
        .await?;
    test.event().insert_feedback(event.id, student.id, 5).await?;
    campus_events::server::service::report::ReportService::new(&test.db)
        .generate(event.id)
        .await
        .unwrap();

    EventRepository::new(&test.db).delete(event.id).await.unwrap();

    assert_eq!(entity::prelude::Registration::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Feedback::find().count(&test.db).await?, 0);
    assert_eq!(
        entity::prelude::EventResourceRequest::find()
            .count(&test.db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::EventSuccessReport::find()
            .count(&test.db)
            .await?,
        0
    );
    assert_eq!(entity::prelude::CampusUser::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::Resource::find().count(&test.db).await?, 1);

    Ok(())
}
