//! Tests for EventService against the repositories it guards.

use campus_events::server::{
    data::event::EventRepository,
    error::{event::EventError, Error},
    service::event::EventService,
};
use campus_events_test_utils::prelude::*;
use entity::sea_orm_active_enums::{EventStatus, Role};
use sea_orm::Iterable;

/// Tests every pair of statuses through the guarded path.
///
/// Each pair starts from an event forced into `from` with the unguarded setter.
///
/// Expected: only the workflow edges succeed
#[tokio::test]
async fn only_workflow_edges_succeed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let event_repository = EventRepository::new(&test.db);
    let event_service = EventService::new(&test.db);
    let allowed = [
        (EventStatus::Draft, EventStatus::Pending),
        (EventStatus::Pending, EventStatus::Approved),
        (EventStatus::Pending, EventStatus::Rejected),
        (EventStatus::Approved, EventStatus::Completed),
    ];

    for from in EventStatus::iter() {
        for to in EventStatus::iter() {
            let event = test.event().insert_event(teacher.id, None).await?;
            event_repository.set_status(event.id, from).await.unwrap();

            let result = event_service.transition_status(event.id, to).await;

            if allowed.contains(&(from, to)) {
                assert_eq!(result.unwrap().status, to);
            } else {
                assert!(
                    matches!(
                        result,
                        Err(Error::EventError(EventError::InvalidStatusTransition { .. }))
                    ),
                    "{:?} -> {:?} should be rejected",
                    from,
                    to
                );
            }
        }
    }

    Ok(())
}

/// Tests that the coordinator rule lives in the service only.
///
/// Expected: the repository accepts a student, the service refuses one
#[tokio::test]
async fn coordinator_rule_is_service_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_campus_tables().build().await?;
    let teacher = test.user().insert_user("teacher", Role::Teacher).await?;
    let student = test.user().insert_user("student", Role::Student).await?;
    let parent = test.user().insert_user("parent", Role::Parent).await?;
    let event = test.event().insert_event(teacher.id, None).await?;

    EventRepository::new(&test.db)
        .add_coordinator(event.id, student.id)
        .await
        .unwrap();
    let result = EventService::new(&test.db)
        .add_coordinator(event.id, parent.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::EventError(EventError::CoordinatorNotTeacher { .. }))
    ));
    let coordinators = EventRepository::new(&test.db)
        .get_coordinators(event.id)
        .await
        .unwrap();
    assert_eq!(coordinators, vec![student]);

    Ok(())
}
