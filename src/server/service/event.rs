use entity::sea_orm_active_enums::{EventStatus, Role};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{event::EventRepository, user::UserRepository},
    error::{event::EventError, Error},
};

/// Guarded event operations used by the admin console.
///
/// [`EventRepository`] accepts any status change and any coordinator. This service applies
/// the approval workflow and the teacher-only coordinator rule on top of it.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves an event to `next` if the approval workflow allows it
    ///
    /// # Behavior
    /// - DRAFT may move to PENDING
    /// - PENDING may move to APPROVED or REJECTED
    /// - APPROVED may move to COMPLETED
    /// - Every other change, including staying on the same status, is rejected
    ///
    /// # Returns
    /// - `Ok(event)`: The updated event
    /// - `Err(Error::EventError(EventError::EventNotFound))`: No event with that ID
    /// - `Err(Error::EventError(EventError::InvalidStatusTransition))`: Change not allowed
    pub async fn transition_status(
        &self,
        event_id: i32,
        next: EventStatus,
    ) -> Result<entity::event::Model, Error> {
        let txn = self.db.begin().await?;
        let event_repository = EventRepository::new(&txn);

        let event = event_repository
            .get(event_id)
            .await?
            .ok_or(EventError::EventNotFound(event_id))?;

        if !event.status.can_transition_to(next) {
            return Err(EventError::InvalidStatusTransition {
                event_id,
                from: event.status,
                to: next,
            }
            .into());
        }

        let updated = event_repository
            .set_status(event_id, next)
            .await?
            .ok_or(EventError::EventNotFound(event_id))?;

        txn.commit().await?;

        tracing::info!(
            event_id,
            from = %event.status.label(),
            to = %next.label(),
            "Event status changed"
        );

        Ok(updated)
    }

    /// Adds a teacher as coordinator of an event
    ///
    /// # Returns
    /// - `Ok(coordinator)`: The new coordinator link
    /// - `Err(Error::EventError(EventError::EventNotFound))`: No event with that ID
    /// - `Err(Error::EventError(EventError::UserNotFound))`: No user with that ID
    /// - `Err(Error::EventError(EventError::CoordinatorNotTeacher))`: The user is not a teacher
    /// - `Err(Error::DbErr(_))`: The user already coordinates the event (unique constraint)
    pub async fn add_coordinator(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_coordinator::Model, Error> {
        let txn = self.db.begin().await?;
        let event_repository = EventRepository::new(&txn);
        let user_repository = UserRepository::new(&txn);

        if event_repository.get(event_id).await?.is_none() {
            return Err(EventError::EventNotFound(event_id).into());
        }

        let user = user_repository
            .get(user_id)
            .await?
            .ok_or(EventError::UserNotFound(user_id))?;

        if user.role != Role::Teacher {
            return Err(EventError::CoordinatorNotTeacher {
                user_id,
                role: user.role,
            }
            .into());
        }

        let coordinator = event_repository.add_coordinator(event_id, user_id).await?;

        txn.commit().await?;

        Ok(coordinator)
    }
}
