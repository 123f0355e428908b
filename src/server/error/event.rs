use entity::sea_orm_active_enums::{EventStatus, Role};
use thiserror::Error;

/// Failures of the guarded event operations in [`crate::server::service::event`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event does not exist.
    #[error("Event ID {0} not found")]
    EventNotFound(i32),
    /// The user does not exist.
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    /// The approval workflow does not allow this status change.
    #[error("Event ID {event_id} cannot move from {from:?} to {to:?}")]
    InvalidStatusTransition {
        /// Event being updated
        event_id: i32,
        /// Current status
        from: EventStatus,
        /// Requested status
        to: EventStatus,
    },
    /// Only teachers may be added as coordinators.
    #[error("User ID {user_id} has role {role:?}, only teachers can coordinate events")]
    CoordinatorNotTeacher {
        /// User that was offered as coordinator
        user_id: i32,
        /// Role that user holds
        role: Role,
    },
}
