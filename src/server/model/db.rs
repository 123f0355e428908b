//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the repositories and services.

/// Campus user with a single role.
pub type UserModel = entity::campus_user::Model;

/// Venue an event can be held at.
pub type VenueModel = entity::venue::Model;

/// Equipment an event can request.
pub type ResourceModel = entity::resource::Model;

/// Campus event.
///
/// # Fields (from `entity::event::Model`)
/// - `id` - Primary key
/// - `title`, `description`, `event_type`, `status`
/// - `start_datetime`, `end_datetime`, `duration_minutes` - stored independently
/// - `organizing_department`
/// - `created_by` - Foreign key to the creating user (cascade)
/// - `venue_id` - Foreign key to the venue (set null)
/// - `is_registration_required`, `registration_deadline`, `target_audience`
/// - `created_at` - Timestamp when the event was created
pub type EventModel = entity::event::Model;

/// Row of the coordinator many-to-many.
pub type EventCoordinatorModel = entity::event_coordinator::Model;

/// Quantity of a resource requested by an event.
pub type ResourceRequestModel = entity::event_resource_request::Model;

/// User registered for an event.
pub type RegistrationModel = entity::registration::Model;

/// User rating of an event.
pub type FeedbackModel = entity::feedback::Model;

/// Post-event success report, at most one per event.
pub type SuccessReportModel = entity::event_success_report::Model;
