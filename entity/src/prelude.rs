pub use super::campus_user::Entity as CampusUser;
pub use super::event::Entity as Event;
pub use super::event_coordinator::Entity as EventCoordinator;
pub use super::event_resource_request::Entity as EventResourceRequest;
pub use super::event_success_report::Entity as EventSuccessReport;
pub use super::feedback::Entity as Feedback;
pub use super::registration::Entity as Registration;
pub use super::resource::Entity as Resource;
pub use super::venue::Entity as Venue;
