//! SeaORM entities for the campus event store.

pub mod prelude;

pub mod campus_user;
pub mod event;
pub mod event_coordinator;
pub mod event_resource_request;
pub mod event_success_report;
pub mod feedback;
pub mod registration;
pub mod resource;
pub mod sea_orm_active_enums;
pub mod venue;
