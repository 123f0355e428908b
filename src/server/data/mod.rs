//! Data access layer repositories.
//!
//! One repository per entity, each a thin wrapper over a borrowed connection. Repositories
//! are generic over [`sea_orm::ConnectionTrait`] so services can run them inside a
//! transaction. Create and update validate their form before issuing a statement; every
//! other constraint (not-null, foreign keys, cascades, set-null) is left to the database.

pub mod event;
pub mod event_resource_request;
pub mod event_success_report;
pub mod feedback;
pub mod registration;
pub mod resource;
pub mod user;
pub mod venue;
