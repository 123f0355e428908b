//! Fixture helpers for inserting rows during test execution.
//!
//! - `user` - campus users with a role
//! - `venue` - venues and resources
//! - `event` - events and the rows hanging off them (registrations, feedback,
//!   coordinators, resource requests)

pub mod event;
pub mod user;
pub mod venue;
