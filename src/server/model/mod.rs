//! Server application models and type definitions.
//!
//! This module contains application state, database model type aliases, the form structs
//! accepted by repositories on create/update, and the serializable payloads handed to the
//! admin console.

pub mod api;
pub mod app;
pub mod db;
pub mod form;
