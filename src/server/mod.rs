//! Server-side core of the campus event store.
//!
//! This module contains the relational data store for campus events: repositories over the
//! SeaORM entities, the services that build on them (approval workflow, success reports),
//! the explicit admin registry handed to the admin console, and configuration/startup code
//! used by the binary.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod admin;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
