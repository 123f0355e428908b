//! Utility functions shared by repositories and services.

pub mod validate;
