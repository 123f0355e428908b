//! Error types for the campus event store.
//!
//! The taxonomy is deliberately small: configuration problems, field validation failures,
//! guarded event operation failures, admin registry errors, and database errors (which carry
//! the storage layer's not-null, foreign-key and unique constraint violations). Nothing is
//! retried; errors surface to the caller, typically the admin console, which renders them
//! through [`Error::to_form_error`].

pub mod admin;
pub mod config;
pub mod event;
pub mod validation;

use sea_orm::SqlErr;
use thiserror::Error;

use crate::server::{
    error::{admin::AdminError, config::ConfigError, event::EventError, validation::ValidationError},
    model::api::FormErrorDto,
};

/// Main error type for the campus event store.
///
/// Aggregates the domain-specific error types and database errors into a single type with
/// `#[from]` conversions so repositories and services can propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A submitted field failed validation before reaching the database.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Guarded event operation rejected (status workflow, coordinator role).
    #[error(transparent)]
    EventError(#[from] EventError),
    /// Admin registry error.
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Storage-layer constraint a database error was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Reference to a row that does not exist.
    ForeignKey,
    /// Duplicate value in a unique column.
    Unique,
}

impl Error {
    /// Classifies database errors by the constraint they violated.
    ///
    /// Returns `None` for non-database errors and for database errors that are not
    /// constraint violations.
    pub fn constraint(&self) -> Option<Constraint> {
        match self {
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(Constraint::ForeignKey),
                Some(SqlErr::UniqueConstraintViolation(_)) => Some(Constraint::Unique),
                _ => None,
            },
            _ => None,
        }
    }

    /// Converts the error into the payload the admin console shows on a form.
    ///
    /// Validation errors are attached to their field. Constraint violations and guarded
    /// operation failures are form-wide. Anything else is logged and reported generically
    /// to avoid leaking implementation details.
    pub fn to_form_error(&self) -> FormErrorDto {
        match self {
            Self::ValidationError(err) => FormErrorDto {
                field: Some(err.field().to_string()),
                error: err.to_string(),
            },
            Self::EventError(err) => FormErrorDto {
                field: None,
                error: err.to_string(),
            },
            Self::DbErr(_) => match self.constraint() {
                Some(Constraint::ForeignKey) => FormErrorDto {
                    field: None,
                    error: "Referenced record does not exist".to_string(),
                },
                Some(Constraint::Unique) => FormErrorDto {
                    field: None,
                    error: "A record with this value already exists".to_string(),
                },
                None => internal_form_error(self),
            },
            err => internal_form_error(err),
        }
    }
}

fn internal_form_error(err: &Error) -> FormErrorDto {
    tracing::error!("{}", err);

    FormErrorDto {
        field: None,
        error: "Internal server error".to_string(),
    }
}
