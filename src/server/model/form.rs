//! Field values submitted on create and edit.
//!
//! Each form mirrors the editable columns of one entity. Surrogate keys and the timestamps
//! set on insert (`date_joined`, `created_at`, `registered_at`, `submitted_at`,
//! `generated_at`) are never part of a form. Optional fields with a column default are
//! `Option`s that fall back to that default when `None`.

use chrono::NaiveDateTime;
use entity::{
    event_success_report::{AVERAGE_RATING_DECIMAL_PLACES, AVERAGE_RATING_MAX_DIGITS},
    feedback::{MAX_RATING, MIN_RATING},
    sea_orm_active_enums::{EventStatus, EventType, Role, TargetAudience},
};
use sea_orm::prelude::Decimal;

use crate::server::{
    error::validation::ValidationError,
    util::validate::{
        fixed_point, in_range, max_length, optional_text, required_long_text, required_text,
    },
};

/// Maximum username length.
pub const USERNAME_MAX_LENGTH: usize = 150;
/// Maximum first/last name length.
pub const NAME_MAX_LENGTH: usize = 150;
/// Maximum email length.
pub const EMAIL_MAX_LENGTH: usize = 254;
/// Maximum department / organizing department length.
pub const DEPARTMENT_MAX_LENGTH: usize = 100;
/// Maximum venue and resource name length.
pub const CATALOG_NAME_MAX_LENGTH: usize = 100;
/// Maximum venue location length.
pub const LOCATION_MAX_LENGTH: usize = 200;
/// Maximum event title length.
pub const TITLE_MAX_LENGTH: usize = 200;

/// Values for a [`crate::server::model::db::UserModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    /// Unique login name
    pub username: String,
    /// May be blank
    pub first_name: String,
    /// May be blank
    pub last_name: String,
    /// May be blank
    pub email: String,
    /// Can log into the admin console
    pub is_staff: bool,
    /// Account enabled
    pub is_active: bool,
    /// The user's single role
    pub role: Role,
    /// Optional department
    pub department: Option<String>,
}

impl UserForm {
    /// Active, non-staff user with blank names and email.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            is_staff: false,
            is_active: true,
            role,
            department: None,
        }
    }

    /// Checks required fields and column lengths.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("username", &self.username, USERNAME_MAX_LENGTH)?;
        max_length("first_name", &self.first_name, NAME_MAX_LENGTH)?;
        max_length("last_name", &self.last_name, NAME_MAX_LENGTH)?;
        max_length("email", &self.email, EMAIL_MAX_LENGTH)?;
        optional_text(
            "department",
            self.department.as_deref(),
            DEPARTMENT_MAX_LENGTH,
        )?;

        Ok(())
    }
}

/// Values for a [`crate::server::model::db::VenueModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueForm {
    /// Venue name
    pub name: String,
    /// Seats, informational only
    pub capacity: i32,
    /// Where the venue is
    pub location: String,
}

impl VenueForm {
    /// Checks required fields and column lengths.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("name", &self.name, CATALOG_NAME_MAX_LENGTH)?;
        required_text("location", &self.location, LOCATION_MAX_LENGTH)?;

        Ok(())
    }
}

/// Values for a [`crate::server::model::db::ResourceModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceForm {
    /// Resource name
    pub name: String,
    /// Stock on hand, never decremented by requests
    pub total_quantity: i32,
}

impl ResourceForm {
    /// Checks required fields and column lengths.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("name", &self.name, CATALOG_NAME_MAX_LENGTH)
    }
}

/// Values for a [`crate::server::model::db::EventModel`].
///
/// No relationship between the datetimes, the deadline and `duration_minutes` is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    /// Event title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Kind of event
    pub event_type: EventType,
    /// Defaults to [`EventStatus::Draft`]
    pub status: Option<EventStatus>,
    /// Scheduled start
    pub start_datetime: NaiveDateTime,
    /// Scheduled end
    pub end_datetime: NaiveDateTime,
    /// Stored as given, not derived from the start/end pair
    pub duration_minutes: i32,
    /// Department running the event
    pub organizing_department: String,
    /// User creating the event
    pub created_by: i32,
    /// Optional venue
    pub venue_id: Option<i32>,
    /// Defaults to `true`
    pub is_registration_required: Option<bool>,
    /// Optional registration deadline
    pub registration_deadline: Option<NaiveDateTime>,
    /// Who the event is aimed at
    pub target_audience: TargetAudience,
}

impl EventForm {
    /// Checks required fields and column lengths.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("title", &self.title, TITLE_MAX_LENGTH)?;
        required_long_text("description", &self.description)?;
        required_text(
            "organizing_department",
            &self.organizing_department,
            DEPARTMENT_MAX_LENGTH,
        )?;

        Ok(())
    }
}

/// Values for a [`crate::server::model::db::ResourceRequestModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequestForm {
    /// Requesting event
    pub event_id: i32,
    /// Requested resource
    pub resource_id: i32,
    /// Defaults to 1, not compared against stock
    pub quantity_needed: Option<i32>,
}

/// Values for a [`crate::server::model::db::RegistrationModel`].
///
/// Attendance can also be toggled on its own with
/// [`crate::server::data::registration::RegistrationRepository::set_attended`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Event being registered for
    pub event_id: i32,
    /// Registering user
    pub user_id: i32,
    /// Defaults to `false` on create, left unchanged on edit when `None`
    pub attended: Option<bool>,
}

/// Values for a [`crate::server::model::db::FeedbackModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    /// Rated event
    pub event_id: i32,
    /// User giving the rating
    pub user_id: i32,
    /// 1 to 5
    pub rating: i32,
    /// Free-text comments
    pub comments: String,
}

impl FeedbackForm {
    /// Checks the rating range and that comments are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        in_range("rating", self.rating, MIN_RATING, MAX_RATING)?;
        required_long_text("comments", &self.comments)?;

        Ok(())
    }
}

/// Values for a [`crate::server::model::db::SuccessReportModel`] entered by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessReportForm {
    /// Reported event
    pub event_id: i32,
    /// Defaults to 0
    pub total_registrations: Option<i32>,
    /// Defaults to 0
    pub actual_turnout: Option<i32>,
    /// Actual / registered * 100
    pub attendance_percentage: f64,
    /// Mean feedback rating, 0.00 to 9.99
    pub average_rating: Option<Decimal>,
    /// Summary or admin notes
    pub success_summary: String,
}

impl SuccessReportForm {
    /// Checks that the summary is present and that the average rating fits its column.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.clean_average_rating()?;
        required_long_text("success_summary", &self.success_summary)?;

        Ok(())
    }

    /// Validates the form and rounds the average rating to two decimal places.
    pub fn clean(mut self) -> Result<Self, ValidationError> {
        self.validate()?;
        self.average_rating = self.clean_average_rating()?;

        Ok(self)
    }

    fn clean_average_rating(&self) -> Result<Option<Decimal>, ValidationError> {
        self.average_rating
            .map(|rating| {
                fixed_point(
                    "average_rating",
                    rating,
                    AVERAGE_RATING_MAX_DIGITS,
                    AVERAGE_RATING_DECIMAL_PLACES,
                )
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_requires_username() {
        let form = UserForm::new("", Role::Student);

        assert_eq!(
            form.validate(),
            Err(ValidationError::Required { field: "username" })
        );
    }

    #[test]
    fn user_department_length() {
        let mut form = UserForm::new("alice", Role::Teacher);
        form.department = Some("d".repeat(DEPARTMENT_MAX_LENGTH + 1));

        assert!(matches!(
            form.validate(),
            Err(ValidationError::TooLong { field: "department", .. })
        ));
    }

    #[test]
    fn feedback_rating_bounds() {
        let mut form = FeedbackForm {
            event_id: 1,
            user_id: 1,
            rating: 0,
            comments: "Great".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(ValidationError::OutOfRange { field: "rating", value: 0, .. })
        ));

        form.rating = 6;
        assert!(form.validate().is_err());

        form.rating = 5;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn venue_requires_location() {
        let form = VenueForm {
            name: "Main Hall".to_string(),
            capacity: 300,
            location: String::new(),
        };

        assert_eq!(
            form.validate(),
            Err(ValidationError::Required { field: "location" })
        );
    }

    #[test]
    fn report_rating_is_rounded() {
        let form = SuccessReportForm {
            event_id: 1,
            total_registrations: None,
            actual_turnout: None,
            attendance_percentage: 0.0,
            average_rating: Some(Decimal::new(43333333, 7)),
            success_summary: "Went well".to_string(),
        };

        let cleaned = form.clean().unwrap();

        assert_eq!(cleaned.average_rating, Some(Decimal::new(433, 2)));
        assert_eq!(cleaned.average_rating.unwrap().to_string(), "4.33");
    }

    #[test]
    fn report_rating_must_fit_column() {
        let form = SuccessReportForm {
            event_id: 1,
            total_registrations: None,
            actual_turnout: None,
            attendance_percentage: 0.0,
            average_rating: Some(Decimal::new(123456, 3)),
            success_summary: "Went well".to_string(),
        };

        assert!(matches!(
            form.validate(),
            Err(ValidationError::DecimalOutOfRange { field: "average_rating", .. })
        ));
        assert!(form.clean().is_err());
    }
}
