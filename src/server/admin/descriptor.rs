//! Field-level description of each registered entity.

use entity::{
    event_success_report::{AVERAGE_RATING_DECIMAL_PLACES, AVERAGE_RATING_MAX_DIGITS},
    sea_orm_active_enums::{EventStatus, EventType, Role, TargetAudience},
};
use serde::Serialize;

use crate::server::{
    admin::choice::{choices_of, rating_choices, Choice},
    model::form::{
        CATALOG_NAME_MAX_LENGTH, DEPARTMENT_MAX_LENGTH, EMAIL_MAX_LENGTH, LOCATION_MAX_LENGTH,
        NAME_MAX_LENGTH, TITLE_MAX_LENGTH, USERNAME_MAX_LENGTH,
    },
};

/// How the admin console renders and edits a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Surrogate key assigned by the database
    AutoId,
    /// Bounded single-line text
    Text {
        /// Maximum number of characters
        max_length: usize,
    },
    /// Unbounded text
    LongText,
    /// Integer
    Integer,
    /// Floating point number
    Float,
    /// Fixed-point number
    Decimal {
        /// Total number of digits
        max_digits: u32,
        /// Digits after the decimal point
        decimal_places: u32,
    },
    /// Checkbox
    Boolean,
    /// Naive UTC timestamp
    DateTime,
    /// One of a fixed set of codes
    Choice {
        /// Allowed codes and their labels
        choices: Vec<Choice>,
    },
    /// Reference to another registered entity
    ForeignKey {
        /// Name of the referenced entity
        target: &'static str,
    },
    /// Set of references stored in a join table
    ManyToMany {
        /// Name of the referenced entity
        target: &'static str,
        /// Join table holding the links
        through: &'static str,
    },
}

/// One column or relation shown on an entity's form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name, matching the column where there is one
    pub name: &'static str,
    /// Rendering and editing kind
    pub kind: FieldKind,
    /// Whether the field may be left empty
    pub nullable: bool,
    /// `false` for keys and timestamps set on insert
    pub editable: bool,
}

impl FieldDescriptor {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            editable: true,
        }
    }

    fn id() -> Self {
        Self::new("id", FieldKind::AutoId).read_only()
    }

    fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }
}

/// An entity registered with the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    /// Entity name, unique within an [`crate::server::admin::AdminSite`]
    pub name: &'static str,
    /// Backing table
    pub table: &'static str,
    /// Fields in form order
    pub fields: Vec<FieldDescriptor>,
}

fn text(name: &'static str, max_length: usize) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::Text { max_length })
}

fn foreign_key(name: &'static str, target: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::ForeignKey { target })
}

fn set_on_insert(name: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::DateTime).read_only()
}

/// User accounts.
pub fn user() -> EntityDescriptor {
    EntityDescriptor {
        name: "User",
        table: "campus_user",
        fields: vec![
            FieldDescriptor::id(),
            text("username", USERNAME_MAX_LENGTH),
            text("first_name", NAME_MAX_LENGTH),
            text("last_name", NAME_MAX_LENGTH),
            text("email", EMAIL_MAX_LENGTH),
            FieldDescriptor::new("is_staff", FieldKind::Boolean),
            FieldDescriptor::new("is_active", FieldKind::Boolean),
            FieldDescriptor::new(
                "role",
                FieldKind::Choice {
                    choices: choices_of::<Role>(),
                },
            ),
            text("department", DEPARTMENT_MAX_LENGTH).nullable(),
            set_on_insert("date_joined"),
        ],
    }
}

/// Venues.
pub fn venue() -> EntityDescriptor {
    EntityDescriptor {
        name: "Venue",
        table: "venue",
        fields: vec![
            FieldDescriptor::id(),
            text("name", CATALOG_NAME_MAX_LENGTH),
            FieldDescriptor::new("capacity", FieldKind::Integer),
            text("location", LOCATION_MAX_LENGTH),
        ],
    }
}

/// Equipment.
pub fn resource() -> EntityDescriptor {
    EntityDescriptor {
        name: "Resource",
        table: "resource",
        fields: vec![
            FieldDescriptor::id(),
            text("name", CATALOG_NAME_MAX_LENGTH),
            FieldDescriptor::new("total_quantity", FieldKind::Integer),
        ],
    }
}

/// Events.
///
/// Coordinators are offered from teachers only, see
/// [`crate::server::service::event::EventService::add_coordinator`].
pub fn event() -> EntityDescriptor {
    EntityDescriptor {
        name: "Event",
        table: "event",
        fields: vec![
            FieldDescriptor::id(),
            text("title", TITLE_MAX_LENGTH),
            FieldDescriptor::new("description", FieldKind::LongText),
            FieldDescriptor::new(
                "event_type",
                FieldKind::Choice {
                    choices: choices_of::<EventType>(),
                },
            ),
            FieldDescriptor::new(
                "status",
                FieldKind::Choice {
                    choices: choices_of::<EventStatus>(),
                },
            ),
            FieldDescriptor::new("start_datetime", FieldKind::DateTime),
            FieldDescriptor::new("end_datetime", FieldKind::DateTime),
            FieldDescriptor::new("duration_minutes", FieldKind::Integer),
            text("organizing_department", DEPARTMENT_MAX_LENGTH),
            foreign_key("created_by", "User"),
            FieldDescriptor::new(
                "coordinators",
                FieldKind::ManyToMany {
                    target: "User",
                    through: "event_coordinator",
                },
            ),
            foreign_key("venue", "Venue").nullable(),
            FieldDescriptor::new(
                "required_resources",
                FieldKind::ManyToMany {
                    target: "Resource",
                    through: "event_resource_request",
                },
            ),
            FieldDescriptor::new("is_registration_required", FieldKind::Boolean),
            FieldDescriptor::new("registration_deadline", FieldKind::DateTime).nullable(),
            FieldDescriptor::new(
                "target_audience",
                FieldKind::Choice {
                    choices: choices_of::<TargetAudience>(),
                },
            ),
            set_on_insert("created_at"),
        ],
    }
}

/// Event registrations.
pub fn registration() -> EntityDescriptor {
    EntityDescriptor {
        name: "Registration",
        table: "registration",
        fields: vec![
            FieldDescriptor::id(),
            foreign_key("event", "Event"),
            foreign_key("user", "User"),
            set_on_insert("registered_at"),
            FieldDescriptor::new("attended", FieldKind::Boolean),
        ],
    }
}

/// Event ratings.
pub fn feedback() -> EntityDescriptor {
    EntityDescriptor {
        name: "Feedback",
        table: "feedback",
        fields: vec![
            FieldDescriptor::id(),
            foreign_key("event", "Event"),
            foreign_key("user", "User"),
            FieldDescriptor::new(
                "rating",
                FieldKind::Choice {
                    choices: rating_choices(),
                },
            ),
            FieldDescriptor::new("comments", FieldKind::LongText),
            set_on_insert("submitted_at"),
        ],
    }
}

/// Post-event reports.
pub fn event_success_report() -> EntityDescriptor {
    EntityDescriptor {
        name: "EventSuccessReport",
        table: "event_success_report",
        fields: vec![
            FieldDescriptor::id(),
            foreign_key("event", "Event"),
            FieldDescriptor::new("total_registrations", FieldKind::Integer),
            FieldDescriptor::new("actual_turnout", FieldKind::Integer),
            FieldDescriptor::new("attendance_percentage", FieldKind::Float),
            FieldDescriptor::new(
                "average_rating",
                FieldKind::Decimal {
                    max_digits: AVERAGE_RATING_MAX_DIGITS,
                    decimal_places: AVERAGE_RATING_DECIMAL_PLACES,
                },
            )
            .nullable(),
            FieldDescriptor::new("success_summary", FieldKind::LongText),
            set_on_insert("generated_at"),
        ],
    }
}
