//! Choice fields stored as their short code strings.
//!
//! Each enum persists as the upper-case code (e.g. `'PENDING'`) and exposes the
//! human readable label shown by the admin console through `label()`.

use sea_orm::entity::prelude::*;

/// The single role held by a campus user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Role {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "TEACHER")]
    Teacher,
    #[sea_orm(string_value = "STUDENT")]
    Student,
    #[sea_orm(string_value = "PARENT")]
    Parent,
    #[sea_orm(string_value = "MANAGEMENT")]
    Management,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
            Self::Parent => "Parent",
            Self::Management => "Management",
        }
    }
}

/// Kind of event being organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EventType {
    #[sea_orm(string_value = "WORKSHOP")]
    Workshop,
    #[sea_orm(string_value = "SEMINAR")]
    Seminar,
    #[sea_orm(string_value = "CULTURAL")]
    Cultural,
    #[sea_orm(string_value = "SPORTS")]
    Sports,
    #[sea_orm(string_value = "CLUB")]
    Club,
    #[sea_orm(string_value = "EXAM")]
    Exam,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Workshop => "Workshop",
            Self::Seminar => "Seminar",
            Self::Cultural => "Cultural Fest",
            Self::Sports => "Sports Event",
            Self::Club => "Club Event",
            Self::Exam => "Exam Related",
        }
    }
}

/// Approval status of an event.
///
/// The store accepts any value at any time. The approval workflow an event is
/// expected to follow is described by [`EventStatus::can_transition_to`]:
///
/// ```text
/// DRAFT -> PENDING -> APPROVED -> COMPLETED
///                 \-> REJECTED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EventStatus {
    #[default]
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending Approval",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
        }
    }

    /// Whether the approval workflow allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: EventStatus) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Pending)
                | (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Approved, Self::Completed)
        )
    }

    /// REJECTED and COMPLETED have no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }
}

/// Audience an event is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum TargetAudience {
    #[sea_orm(string_value = "STUDENT")]
    Student,
    #[sea_orm(string_value = "PARENT")]
    Parent,
    #[sea_orm(string_value = "ALL")]
    All,
}

impl TargetAudience {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Students",
            Self::Parent => "Parents",
            Self::All => "All",
        }
    }
}
