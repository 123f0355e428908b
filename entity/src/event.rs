use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EventStatus, EventType, TargetAudience};

/// A campus event, the centre of the schema.
///
/// `duration_minutes` is stored alongside the start/end pair and is never
/// reconciled with it; see [`Model::duration_matches_schedule`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub event_type: EventType,
    pub status: EventStatus,
    pub start_datetime: DateTime,
    pub end_datetime: DateTime,
    pub duration_minutes: i32,
    pub organizing_department: String,
    pub created_by: i32,
    pub venue_id: Option<i32>,
    pub is_registration_required: bool,
    pub registration_deadline: Option<DateTime>,
    pub target_audience: TargetAudience,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campus_user::Entity",
        from = "Column::CreatedBy",
        to = "super::campus_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CreatedBy,
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Venue,
    #[sea_orm(has_many = "super::event_coordinator::Entity")]
    EventCoordinator,
    #[sea_orm(has_many = "super::event_resource_request::Entity")]
    EventResourceRequest,
    #[sea_orm(has_many = "super::registration::Entity")]
    Registration,
    #[sea_orm(has_many = "super::feedback::Entity")]
    Feedback,
    #[sea_orm(has_one = "super::event_success_report::Entity")]
    EventSuccessReport,
}

impl Related<super::campus_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::event_coordinator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventCoordinator.def()
    }
}

impl Related<super::event_resource_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventResourceRequest.def()
    }
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registration.def()
    }
}

impl Related<super::feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedback.def()
    }
}

impl Related<super::event_success_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventSuccessReport.def()
    }
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_resource_request::Relation::Resource.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_resource_request::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Minutes between `start_datetime` and `end_datetime`.
    pub fn scheduled_duration_minutes(&self) -> i64 {
        (self.end_datetime - self.start_datetime).num_minutes()
    }

    /// Whether the stored `duration_minutes` agrees with the start/end pair.
    pub fn duration_matches_schedule(&self) -> bool {
        self.scheduled_duration_minutes() == i64::from(self.duration_minutes)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.title, self.status.to_value())
    }
}
