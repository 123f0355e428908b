use sea_orm::entity::prelude::*;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// A user's rating of an event. Submitting feedback does not require a
/// registration or attendance.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
    pub submitted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::campus_user::Entity",
        from = "Column::UserId",
        to = "super::campus_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CampusUser,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::campus_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampusUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
