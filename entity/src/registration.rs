use sea_orm::entity::prelude::*;

/// A user signed up for an event. Not unique per (user, event).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub registered_at: DateTime,
    pub attended: bool,
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
