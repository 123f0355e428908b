use sea_orm::entity::prelude::*;

/// Join table backing the event coordinators many-to-many.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_coordinator")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
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
