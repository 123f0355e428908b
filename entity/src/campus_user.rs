use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Role;

/// A campus account holding exactly one [`Role`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campus_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub role: Role,
    pub department: Option<String>,
    pub date_joined: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event::Entity")]
    CreatedEvents,
    #[sea_orm(has_many = "super::event_coordinator::Entity")]
    EventCoordinator,
    #[sea_orm(has_many = "super::registration::Entity")]
    Registration,
    #[sea_orm(has_many = "super::feedback::Entity")]
    Feedback,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedEvents.def()
    }
}

impl Related<super::event_coordinator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventCoordinator.def()
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

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.username, self.role.to_value())
    }
}
