use sea_orm::entity::prelude::*;

/// Equipment that events may request. `total_quantity` is never decremented
/// by requests.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub total_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_resource_request::Entity")]
    EventResourceRequest,
}

impl Related<super::event_resource_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventResourceRequest.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_resource_request::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_resource_request::Relation::Resource.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
