use sea_orm::entity::prelude::*;

/// Total digits of `average_rating`.
pub const AVERAGE_RATING_MAX_DIGITS: u32 = 3;
/// Digits of `average_rating` after the decimal point.
pub const AVERAGE_RATING_DECIMAL_PLACES: u32 = 2;

/// Post-event summary, at most one per event.
///
/// All figures are stored values. They are only consistent with the
/// registration and feedback tables when written by the report generator.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_success_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub event_id: i32,
    pub total_registrations: i32,
    pub actual_turnout: i32,
    /// Actual / registered * 100
    pub attendance_percentage: f64,
    /// Mean feedback rating, two decimal places
    #[sea_orm(column_type = "Decimal(Some((3, 2)))", nullable)]
    pub average_rating: Option<Decimal>,
    #[sea_orm(column_type = "Text")]
    pub success_summary: String,
    pub generated_at: DateTime,
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
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
