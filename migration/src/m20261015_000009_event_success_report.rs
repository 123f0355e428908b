use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261015_000004_event::Event;

static FK_EVENT_SUCCESS_REPORT_EVENT_ID: &str = "fk_event_success_report_event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventSuccessReport::Table)
                    .if_not_exists()
                    .col(pk_auto(EventSuccessReport::Id))
                    .col(integer_uniq(EventSuccessReport::EventId))
                    .col(integer(EventSuccessReport::TotalRegistrations).default(0))
                    .col(integer(EventSuccessReport::ActualTurnout).default(0))
                    .col(double(EventSuccessReport::AttendancePercentage))
                    .col(decimal_len_null(EventSuccessReport::AverageRating, 3, 2))
                    .col(text(EventSuccessReport::SuccessSummary))
                    .col(timestamp(EventSuccessReport::GeneratedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_SUCCESS_REPORT_EVENT_ID)
                            .from(EventSuccessReport::Table, EventSuccessReport::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventSuccessReport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventSuccessReport {
    Table,
    Id,
    EventId,
    TotalRegistrations,
    ActualTurnout,
    AttendancePercentage,
    AverageRating,
    SuccessSummary,
    GeneratedAt,
}
