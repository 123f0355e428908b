use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261015_000001_campus_user::CampusUser, m20261015_000002_venue::Venue};

static IDX_EVENT_STATUS: &str = "idx_event_status";
static IDX_EVENT_CREATED_BY: &str = "idx_event_created_by";
static IDX_EVENT_VENUE_ID: &str = "idx_event_venue_id";
static FK_EVENT_CREATED_BY: &str = "fk_event_created_by";
static FK_EVENT_VENUE_ID: &str = "fk_event_venue_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_len(Event::Title, 200))
                    .col(text(Event::Description))
                    .col(string_len(Event::EventType, 20))
                    .col(string_len(Event::Status, 20).default("DRAFT"))
                    .col(timestamp(Event::StartDatetime))
                    .col(timestamp(Event::EndDatetime))
                    .col(integer(Event::DurationMinutes))
                    .col(string_len(Event::OrganizingDepartment, 100))
                    .col(integer(Event::CreatedBy))
                    .col(integer_null(Event::VenueId))
                    .col(boolean(Event::IsRegistrationRequired).default(true))
                    .col(timestamp_null(Event::RegistrationDeadline))
                    .col(string_len(Event::TargetAudience, 50))
                    .col(timestamp(Event::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_CREATED_BY)
                            .from(Event::Table, Event::CreatedBy)
                            .to(CampusUser::Table, CampusUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_VENUE_ID)
                            .from(Event::Table, Event::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_EVENT_STATUS, Event::Status),
            (IDX_EVENT_CREATED_BY, Event::CreatedBy),
            (IDX_EVENT_VENUE_ID, Event::VenueId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Event::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [IDX_EVENT_VENUE_ID, IDX_EVENT_CREATED_BY, IDX_EVENT_STATUS] {
            manager
                .drop_index(Index::drop().name(name).table(Event::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    EventType,
    Status,
    StartDatetime,
    EndDatetime,
    DurationMinutes,
    OrganizingDepartment,
    CreatedBy,
    VenueId,
    IsRegistrationRequired,
    RegistrationDeadline,
    TargetAudience,
    CreatedAt,
}
