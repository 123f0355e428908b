use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261015_000001_campus_user::CampusUser, m20261015_000004_event::Event};

static IDX_EVENT_COORDINATOR_USER_ID: &str = "idx_event_coordinator_user_id";
static FK_EVENT_COORDINATOR_EVENT_ID: &str = "fk_event_coordinator_event_id";
static FK_EVENT_COORDINATOR_USER_ID: &str = "fk_event_coordinator_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventCoordinator::Table)
                    .if_not_exists()
                    .col(integer(EventCoordinator::EventId))
                    .col(integer(EventCoordinator::UserId))
                    .primary_key(
                        Index::create()
                            .col(EventCoordinator::EventId)
                            .col(EventCoordinator::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_COORDINATOR_EVENT_ID)
                            .from(EventCoordinator::Table, EventCoordinator::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_COORDINATOR_USER_ID)
                            .from(EventCoordinator::Table, EventCoordinator::UserId)
                            .to(CampusUser::Table, CampusUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_COORDINATOR_USER_ID)
                    .table(EventCoordinator::Table)
                    .col(EventCoordinator::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_COORDINATOR_USER_ID)
                    .table(EventCoordinator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventCoordinator::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventCoordinator {
    Table,
    EventId,
    UserId,
}
