use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261015_000001_campus_user::CampusUser, m20261015_000004_event::Event};

static IDX_REGISTRATION_EVENT_ID: &str = "idx_registration_event_id";
static IDX_REGISTRATION_USER_ID: &str = "idx_registration_user_id";
static FK_REGISTRATION_EVENT_ID: &str = "fk_registration_event_id";
static FK_REGISTRATION_USER_ID: &str = "fk_registration_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique (event_id, user_id) constraint, duplicate sign-ups are stored as-is
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(integer(Registration::EventId))
                    .col(integer(Registration::UserId))
                    .col(timestamp(Registration::RegisteredAt))
                    .col(boolean(Registration::Attended).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_EVENT_ID)
                            .from(Registration::Table, Registration::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGISTRATION_USER_ID)
                            .from(Registration::Table, Registration::UserId)
                            .to(CampusUser::Table, CampusUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_EVENT_ID)
                    .table(Registration::Table)
                    .col(Registration::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_USER_ID)
                    .table(Registration::Table)
                    .col(Registration::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_USER_ID)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_EVENT_ID)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Registration {
    Table,
    Id,
    EventId,
    UserId,
    RegisteredAt,
    Attended,
}
