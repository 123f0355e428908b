use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261015_000001_campus_user::CampusUser, m20261015_000004_event::Event};

static IDX_FEEDBACK_EVENT_ID: &str = "idx_feedback_event_id";
static FK_FEEDBACK_EVENT_ID: &str = "fk_feedback_event_id";
static FK_FEEDBACK_USER_ID: &str = "fk_feedback_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::Id))
                    .col(integer(Feedback::EventId))
                    .col(integer(Feedback::UserId))
                    .col(
                        integer(Feedback::Rating)
                            .check(Expr::col(Feedback::Rating).between(1, 5)),
                    )
                    .col(text(Feedback::Comments))
                    .col(timestamp(Feedback::SubmittedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FEEDBACK_EVENT_ID)
                            .from(Feedback::Table, Feedback::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FEEDBACK_USER_ID)
                            .from(Feedback::Table, Feedback::UserId)
                            .to(CampusUser::Table, CampusUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FEEDBACK_EVENT_ID)
                    .table(Feedback::Table)
                    .col(Feedback::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FEEDBACK_EVENT_ID)
                    .table(Feedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Feedback {
    Table,
    Id,
    EventId,
    UserId,
    Rating,
    Comments,
    SubmittedAt,
}
