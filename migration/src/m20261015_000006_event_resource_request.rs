use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261015_000003_resource::Resource, m20261015_000004_event::Event};

static IDX_EVENT_RESOURCE_REQUEST_EVENT_ID: &str = "idx_event_resource_request_event_id";
static FK_EVENT_RESOURCE_REQUEST_EVENT_ID: &str = "fk_event_resource_request_event_id";
static FK_EVENT_RESOURCE_REQUEST_RESOURCE_ID: &str = "fk_event_resource_request_resource_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventResourceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(EventResourceRequest::Id))
                    .col(integer(EventResourceRequest::EventId))
                    .col(integer(EventResourceRequest::ResourceId))
                    .col(integer(EventResourceRequest::QuantityNeeded).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_RESOURCE_REQUEST_EVENT_ID)
                            .from(EventResourceRequest::Table, EventResourceRequest::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_RESOURCE_REQUEST_RESOURCE_ID)
                            .from(
                                EventResourceRequest::Table,
                                EventResourceRequest::ResourceId,
                            )
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_RESOURCE_REQUEST_EVENT_ID)
                    .table(EventResourceRequest::Table)
                    .col(EventResourceRequest::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_RESOURCE_REQUEST_EVENT_ID)
                    .table(EventResourceRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventResourceRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventResourceRequest {
    Table,
    Id,
    EventId,
    ResourceId,
    QuantityNeeded,
}
