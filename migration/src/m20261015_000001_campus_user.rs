use sea_orm_migration::{prelude::*, schema::*};

static IDX_CAMPUS_USER_ROLE: &str = "idx_campus_user_role";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampusUser::Table)
                    .if_not_exists()
                    .col(pk_auto(CampusUser::Id))
                    .col(string_len_uniq(CampusUser::Username, 150))
                    .col(string_len(CampusUser::FirstName, 150))
                    .col(string_len(CampusUser::LastName, 150))
                    .col(string_len(CampusUser::Email, 254))
                    .col(boolean(CampusUser::IsStaff).default(false))
                    .col(boolean(CampusUser::IsActive).default(true))
                    .col(string_len(CampusUser::Role, 10))
                    .col(string_len_null(CampusUser::Department, 100))
                    .col(timestamp(CampusUser::DateJoined))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAMPUS_USER_ROLE)
                    .table(CampusUser::Table)
                    .col(CampusUser::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAMPUS_USER_ROLE)
                    .table(CampusUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CampusUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CampusUser {
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    Email,
    IsStaff,
    IsActive,
    Role,
    Department,
    DateJoined,
}
