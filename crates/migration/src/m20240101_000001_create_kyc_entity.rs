//! Create `kyc_entity` table.
//!
//! Root record; addresses, names and dates reference it and are removed with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KycEntity::Table)
                    .if_not_exists()
                    .col(string_len(KycEntity::Id, 36).primary_key())
                    .col(string_len_null(KycEntity::Gender, 64))
                    .col(boolean(KycEntity::Deceased).default(false))
                    .col(timestamp_with_time_zone(KycEntity::CreatedAt))
                    .col(timestamp_with_time_zone(KycEntity::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(KycEntity::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum KycEntity { Table, Id, Gender, Deceased, CreatedAt, UpdatedAt }
