use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Child tables: index on entity_id for eager loading and cascade deletes
        manager
            .create_index(
                Index::create()
                    .name("idx_entity_address_entity")
                    .table(EntityAddress::Table)
                    .col(EntityAddress::EntityId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_entity_name_entity")
                    .table(EntityName::Table)
                    .col(EntityName::EntityId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_entity_date_entity")
                    .table(EntityDate::Table)
                    .col(EntityDate::EntityId)
                    .to_owned(),
            )
            .await?;

        // Address: exact-match lookups by country
        manager
            .create_index(
                Index::create()
                    .name("idx_entity_address_country")
                    .table(EntityAddress::Table)
                    .col(EntityAddress::Country)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_entity_address_entity").table(EntityAddress::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_entity_name_entity").table(EntityName::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_entity_date_entity").table(EntityDate::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_entity_address_country").table(EntityAddress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EntityAddress { Table, EntityId, Country }

#[derive(DeriveIden)]
enum EntityName { Table, EntityId }

#[derive(DeriveIden)]
enum EntityDate { Table, EntityId }
