//! Create `entity_address` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntityAddress::Table)
                    .if_not_exists()
                    .col(uuid(EntityAddress::Id).primary_key())
                    .col(string_len(EntityAddress::EntityId, 36))
                    .col(integer(EntityAddress::Position))
                    .col(string_len_null(EntityAddress::AddressLine, 512))
                    .col(string_len_null(EntityAddress::City, 128))
                    .col(string_len_null(EntityAddress::PostalCode, 32))
                    .col(string_len_null(EntityAddress::Country, 128))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entity_address_entity")
                            .from(EntityAddress::Table, EntityAddress::EntityId)
                            .to(KycEntity::Table, KycEntity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EntityAddress::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EntityAddress {
    Table,
    Id,
    EntityId,
    Position,
    AddressLine,
    City,
    PostalCode,
    Country,
}

#[derive(DeriveIden)]
enum KycEntity { Table, Id }
