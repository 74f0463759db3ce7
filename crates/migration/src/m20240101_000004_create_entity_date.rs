//! Create `entity_date` table.
//! Dated events of an entity (birth, death, registration, ...).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntityDate::Table)
                    .if_not_exists()
                    .col(uuid(EntityDate::Id).primary_key())
                    .col(string_len(EntityDate::EntityId, 36))
                    .col(integer(EntityDate::Position))
                    .col(string_len_null(EntityDate::DateType, 64))
                    .col(date_null(EntityDate::EventDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entity_date_entity")
                            .from(EntityDate::Table, EntityDate::EntityId)
                            .to(KycEntity::Table, KycEntity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EntityDate::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EntityDate {
    Table,
    Id,
    EntityId,
    Position,
    DateType,
    EventDate,
}

#[derive(DeriveIden)]
enum KycEntity { Table, Id }
