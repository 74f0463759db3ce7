//! Create `entity_name` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntityName::Table)
                    .if_not_exists()
                    .col(uuid(EntityName::Id).primary_key())
                    .col(string_len(EntityName::EntityId, 36))
                    .col(integer(EntityName::Position))
                    .col(string_len_null(EntityName::FirstName, 128))
                    .col(string_len_null(EntityName::MiddleName, 128))
                    .col(string_len_null(EntityName::Surname, 128))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entity_name_entity")
                            .from(EntityName::Table, EntityName::EntityId)
                            .to(KycEntity::Table, KycEntity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EntityName::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EntityName {
    Table,
    Id,
    EntityId,
    Position,
    FirstName,
    MiddleName,
    Surname,
}

#[derive(DeriveIden)]
enum KycEntity { Table, Id }
