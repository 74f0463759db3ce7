//! Migrator registering entity-specific migrations in dependency order.
//! Child tables follow the `kyc_entity` root; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_kyc_entity;
mod m20240101_000002_create_entity_address;
mod m20240101_000003_create_entity_name;
mod m20240101_000004_create_entity_date;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_kyc_entity::Migration),
            Box::new(m20240101_000002_create_entity_address::Migration),
            Box::new(m20240101_000003_create_entity_name::Migration),
            Box::new(m20240101_000004_create_entity_date::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
