//! SeaORM query functions backing the persistent repositories.

pub mod kyc_entity_store;
