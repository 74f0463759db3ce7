//! Service layer for KYC entities on top of the `models` crate.
//! - `kyc_entity` holds the domain types, repository abstraction and the
//!   application service used by the HTTP layer.
//! - `db` holds the SeaORM queries the persistent repository delegates to.

pub mod errors;
pub mod db;
pub mod kyc_entity;
#[cfg(test)]
pub mod test_support;
