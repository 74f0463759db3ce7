//! KYC entity module: three-layer architecture (domain, repository, service).
//!
//! Handlers talk to `KycEntityService`; storage stays behind `KycEntityRepository`.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::KycEntityService;
