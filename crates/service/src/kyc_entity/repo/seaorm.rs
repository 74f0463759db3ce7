use sea_orm::DatabaseConnection;

use crate::db::kyc_entity_store;
use crate::errors::ServiceError;
use crate::kyc_entity::domain::{AddressFilter, EntityPayload, KycEntity, NameFilter};
use crate::kyc_entity::repository::KycEntityRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmKycEntityRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmKycEntityRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl KycEntityRepository for SeaOrmKycEntityRepository {
    async fn list_all(&self) -> Result<Vec<KycEntity>, ServiceError> {
        kyc_entity_store::list_all(&self.db).await
    }

    async fn get(&self, id: &str) -> Result<Option<KycEntity>, ServiceError> {
        kyc_entity_store::get(&self.db, id).await
    }

    async fn create(&self, payload: EntityPayload) -> Result<KycEntity, ServiceError> {
        kyc_entity_store::create(&self.db, payload).await
    }

    async fn update(&self, id: &str, payload: EntityPayload) -> Result<Option<KycEntity>, ServiceError> {
        kyc_entity_store::update(&self.db, id, payload).await
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        kyc_entity_store::delete(&self.db, id).await
    }

    async fn find_by_address(&self, filter: &AddressFilter) -> Result<Vec<KycEntity>, ServiceError> {
        kyc_entity_store::find_by_address(&self.db, filter).await
    }

    async fn find_by_name(&self, filter: &NameFilter) -> Result<Vec<KycEntity>, ServiceError> {
        kyc_entity_store::find_by_name(&self.db, filter).await
    }
}
