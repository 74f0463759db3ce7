use async_trait::async_trait;

use super::domain::{AddressFilter, EntityPayload, KycEntity, NameFilter};
use crate::errors::ServiceError;

/// Repository abstraction for KYC entity persistence.
///
/// Absence is reported as `None`, `false` or an empty list; turning that
/// into `NotFound` is the service's job.
#[async_trait]
pub trait KycEntityRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<KycEntity>, ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<KycEntity>, ServiceError>;
    /// Assigns a new id and stores the entity with all children atomically.
    async fn create(&self, payload: EntityPayload) -> Result<KycEntity, ServiceError>;
    /// Full replace of scalars and child collections.
    async fn update(&self, id: &str, payload: EntityPayload) -> Result<Option<KycEntity>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
    async fn find_by_address(&self, filter: &AddressFilter) -> Result<Vec<KycEntity>, ServiceError>;
    async fn find_by_name(&self, filter: &NameFilter) -> Result<Vec<KycEntity>, ServiceError>;
}

/// Simple in-memory repository for tests and local demos
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use uuid::Uuid;

    #[derive(Default)]
    pub struct InMemoryKycEntityRepository {
        entities: Mutex<Vec<KycEntity>>, // insertion order
    }

    impl InMemoryKycEntityRepository {
        fn store(&self) -> Result<MutexGuard<'_, Vec<KycEntity>>, ServiceError> {
            self.entities.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl KycEntityRepository for InMemoryKycEntityRepository {
        async fn list_all(&self) -> Result<Vec<KycEntity>, ServiceError> {
            Ok(self.store()?.clone())
        }

        async fn get(&self, id: &str) -> Result<Option<KycEntity>, ServiceError> {
            Ok(self.store()?.iter().find(|e| e.id == id).cloned())
        }

        async fn create(&self, payload: EntityPayload) -> Result<KycEntity, ServiceError> {
            let entity = KycEntity::from_payload(Uuid::new_v4().to_string(), payload);
            self.store()?.push(entity.clone());
            Ok(entity)
        }

        async fn update(&self, id: &str, payload: EntityPayload) -> Result<Option<KycEntity>, ServiceError> {
            let mut store = self.store()?;
            let Some(slot) = store.iter_mut().find(|e| e.id == id) else { return Ok(None) };
            *slot = KycEntity::from_payload(id, payload);
            Ok(Some(slot.clone()))
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            let mut store = self.store()?;
            let before = store.len();
            store.retain(|e| e.id != id);
            Ok(store.len() < before)
        }

        async fn find_by_address(&self, filter: &AddressFilter) -> Result<Vec<KycEntity>, ServiceError> {
            Ok(self.store()?.iter().filter(|e| filter.matches_entity(e)).cloned().collect())
        }

        async fn find_by_name(&self, filter: &NameFilter) -> Result<Vec<KycEntity>, ServiceError> {
            Ok(self.store()?.iter().filter(|e| filter.matches_entity(e)).cloned().collect())
        }
    }
}
