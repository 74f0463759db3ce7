use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::{AddressFilter, EntityPayload, KycEntity, NameFilter};
use super::repository::KycEntityRepository;
use crate::errors::ServiceError;

/// Application service for KYC entities.
/// Maps absent records and empty searches to `ServiceError::NotFound`;
/// a plain listing is never "not found".
pub struct KycEntityService<R: KycEntityRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: KycEntityRepository + ?Sized> KycEntityService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Every entity, unpaginated.
    pub async fn list_all(&self) -> Result<Vec<KycEntity>, ServiceError> {
        let list = self.repo.list_all().await?;
        debug!(count = list.len(), "listed entities");
        Ok(list)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<KycEntity, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("entity"))
    }

    #[instrument(skip(self, payload), fields(addresses = payload.addresses.len(), names = payload.names.len(), dates = payload.dates.len()))]
    pub async fn create(&self, payload: EntityPayload) -> Result<KycEntity, ServiceError> {
        let created = self.repo.create(payload).await?;
        info!(entity_id = %created.id, "created entity");
        Ok(created)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: &str, payload: EntityPayload) -> Result<KycEntity, ServiceError> {
        let updated = self.repo.update(id, payload).await?.ok_or_else(|| ServiceError::not_found("entity"))?;
        info!(entity_id = %updated.id, addresses = updated.addresses.len(), "replaced entity");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("entity"));
        }
        info!(entity_id = %id, "deleted entity");
        Ok(())
    }

    pub async fn find_by_country(&self, country: &str) -> Result<Vec<KycEntity>, ServiceError> {
        let found = self.repo.find_by_address(&AddressFilter::CountryEquals(country.to_string())).await?;
        non_empty(found, "entities for country")
    }

    pub async fn find_by_address_line(&self, line: &str) -> Result<Vec<KycEntity>, ServiceError> {
        let found = self.repo.find_by_address(&AddressFilter::LineContains(line.to_string())).await?;
        non_empty(found, "entities for address line")
    }

    pub async fn find_by_first_name(&self, name: &str) -> Result<Vec<KycEntity>, ServiceError> {
        let found = self.repo.find_by_name(&NameFilter::FirstNameContains(name.to_string())).await?;
        non_empty(found, "entities for first name")
    }

    pub async fn find_by_middle_name(&self, name: &str) -> Result<Vec<KycEntity>, ServiceError> {
        let found = self.repo.find_by_name(&NameFilter::MiddleNameContains(name.to_string())).await?;
        non_empty(found, "entities for middle name")
    }

    pub async fn find_by_surname(&self, name: &str) -> Result<Vec<KycEntity>, ServiceError> {
        let found = self.repo.find_by_name(&NameFilter::SurnameContains(name.to_string())).await?;
        non_empty(found, "entities for surname")
    }
}

fn non_empty(found: Vec<KycEntity>, what: &str) -> Result<Vec<KycEntity>, ServiceError> {
    if found.is_empty() {
        return Err(ServiceError::not_found(what));
    }
    Ok(found)
}
