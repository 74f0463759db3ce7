use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::kyc_entity::repo::seaorm::SeaOrmKycEntityRepository;
use service::kyc_entity::repository::KycEntityRepository;
use service::kyc_entity::KycEntityService;

/// Shared handler state. The storage handle is injected here once at
/// startup; handlers never reach for a global connection.
#[derive(Clone)]
pub struct ServerState {
    pub entities: Arc<KycEntityService<dyn KycEntityRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn KycEntityRepository>) -> Self {
        Self { entities: Arc::new(KycEntityService::new(repo)) }
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmKycEntityRepository::new(db)))
    }
}
