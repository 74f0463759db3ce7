use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kyc_entity;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entity_date")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entity_id: String,
    /// Index within the owning entity's date list.
    pub position: i32,
    /// Free-form label such as `birth` or `death`.
    pub date_type: Option<String>,
    pub event_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { KycEntity }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::KycEntity => Entity::belongs_to(kyc_entity::Entity)
                .from(Column::EntityId)
                .to(kyc_entity::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<kyc_entity::Entity> for Entity {
    fn to() -> RelationDef { Relation::KycEntity.def() }
}

impl ActiveModelBehavior for ActiveModel {}
