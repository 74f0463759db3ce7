use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kyc_entity;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entity_name")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub entity_id: String,
    /// Index within the owning entity's name list.
    pub position: i32,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub surname: Option<String>,
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
