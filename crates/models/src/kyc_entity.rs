use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{entity_address, entity_date, entity_name};

/// Root KYC record. Child collections live in their own tables and are
/// owned by composition (`ON DELETE CASCADE`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kyc_entity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub gender: Option<String>,
    pub deceased: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Address, Name, Date }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Address => Entity::has_many(entity_address::Entity).into(),
            Relation::Name => Entity::has_many(entity_name::Entity).into(),
            Relation::Date => Entity::has_many(entity_date::Entity).into(),
        }
    }
}

impl Related<entity_address::Entity> for Entity {
    fn to() -> RelationDef { Relation::Address.def() }
}

impl Related<entity_name::Entity> for Entity {
    fn to() -> RelationDef { Relation::Name.def() }
}

impl Related<entity_date::Entity> for Entity {
    fn to() -> RelationDef { Relation::Date.def() }
}

impl ActiveModelBehavior for ActiveModel {}
