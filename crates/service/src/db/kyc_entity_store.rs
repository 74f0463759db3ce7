use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use models::{entity_address, entity_date, entity_name, kyc_entity};
use crate::errors::ServiceError;
use crate::kyc_entity::domain::{AddressFilter, EntityPayload, KycEntity, NameFilter};

/// Upper bound on ids per `IN (...)` list when loading child rows.
const ID_CHUNK: usize = 500;

/// List every entity with all child collections.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<KycEntity>, ServiceError> {
    let roots = kyc_entity::Entity::find()
        .order_by_asc(kyc_entity::Column::CreatedAt)
        .order_by_asc(kyc_entity::Column::Id)
        .all(db)
        .await?;
    hydrate(db, roots).await
}

/// Get one entity by id.
pub async fn get(db: &DatabaseConnection, id: &str) -> Result<Option<KycEntity>, ServiceError> {
    load_one(db, id).await
}

/// Insert an entity and its children in one transaction under a fresh id.
pub async fn create(db: &DatabaseConnection, payload: EntityPayload) -> Result<KycEntity, ServiceError> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().into();
    let txn = db.begin().await?;

    let root = kyc_entity::ActiveModel {
        id: Set(id.clone()),
        gender: Set(payload.gender.clone()),
        deceased: Set(payload.deceased),
        created_at: Set(now),
        updated_at: Set(now),
    };
    kyc_entity::Entity::insert(root).exec_without_returning(&txn).await?;
    insert_children(&txn, &id, &payload).await?;

    txn.commit().await?;
    Ok(KycEntity::from_payload(id, payload))
}

/// Replace scalar fields and every child collection; `None` if `id` is unknown.
pub async fn update(db: &DatabaseConnection, id: &str, payload: EntityPayload) -> Result<Option<KycEntity>, ServiceError> {
    let txn = db.begin().await?;

    let Some(existing) = kyc_entity::Entity::find_by_id(id.to_string()).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(None);
    };
    let mut am: kyc_entity::ActiveModel = existing.into();
    am.gender = Set(payload.gender.clone());
    am.deceased = Set(payload.deceased);
    am.updated_at = Set(Utc::now().into());
    am.update(&txn).await?;

    delete_children(&txn, id).await?;
    insert_children(&txn, id, &payload).await?;

    txn.commit().await?;
    Ok(Some(KycEntity::from_payload(id, payload)))
}

/// Delete an entity and its children; returns false if `id` is unknown.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;

    let Some(existing) = kyc_entity::Entity::find_by_id(id.to_string()).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(false);
    };
    delete_children(&txn, id).await?;
    existing.delete(&txn).await?;

    txn.commit().await?;
    Ok(true)
}

/// Entities with at least one address matching `filter`.
pub async fn find_by_address(db: &DatabaseConnection, filter: &AddressFilter) -> Result<Vec<KycEntity>, ServiceError> {
    let cond = match filter {
        AddressFilter::CountryEquals(c) => entity_address::Column::Country.eq(c.as_str()),
        AddressFilter::LineContains(s) => contains_ignore_case(entity_address::Column::AddressLine, s),
    };
    let owners = entity_address::Entity::find()
        .select_only()
        .column(entity_address::Column::EntityId)
        .filter(cond)
        .into_query();
    find_roots_in(db, owners).await
}

/// Entities with at least one name matching `filter`.
pub async fn find_by_name(db: &DatabaseConnection, filter: &NameFilter) -> Result<Vec<KycEntity>, ServiceError> {
    let cond = match filter {
        NameFilter::FirstNameContains(s) => contains_ignore_case(entity_name::Column::FirstName, s),
        NameFilter::MiddleNameContains(s) => contains_ignore_case(entity_name::Column::MiddleName, s),
        NameFilter::SurnameContains(s) => contains_ignore_case(entity_name::Column::Surname, s),
    };
    let owners = entity_name::Entity::find()
        .select_only()
        .column(entity_name::Column::EntityId)
        .filter(cond)
        .into_query();
    find_roots_in(db, owners).await
}

async fn find_roots_in(
    db: &DatabaseConnection,
    owners: sea_orm::sea_query::SelectStatement,
) -> Result<Vec<KycEntity>, ServiceError> {
    let roots = kyc_entity::Entity::find()
        .filter(kyc_entity::Column::Id.in_subquery(owners))
        .order_by_asc(kyc_entity::Column::CreatedAt)
        .order_by_asc(kyc_entity::Column::Id)
        .all(db)
        .await?;
    hydrate(db, roots).await
}

/// `LOWER(col) LIKE LOWER('%needle%') ESCAPE '\'`. Both sides go through the
/// backend's own `LOWER`, so a needle always matches text stored with the
/// same spelling, whatever the backend's folding rules are.
fn contains_ignore_case<C: ColumnTrait>(col: C, needle: &str) -> SimpleExpr {
    let pattern: SimpleExpr = Func::lower(Expr::val(format!("%{}%", escape_like(needle)))).into();
    let escaped = SimpleExpr::Binary(Box::new(pattern), BinOper::Escape, Box::new(SimpleExpr::Constant('\\'.into())));
    Expr::expr(Func::lower(Expr::col(col.as_column_ref()))).binary(BinOper::Like, escaped)
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

async fn load_one<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<KycEntity>, ServiceError> {
    let Some(root) = kyc_entity::Entity::find_by_id(id.to_string()).one(db).await? else {
        return Ok(None);
    };
    Ok(hydrate(db, vec![root]).await?.pop())
}

/// Attach child collections to `roots`: one query per child table per id
/// chunk, grouped in memory and kept in payload order.
async fn hydrate<C: ConnectionTrait>(db: &C, roots: Vec<kyc_entity::Model>) -> Result<Vec<KycEntity>, ServiceError> {
    if roots.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<String> = roots.iter().map(|r| r.id.clone()).collect();

    let mut addresses: HashMap<String, Vec<entity_address::Model>> = HashMap::new();
    let mut names: HashMap<String, Vec<entity_name::Model>> = HashMap::new();
    let mut dates: HashMap<String, Vec<entity_date::Model>> = HashMap::new();

    for chunk in ids.chunks(ID_CHUNK) {
        let rows = entity_address::Entity::find()
            .filter(entity_address::Column::EntityId.is_in(chunk.to_vec()))
            .order_by_asc(entity_address::Column::Position)
            .all(db)
            .await?;
        for row in rows {
            addresses.entry(row.entity_id.clone()).or_default().push(row);
        }

        let rows = entity_name::Entity::find()
            .filter(entity_name::Column::EntityId.is_in(chunk.to_vec()))
            .order_by_asc(entity_name::Column::Position)
            .all(db)
            .await?;
        for row in rows {
            names.entry(row.entity_id.clone()).or_default().push(row);
        }

        let rows = entity_date::Entity::find()
            .filter(entity_date::Column::EntityId.is_in(chunk.to_vec()))
            .order_by_asc(entity_date::Column::Position)
            .all(db)
            .await?;
        for row in rows {
            dates.entry(row.entity_id.clone()).or_default().push(row);
        }
    }

    Ok(roots
        .into_iter()
        .map(|root| {
            let a = addresses.remove(&root.id).unwrap_or_default();
            let n = names.remove(&root.id).unwrap_or_default();
            let d = dates.remove(&root.id).unwrap_or_default();
            KycEntity::from_rows(root, a, n, d)
        })
        .collect())
}

async fn insert_children<C: ConnectionTrait>(db: &C, entity_id: &str, payload: &EntityPayload) -> Result<(), ServiceError> {
    let addresses: Vec<entity_address::ActiveModel> = payload
        .addresses
        .iter()
        .enumerate()
        .map(|(i, a)| entity_address::ActiveModel {
            id: Set(Uuid::new_v4()),
            entity_id: Set(entity_id.to_string()),
            position: Set(i as i32),
            address_line: Set(a.address_line.clone()),
            city: Set(a.city.clone()),
            postal_code: Set(a.postal_code.clone()),
            country: Set(a.country.clone()),
        })
        .collect();
    if !addresses.is_empty() {
        entity_address::Entity::insert_many(addresses).exec_without_returning(db).await?;
    }

    let names: Vec<entity_name::ActiveModel> = payload
        .names
        .iter()
        .enumerate()
        .map(|(i, n)| entity_name::ActiveModel {
            id: Set(Uuid::new_v4()),
            entity_id: Set(entity_id.to_string()),
            position: Set(i as i32),
            first_name: Set(n.first_name.clone()),
            middle_name: Set(n.middle_name.clone()),
            surname: Set(n.surname.clone()),
        })
        .collect();
    if !names.is_empty() {
        entity_name::Entity::insert_many(names).exec_without_returning(db).await?;
    }

    let dates: Vec<entity_date::ActiveModel> = payload
        .dates
        .iter()
        .enumerate()
        .map(|(i, d)| entity_date::ActiveModel {
            id: Set(Uuid::new_v4()),
            entity_id: Set(entity_id.to_string()),
            position: Set(i as i32),
            date_type: Set(d.date_type.clone()),
            event_date: Set(d.date),
        })
        .collect();
    if !dates.is_empty() {
        entity_date::Entity::insert_many(dates).exec_without_returning(db).await?;
    }
    Ok(())
}

async fn delete_children<C: ConnectionTrait>(db: &C, entity_id: &str) -> Result<(), ServiceError> {
    entity_address::Entity::delete_many()
        .filter(entity_address::Column::EntityId.eq(entity_id))
        .exec(db)
        .await?;
    entity_name::Entity::delete_many()
        .filter(entity_name::Column::EntityId.eq(entity_id))
        .exec(db)
        .await?;
    entity_date::Entity::delete_many()
        .filter(entity_date::Column::EntityId.eq(entity_id))
        .exec(db)
        .await?;
    Ok(())
}
