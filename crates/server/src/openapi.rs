use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDoc {
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NameDoc {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub surname: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityDateDoc {
    pub date_type: Option<String>,
    /// ISO 8601 calendar date
    #[schema(example = "1815-12-10")]
    pub date: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KycEntityDoc {
    pub id: String,
    pub addresses: Vec<AddressDoc>,
    pub dates: Vec<EntityDateDoc>,
    pub deceased: bool,
    pub gender: Option<String>,
    pub names: Vec<NameDoc>,
}

/// Any `id` sent by the client is ignored.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityPayloadDoc {
    pub addresses: Vec<AddressDoc>,
    pub dates: Vec<EntityDateDoc>,
    pub deceased: bool,
    pub gender: Option<String>,
    pub names: Vec<NameDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::entities::list_all,
        crate::routes::entities::get_by_id,
        crate::routes::entities::create,
        crate::routes::entities::update,
        crate::routes::entities::delete,
        crate::routes::entities::by_country,
        crate::routes::entities::by_address_line,
        crate::routes::entities::by_first_name,
        crate::routes::entities::by_middle_name,
        crate::routes::entities::by_surname,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            AddressDoc,
            NameDoc,
            EntityDateDoc,
            KycEntityDoc,
            EntityPayloadDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "entities"),
        (name = "search")
    )
)]
pub struct ApiDoc;
