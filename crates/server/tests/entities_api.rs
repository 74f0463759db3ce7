use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{routes, ServerState};
use service::kyc_entity::repository::mock::InMemoryKycEntityRepository;

fn app() -> Router {
    let state = ServerState::new(Arc::new(InMemoryKycEntityRepository::default()));
    routes::build_router(state, CorsLayer::very_permissive())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body)?).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn hopper() -> Value {
    json!({
        "addresses": [{"addressLine": "123 Main St", "city": "Arlington", "postalCode": "22201", "country": "US"}],
        "dates": [{"dateType": "birth", "date": "1906-12-09"}],
        "deceased": true,
        "gender": "F",
        "names": [{"firstName": "Grace", "middleName": "Brewster", "surname": "Hopper"}]
    })
}

#[tokio::test]
async fn health_and_openapi_are_public() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/entities/{id}"].is_object());
    assert!(doc["paths"]["/api/entities/bysurname/{name}"].is_object());
    Ok(())
}

#[tokio::test]
async fn empty_listing_is_ok_but_empty_search_is_404() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/entities", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, Method::GET, "/api/entities/bycountry/US", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn create_assigns_id_and_ignores_client_id() -> anyhow::Result<()> {
    let app = app();
    let mut payload = hopper();
    payload["id"] = json!("client-chosen");
    let (status, created) = send(&app, Method::POST, "/api/entities", Some(payload)).await?;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert_ne!(id, "client-chosen");
    assert_eq!(id.len(), 36);
    assert_eq!(created["names"][0]["surname"], "Hopper");
    assert_eq!(created["dates"][0]["date"], "1906-12-09");

    let (status, got) = send(&app, Method::GET, &format!("/api/entities/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(got, created);
    Ok(())
}

#[tokio::test]
async fn update_replaces_and_delete_removes() -> anyhow::Result<()> {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/entities", Some(hopper())).await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();
    let uri = format!("/api/entities/{id}");

    let replacement = json!({"gender": "F", "names": [{"firstName": "Amazing", "surname": "Grace"}]});
    let (status, updated) = send(&app, Method::PUT, &uri, Some(replacement)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["addresses"], json!([]));
    assert_eq!(updated["deceased"], false);
    assert_eq!(updated["names"][0]["surname"], "Grace");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn search_endpoints_filter_by_child_fields() -> anyhow::Result<()> {
    let app = app();
    send(&app, Method::POST, "/api/entities", Some(hopper())).await?;
    send(
        &app,
        Method::POST,
        "/api/entities",
        Some(json!({
            "addresses": [{"addressLine": "10 Downing St", "country": "UK"}],
            "names": [{"firstName": "Ada", "middleName": "Augusta", "surname": "Lovelace"}]
        })),
    )
    .await?;

    let (status, found) = send(&app, Method::GET, "/api/entities/bycountry/US", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().map(Vec::len), Some(1));

    // country comparison is exact
    let (status, _) = send(&app, Method::GET, "/api/entities/bycountry/us", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, found) = send(&app, Method::GET, "/api/entities/byaddressline/downing", None).await?;
    assert_eq!(found[0]["names"][0]["surname"], "Lovelace");

    let (_, found) = send(&app, Method::GET, "/api/entities/byfirstname/GRA", None).await?;
    assert_eq!(found[0]["names"][0]["surname"], "Hopper");

    let (_, found) = send(&app, Method::GET, "/api/entities/bymiddlename/gust", None).await?;
    assert_eq!(found[0]["names"][0]["firstName"], "Ada");

    let (status, _) = send(&app, Method::GET, "/api/entities/bysurname/Turing", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_rejected_without_writing() -> anyhow::Result<()> {
    let app = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/entities")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let res = app.clone().oneshot(req).await?;
    assert!(res.status().is_client_error());

    let (_, list) = send(&app, Method::GET, "/api/entities", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}
