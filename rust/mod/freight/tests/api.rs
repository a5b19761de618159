//! End-to-end tests driving the freight router over HTTP semantics.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use shiperp_core::HeaderAuth;
use shiperp_freight::FreightModule;
use shiperp_freight::service::FreightService;
use shiperp_sql::SqliteStore;

fn app() -> Router {
    let store = SqliteStore::open_in_memory().unwrap();
    let service = FreightService::new(Box::new(store)).unwrap();
    let module = FreightModule::new(service, Arc::new(HeaderAuth));
    use shiperp_core::Module;
    module.routes()
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn create_line_then_search_finds_it() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/lines/create",
        Some("u1"),
        Some(serde_json::json!({"lineName": "Pacific", "branchId": "B"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["newLine"]["lineName"], "Pacific");
    assert_eq!(body["newLine"]["createdBy"], "u1");

    let (status, body) = send(&app, Method::GET, "/lines/B?search=pac", Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["pagination"]["totalItems"], 1);
    assert_eq!(body["lines"][0]["lineName"], "Pacific");
}

#[tokio::test]
async fn delete_nonexistent_line_is_404_with_message() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/lines/doesnotexist",
        Some("u1"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Line not found!");
}

#[tokio::test]
async fn duplicate_voyage_number_is_400_already_exist() {
    let app = app();

    let (_, line) = send(
        &app,
        Method::POST,
        "/lines/create",
        Some("u1"),
        Some(serde_json::json!({"lineName": "Pacific", "branchId": "B"})),
    )
    .await;
    let line_id = line["newLine"]["id"].as_str().unwrap().to_string();

    let voyage = serde_json::json!({
        "seaVoyageName": "Spring Run",
        "seaVoyageNumber": "SV-001",
        "branchId": "B",
        "lineId": line_id,
        "year": 2026,
    });

    let (status, _) = send(&app, Method::POST, "/sea-voyages/create", Some("u1"), Some(voyage.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/sea-voyages/create", Some("u1"), Some(voyage)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(
        body["message"].as_str().unwrap().contains("already exist"),
        "{}",
        body["message"]
    );
}

#[tokio::test]
async fn missing_required_field_is_400() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/lines/create",
        Some("u1"),
        Some(serde_json::json!({"branchId": "B"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "lineName is required!");
}

#[tokio::test]
async fn create_without_identity_is_401() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/lines/create",
        None,
        Some(serde_json::json!({"lineName": "Pacific", "branchId": "B"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn goni_details_is_public() {
    let app = app();

    // Seed a company hierarchy with an authenticated user.
    let (_, line) = send(
        &app,
        Method::POST,
        "/lines/create",
        Some("u1"),
        Some(serde_json::json!({"lineName": "Pacific", "branchId": "B"})),
    )
    .await;
    let line_id = line["newLine"]["id"].as_str().unwrap();
    let (_, company) = send(
        &app,
        Method::POST,
        "/container-companies/create",
        Some("u1"),
        Some(serde_json::json!({"companyName": "Medships", "lineId": line_id, "branchId": "B"})),
    )
    .await;
    let company_id = company["newContainerCompany"]["id"].as_str().unwrap();
    send(
        &app,
        Method::POST,
        "/gonies/create",
        Some("u1"),
        Some(serde_json::json!({"goniName": "Jute 50kg", "companyId": company_id, "branchId": "B"})),
    )
    .await;

    // No identity header on the browse endpoint.
    let uri = format!("/gonies/goni-details?branchId=B&companyId={}", company_id);
    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalItems"], 1);
    assert_eq!(body["gonies"][0]["goniName"], "Jute 50kg");
}

#[tokio::test]
async fn listing_pagination_envelope() {
    let app = app();
    for i in 0..15 {
        let (status, _) = send(
            &app,
            Method::POST,
            "/lines/create",
            Some("u1"),
            Some(serde_json::json!({"lineName": format!("Line {:02}", i), "branchId": "B"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/lines/B?page=2&limit=10", Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["currentPage"], 2);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["pagination"]["totalItems"], 15);
    assert_eq!(body["pagination"]["hasNextPage"], false);
    assert_eq!(body["pagination"]["hasPrevPage"], true);
}

#[tokio::test]
async fn sea_container_listing_is_scoped_and_filterable() {
    let app = app();
    let (_, line) = send(
        &app,
        Method::POST,
        "/lines/create",
        Some("u1"),
        Some(serde_json::json!({"lineName": "Pacific", "branchId": "B"})),
    )
    .await;
    let line_id = line["newLine"]["id"].as_str().unwrap();
    let (_, voyage) = send(
        &app,
        Method::POST,
        "/sea-voyages/create",
        Some("u1"),
        Some(serde_json::json!({
            "seaVoyageName": "Spring Run",
            "seaVoyageNumber": "SV-001",
            "branchId": "B",
            "lineId": line_id,
            "year": 2026,
        })),
    )
    .await;
    let voyage_id = voyage["newSeaVoyage"]["id"].as_str().unwrap();

    send(
        &app,
        Method::POST,
        "/sea-containers/create",
        Some("u1"),
        Some(serde_json::json!({
            "containerNumber": "MSKU1234567",
            "seaVoyageId": voyage_id,
            "branchId": "B",
        })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/sea-containers/create",
        Some("u1"),
        Some(serde_json::json!({
            "containerNumber": "MSKU7654321",
            "seaVoyageId": voyage_id,
            "branchId": "B",
            "status": "completed",
        })),
    )
    .await;

    let uri = format!("/sea-containers/B/sea-voyage/{}?status=completed", voyage_id);
    let (status, body) = send(&app, Method::GET, &uri, Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalItems"], 1);
    assert_eq!(body["seaContainers"][0]["containerNumber"], "MSKU7654321");
}

#[tokio::test]
async fn bill_lifecycle_over_http() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/bills",
        Some("u1"),
        Some(serde_json::json!({
            "billNumber": "BL-100",
            "shipper": "Sahara Exports",
            "consignee": "Tripoli Imports",
            "vessel": "MV Aya",
            "voyageNumber": "SV-001",
            "goods": [{"marksAndNumbers": "A1", "grossWeight": "1200kg"}],
            "isDraft": true,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let bill_id = body["newBill"]["id"].as_str().unwrap().to_string();

    // Listing is public.
    let (status, body) = send(&app, Method::GET, "/bills", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalItems"], 1);

    let uri = format!("/bills/{}", bill_id);
    let (status, body) = send(&app, Method::GET, &uri, Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bill"]["billNumber"], "BL-100");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some("u1"),
        Some(serde_json::json!({"vessel": "MV Farah", "isDraft": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bill"]["vessel"], "MV Farah");
    assert_eq!(body["bill"]["isDraft"], false);
    assert_eq!(body["bill"]["shipper"], "Sahara Exports");

    let (status, _) = send(&app, Method::DELETE, &uri, Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &uri, Some("u1"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Bill of lading not found!");
}

#[tokio::test]
async fn bill_update_nulling_required_field_is_400() {
    let app = app();

    let (_, body) = send(
        &app,
        Method::POST,
        "/bills",
        Some("u1"),
        Some(serde_json::json!({
            "billNumber": "BL-100",
            "shipper": "Sahara Exports",
            "consignee": "Tripoli Imports",
        })),
    )
    .await;
    let uri = format!("/bills/{}", body["newBill"]["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some("u1"),
        Some(serde_json::json!({"shipper": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    // The document survives the rejected patch.
    let (status, body) = send(&app, Method::GET, &uri, Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bill"]["shipper"], "Sahara Exports");
}
