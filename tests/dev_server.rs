//! Dev server behaviour, exercised in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use hash_router::http::shell::builtin_shell;
use hash_router::http::DevServer;
use hash_router::{Router, RouterConfig};

fn server() -> DevServer {
    let config = RouterConfig::default();
    let router = Router::from_config(&config.routes).unwrap();
    let shell = builtin_shell(&router, &config.history.base);
    DevServer::new(config, Arc::new(router), shell)
}

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = server()
        .app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_serves_shell() {
    let (status, _, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<div id=\"app\"></div>"));
    assert!(body.contains("href=\"/#/admin\""));

    let (status, _, _) = get("/index.html").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_application_paths_are_not_server_routes() {
    let (status, _, _) = get("/admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get("/staff/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resolve_matched() {
    let (status, _, body) = get("/api/resolve?location=%23%2Fstaff%2F1").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"status": "matched", "view": "staff_panel", "params": {"id": "1"}})
    );
}

#[tokio::test]
async fn test_resolve_not_found() {
    let (status, _, body) = get("/api/resolve?location=%2Funknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "not_found");
    assert_eq!(json["path"], "/unknown");
}

#[tokio::test]
async fn test_resolve_requires_location() {
    let (status, _, body) = get("/api/resolve").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("location"));
}

#[tokio::test]
async fn test_routes_listing() {
    let (status, _, body) = get("/api/routes").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let routes = json.as_array().unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[2]["name"], "staff");
    assert_eq!(routes[2]["view"], "staff_panel");
    assert_eq!(routes[2]["path"], "/staff/:id");
    assert!(routes[2]["href"].is_null());
    assert_eq!(routes[0]["href"], "/#/");
    assert_eq!(routes[1]["href"], "/#/admin");
}

#[tokio::test]
async fn test_request_id_header() {
    let (_, headers, _) = get("/api/routes").await;
    let id = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_resolve_fragment_with_url_in_query() {
    // #/?redirect=http://example.com/admin
    let (status, _, body) =
        get("/api/resolve?location=%23%2F%3Fredirect%3Dhttp%3A%2F%2Fexample.com%2Fadmin").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["view"], "login");
}
