//! `HttpActivityApi` against a local axum server.

use activity_board::api::{ActivityApi, HttpActivityApi};
use activity_board::{BoardError, Config};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Keys deliberately out of alphabetical order.
const CATALOG: &str = r#"{
    "Zumba": {"description": "Dance", "schedule": "Fri", "max_participants": 10, "participants": []},
    "Chess Club": {"description": "Chess", "schedule": "Mon", "max_participants": 2, "participants": ["a@x.com"]},
    "Art": {"description": "Paint", "schedule": "Wed", "max_participants": 5, "participants": ["b@x.com", "c@x.com"]}
}"#;

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

type Seen = Arc<Mutex<Vec<(String, String)>>>;

async fn catalog() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], CATALOG)
}

async fn signup(
    State(seen): State<Seen>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> impl IntoResponse {
    seen.lock().unwrap().push((name.clone(), query.email.clone()));
    match name.as_str() {
        "Full Club" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Activity full"})),
        ),
        "Strict Club" => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"msg": "field required"}]})),
        ),
        _ => (
            StatusCode::OK,
            Json(json!({"message": format!("Signed up {} for {name}", query.email)})),
        ),
    }
}

async fn remove(Path(name): Path<String>, Query(query): Query<EmailQuery>) -> impl IntoResponse {
    if name == "Broken" {
        return (StatusCode::OK, "<html>oops</html>".to_string());
    }
    (
        StatusCode::OK,
        json!({"message": format!("Removed {} from {name}", query.email)}).to_string(),
    )
}

fn router(seen: Seen) -> Router {
    Router::new()
        .route("/activities", get(catalog))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/participants", delete(remove))
        .with_state(seen)
}

/// Serves `app` on an ephemeral port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String) -> HttpActivityApi {
    let config = Config {
        base_url,
        request_timeout_secs: 5,
        ..Config::default()
    };
    HttpActivityApi::new(&config).unwrap()
}

#[tokio::test]
async fn catalog_keeps_server_order() {
    let api = client(serve(router(Seen::default())).await);

    let catalog = api.fetch_activities().await.unwrap();

    assert_eq!(
        catalog.names().collect::<Vec<_>>(),
        ["Zumba", "Chess Club", "Art"]
    );
    let chess = catalog.get("Chess Club").unwrap();
    assert_eq!(chess.spots_left(), 1);
    assert!(chess.has_participant("a@x.com"));
}

#[tokio::test]
async fn signup_sends_encoded_name_and_email() {
    let seen = Seen::default();
    let api = client(serve(router(Arc::clone(&seen))).await);

    let message = api.sign_up("Chess Club", "a+b@x.com").await.unwrap();

    assert_eq!(message, "Signed up a+b@x.com for Chess Club");
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [("Chess Club".to_string(), "a+b@x.com".to_string())]
    );
}

#[tokio::test]
async fn rejection_carries_detail() {
    let api = client(serve(router(Seen::default())).await);

    let err = api.sign_up("Full Club", "a@x.com").await.unwrap_err();
    assert!(matches!(err, BoardError::Rejected { status: 400, .. }));
    assert_eq!(err.detail(), Some("Activity full"));
    assert!(!err.is_transport());

    let err = api.sign_up("Strict Club", "a@x.com").await.unwrap_err();
    assert!(matches!(err, BoardError::Rejected { status: 422, detail: None }));
}

#[tokio::test]
async fn removal_returns_message() {
    let api = client(serve(router(Seen::default())).await);

    let message = api.remove_participant("Art", "b@x.com").await.unwrap();
    assert_eq!(message, "Removed b@x.com from Art");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let api = client(serve(router(Seen::default())).await);

    let err = api.remove_participant("Broken", "b@x.com").await.unwrap_err();
    assert!(matches!(err, BoardError::Decode(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn failed_catalog_fetch_is_an_error() {
    let app = Router::new().route(
        "/activities",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "database down"})),
            )
        }),
    );
    let api = client(serve(app).await);

    let err = api.fetch_activities().await.unwrap_err();
    assert!(matches!(err, BoardError::Rejected { status: 500, .. }));
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let app = Router::new().nest("/school", router(Seen::default()));
    let api = client(format!("{}/school", serve(app).await));

    let catalog = api.fetch_activities().await.unwrap();
    assert_eq!(catalog.len(), 3);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(format!("http://{addr}"));

    let err = api.fetch_activities().await.unwrap_err();
    assert!(matches!(err, BoardError::Transport(_)));
    assert!(err.is_transport());
}
