use authgate::authgate_auth::create_access_token;
use authgate::authgate_config::{CorsConfig, JwtConfig};
use authgate::authgate_models::LoginUser;
use authgate::router::init_router;
use authgate::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state() -> AppState {
    AppState::new(test_jwt_config(), CorsConfig::default())
}

pub fn test_app() -> Router {
    init_router(test_state())
}

/// Signs a token for a fresh user carrying the raw `role` string.
pub fn token_for(role: &str) -> (LoginUser, String) {
    let user = LoginUser::new(Uuid::new_v4(), role);
    let token = create_access_token(&user, &test_jwt_config()).unwrap();
    (user, token)
}

/// Signs a token whose payload carries no `user_role` claim at all.
#[allow(dead_code)]
pub fn token_without_role() -> String {
    let now = chrono::Utc::now().timestamp();
    let payload = serde_json::json!({
        "sub": Uuid::new_v4().to_string(),
        "exp": now + 3600,
        "iat": now,
    });
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &payload,
        &jsonwebtoken::EncodingKey::from_secret(test_jwt_config().secret.as_bytes()),
    )
    .unwrap()
}

/// Sends a GET request and returns the status and decoded JSON envelope.
pub async fn get_json(app: Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[allow(dead_code)]
pub fn assert_no_auth(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 40101);
    assert_eq!(body["message"], "No permission");
    assert!(body["data"].is_null());
}

#[allow(dead_code)]
pub fn assert_not_login(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 40100);
}
