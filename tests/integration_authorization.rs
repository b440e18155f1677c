mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use authgate::authgate_models::RequiredRole;
use authgate::middleware::role::guard;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use common::{
    assert_no_auth, assert_not_login, get_json, test_app, test_state, token_for, token_without_role,
};

#[tokio::test]
async fn test_health_open_without_token() {
    let (status, body) = get_json(test_app(), "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "up");
}

#[tokio::test]
async fn test_health_open_for_unknown_role() {
    let (_, token) = token_for("unknown_garbage");
    let (status, _) = get_json(test_app(), "/api/health", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_me_requires_token() {
    let (status, body) = get_json(test_app(), "/api/users/me", None).await;
    assert_not_login(status, &body);
}

#[tokio::test]
async fn test_me_rejects_invalid_token() {
    let (status, body) = get_json(test_app(), "/api/users/me", Some("not.a.jwt")).await;
    assert_not_login(status, &body);
}

#[tokio::test]
async fn test_me_returns_caller_for_user() {
    let (user, token) = token_for("user");
    let (status, body) = get_json(test_app(), "/api/users/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user.id.to_string());
    assert_eq!(body["data"]["user_role"], "user");
}

#[tokio::test]
async fn test_me_allows_admin() {
    let (_, token) = token_for("admin");
    let (status, body) = get_json(test_app(), "/api/users/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user_role"], "admin");
}

#[tokio::test]
async fn test_me_denies_banned() {
    let (_, token) = token_for("ban");
    let (status, body) = get_json(test_app(), "/api/users/me", Some(&token)).await;
    assert_no_auth(status, &body);
}

#[tokio::test]
async fn test_me_denies_unmapped_role() {
    let (_, token) = token_for("xyz");
    let (status, body) = get_json(test_app(), "/api/users/me", Some(&token)).await;
    assert_no_auth(status, &body);
}

#[tokio::test]
async fn test_me_denies_token_without_role_claim() {
    let token = token_without_role();
    let (status, body) = get_json(test_app(), "/api/users/me", Some(&token)).await;
    assert_no_auth(status, &body);

    let (_, empty_role) = token_for("");
    let (_, empty_body) = get_json(test_app(), "/api/users/me", Some(&empty_role)).await;
    assert_eq!(body, empty_body);
}

#[tokio::test]
async fn test_admin_overview_denies_user() {
    let (_, token) = token_for("user");
    let (status, body) = get_json(test_app(), "/api/admin/overview", Some(&token)).await;
    assert_no_auth(status, &body);
}

#[tokio::test]
async fn test_admin_overview_allows_admin() {
    let (_, token) = token_for("admin");
    let (status, body) = get_json(test_app(), "/api/admin/overview", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["service"], "authgate");
    assert_eq!(
        body["data"]["roles"],
        serde_json::json!(["user", "admin", "ban"])
    );
}

#[tokio::test]
async fn test_admin_overview_requires_token() {
    let (status, body) = get_json(test_app(), "/api/admin/overview", None).await;
    assert_not_login(status, &body);
}

#[tokio::test]
async fn test_denials_look_identical() {
    let mut bodies = Vec::new();
    for role in ["user", "ban", "xyz"] {
        let (_, token) = token_for(role);
        let (status, body) = get_json(test_app(), "/api/admin/overview", Some(&token)).await;
        assert_no_auth(status, &body);
        bodies.push(body);
    }
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

fn counting_app(required: RequiredRole, hits: Arc<AtomicUsize>) -> Router {
    let state = test_state();
    let routes = Router::new().route(
        "/guarded",
        get(move || {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                "ran"
            }
        }),
    );
    guard(routes, required, &state).with_state(state)
}

#[tokio::test]
async fn test_guarded_handler_runs_once_on_grant() {
    let hits = Arc::new(AtomicUsize::new(0));
    let (_, token) = token_for("admin");

    let (status, _) = get_json(
        counting_app(RequiredRole::Admin, hits.clone()),
        "/guarded",
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_guarded_handler_never_runs_on_denial() {
    let hits = Arc::new(AtomicUsize::new(0));

    for role in ["user", "ban", "xyz"] {
        let (_, token) = token_for(role);
        let (status, body) = get_json(
            counting_app(RequiredRole::Admin, hits.clone()),
            "/guarded",
            Some(&token),
        )
        .await;
        assert_no_auth(status, &body);
    }

    let (status, _) = get_json(counting_app(RequiredRole::User, hits.clone()), "/guarded", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unguarded_handler_runs_without_token() {
    let hits = Arc::new(AtomicUsize::new(0));

    let (status, _) = get_json(counting_app(RequiredRole::None, hits.clone()), "/guarded", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_denied_response_carries_request_id() {
    use authgate::logging::REQUEST_ID_HEADER;
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    let (_, token) = token_for("ban");
    let request = Request::builder()
        .uri("/api/users/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(REQUEST_ID_HEADER, "req-42")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
}
