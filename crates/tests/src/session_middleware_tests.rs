use axum::{
    body::Body,
    extract::Extension,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use pretty_assertions::assert_eq;
use server::auth::cookies::{CookieSlot, PendingCookieAction, SESSION_COOKIE};
use server::auth::middleware::session_middleware;
use server::auth::SessionToken;
use tower::ServiceExt;

async fn whoami(token: Option<Extension<SessionToken>>) -> String {
    token
        .map(|Extension(SessionToken(t))| t)
        .unwrap_or_else(|| "anonymous".to_string())
}

async fn sign_in(Extension(slot): Extension<CookieSlot>) -> StatusCode {
    slot.schedule(PendingCookieAction::Set("fresh-token".into()));
    StatusCode::OK
}

async fn sign_out(Extension(slot): Extension<CookieSlot>) -> StatusCode {
    slot.schedule(PendingCookieAction::Clear);
    StatusCode::OK
}

fn app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/sign-in", get(sign_in))
        .route("/sign-out", get(sign_out))
        .layer(middleware::from_fn(session_middleware))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn anonymous_requests_pass_through() {
    let response = app()
        .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_text(response).await, "anonymous");
}

#[tokio::test]
async fn session_cookie_becomes_token() {
    let response = app()
        .oneshot(
            Request::get("/whoami")
                .header(header::COOKIE, format!("theme=cityguard; {SESSION_COOKIE}=abc123"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_text(response).await, "abc123");
}

#[tokio::test]
async fn bearer_header_is_a_fallback() {
    let response = app()
        .oneshot(
            Request::get("/whoami")
                .header(header::AUTHORIZATION, "Bearer from-header")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_text(response).await, "from-header");
}

#[tokio::test]
async fn cookie_wins_over_bearer_header() {
    let response = app()
        .oneshot(
            Request::get("/whoami")
                .header(header::COOKIE, format!("{SESSION_COOKIE}=from-cookie"))
                .header(header::AUTHORIZATION, "Bearer from-header")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_text(response).await, "from-cookie");
}

#[tokio::test]
async fn scheduled_login_sets_http_only_cookie() {
    let response = app()
        .oneshot(Request::get("/sign-in").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=fresh-token")));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn scheduled_logout_expires_cookie() {
    let response = app()
        .oneshot(
            Request::get("/sign-out")
                .header(header::COOKIE, format!("{SESSION_COOKIE}=abc123"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=;")));
    assert!(cookie.contains("Max-Age=0"));
}
