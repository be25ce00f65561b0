use pretty_assertions::assert_eq;
use server::upstream::{self, Caller};
use shared_types::{AppErrorKind, LoginRequest, RegisterRequest, Role};

use crate::common::{mock_api, CITIZEN_TOKEN, GOOD_PASSWORD};

#[tokio::test]
async fn login_returns_token_and_profile() {
    let api = mock_api().await;
    let session = upstream::auth::login(
        &api.client,
        &Caller::anonymous(),
        &LoginRequest {
            email: "citizen@example.com".into(),
            password: GOOD_PASSWORD.into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(session.token, CITIZEN_TOKEN);
    assert_eq!(session.user.email, "citizen@example.com");
    assert_eq!(session.user.role, Role::Citizen);

    let req = api.last();
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.authorization, None);
    assert_eq!(req.body["email"], "citizen@example.com");
}

#[tokio::test]
async fn bad_password_is_unauthorized_with_remote_message() {
    let api = mock_api().await;
    let err = upstream::auth::login(
        &api.client,
        &Caller::anonymous(),
        &LoginRequest {
            email: "citizen@example.com".into(),
            password: "wrong".into(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn register_sends_photo_url_wire_name() {
    let api = mock_api().await;
    let session = upstream::auth::register(
        &api.client,
        &Caller::anonymous(),
        &RegisterRequest {
            name: "Nadia".into(),
            email: "nadia@example.com".into(),
            password: GOOD_PASSWORD.into(),
            photo_url: Some("https://i.ibb.co/nadia.png".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(session.user.email, "nadia@example.com");
    let req = api.last();
    assert_eq!(req.path, "/auth/register");
    assert_eq!(req.body["photoURL"], "https://i.ibb.co/nadia.png");
}

#[tokio::test]
async fn duplicate_registration_is_conflict() {
    let api = mock_api().await;
    let err = upstream::auth::register(
        &api.client,
        &Caller::anonymous(),
        &RegisterRequest {
            name: "Dup".into(),
            email: "taken@example.com".into(),
            password: GOOD_PASSWORD.into(),
            photo_url: None,
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Email already registered");
}

#[tokio::test]
async fn me_forwards_bearer_and_request_id() {
    let api = mock_api().await;
    let caller = Caller::with_token(CITIZEN_TOKEN).request_id("req-42");
    let user = upstream::user::me(&api.client, &caller).await.unwrap();

    assert_eq!(user.email, "citizen@example.com");
    let req = api.last();
    assert_eq!(req.authorization.as_deref(), Some("Bearer citizen-token"));
    assert_eq!(req.request_id.as_deref(), Some("req-42"));
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let api = mock_api().await;
    let err = upstream::user::me(&api.client, &Caller::with_token("stale"))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Session expired");
}
