use axum::http::Method;
use pretty_assertions::assert_eq;
use server::upstream::{self, Caller};
use shared_types::{AppErrorKind, CreateStaffRequest, Role, UpdateProfileRequest};

use crate::common::{mock_api, ADMIN_TOKEN, CITIZEN_TOKEN};

#[tokio::test]
async fn admin_lists_every_account() {
    let api = mock_api().await;
    let users = upstream::user::list(&api.client, &Caller::with_token(ADMIN_TOKEN))
        .await
        .unwrap();

    let roles: Vec<Role> = users.iter().map(|u| u.role).collect();
    assert_eq!(roles, vec![Role::Citizen, Role::Staff, Role::Admin]);
}

#[tokio::test]
async fn citizen_cannot_list_users() {
    let api = mock_api().await;
    let err = upstream::user::list(&api.client, &Caller::with_token(CITIZEN_TOKEN))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Forbidden access");
}

#[tokio::test]
async fn block_sends_is_blocked_flag() {
    let api = mock_api().await;
    upstream::user::set_blocked(&api.client, &Caller::with_token(ADMIN_TOKEN), "u-1", true)
        .await
        .unwrap();

    let req = api.last();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.path, "/users/u-1/block");
    assert_eq!(req.body, serde_json::json!({"isBlocked": true}));
}

#[tokio::test]
async fn create_and_delete_staff() {
    let api = mock_api().await;
    let caller = Caller::with_token(ADMIN_TOKEN);

    let staff = upstream::user::create_staff(
        &api.client,
        &caller,
        &CreateStaffRequest {
            name: "Field Officer".into(),
            email: "officer@example.com".into(),
            password: "secret1".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(staff.role, Role::Staff);
    assert_eq!(api.last().path, "/users/staff");

    upstream::user::delete(&api.client, &caller, &staff.id).await.unwrap();
    let req = api.last();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.path, "/users/u-4");
}

#[tokio::test]
async fn profile_update_round_trips_photo() {
    let api = mock_api().await;
    let user = upstream::user::update_me(
        &api.client,
        &Caller::with_token(CITIZEN_TOKEN),
        &UpdateProfileRequest {
            name: "Ayesha Rahman".into(),
            photo_url: Some("https://i.ibb.co/ayesha.png".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(user.name, "Ayesha Rahman");
    assert_eq!(user.photo_url.as_deref(), Some("https://i.ibb.co/ayesha.png"));
    assert_eq!(api.last().path, "/users/me");
}
