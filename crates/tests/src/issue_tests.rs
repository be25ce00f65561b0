use axum::http::Method;
use pretty_assertions::assert_eq;
use server::upstream::{self, Caller};
use shared_types::{
    AppErrorKind, Category, CreateIssueRequest, IssueQuery, IssueStatus, Priority,
};

use crate::common::{mock_api, ADMIN_TOKEN, CITIZEN_TOKEN};

fn report() -> CreateIssueRequest {
    CreateIssueRequest {
        title: "Overflowing bin".into(),
        category: Category::Garbage,
        location: "Block C, Mirpur".into(),
        image: "https://i.ibb.co/bin.jpg".into(),
        description: "Not collected for a week".into(),
    }
}

#[tokio::test]
async fn browse_sends_only_filled_filters() {
    let api = mock_api().await;
    let query = IssueQuery::browse(" lamp ", None, Some(IssueStatus::InProgress), 2);
    let page = upstream::issue::list(&api.client, &Caller::anonymous(), &query)
        .await
        .unwrap();

    assert_eq!(page.issues.len(), 2);
    assert_eq!(page.total, 8);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.issues[1].status, IssueStatus::Resolved);

    let req = api.last();
    assert_eq!(req.path, "/issues");
    assert_eq!(
        req.query.as_deref(),
        Some("search=lamp&status=in-progress&page=2&limit=6")
    );
    assert_eq!(req.authorization, None);
}

#[tokio::test]
async fn get_issue_parses_nested_fields() {
    let api = mock_api().await;
    let issue = upstream::issue::get(&api.client, &Caller::with_token(CITIZEN_TOKEN), "iss-7")
        .await
        .unwrap();

    assert_eq!(issue.id, "iss-7");
    assert_eq!(issue.category, Category::Roads);
    assert_eq!(issue.priority, Priority::Normal);
    assert_eq!(issue.author.email, "citizen@example.com");
    assert_eq!(issue.timeline.len(), 1);
    assert!(issue.can_edit_by("citizen@example.com"));
}

#[tokio::test]
async fn missing_issue_is_not_found() {
    let api = mock_api().await;
    let err = upstream::issue::get(&api.client, &Caller::with_token(CITIZEN_TOKEN), "missing")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Issue not found");
}

#[tokio::test]
async fn create_posts_report_body() {
    let api = mock_api().await;
    let issue = upstream::issue::create(&api.client, &Caller::with_token(CITIZEN_TOKEN), &report())
        .await
        .unwrap();

    assert_eq!(issue.id, "iss-new");
    assert_eq!(issue.title, "Overflowing bin");

    let req = api.last();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.body["category"], "Garbage");
    assert_eq!(req.body["location"], "Block C, Mirpur");
}

#[tokio::test]
async fn anonymous_create_is_unauthorized() {
    let api = mock_api().await;
    let err = upstream::issue::create(&api.client, &Caller::anonymous(), &report())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn edit_uses_patch_on_issue_path() {
    let api = mock_api().await;
    let mut edited = report();
    edited.title = "Overflowing bin near mosque".into();
    let issue = upstream::issue::update(
        &api.client,
        &Caller::with_token(CITIZEN_TOKEN),
        "iss-3",
        &edited,
    )
    .await
    .unwrap();

    assert_eq!(issue.title, "Overflowing bin near mosque");
    let req = api.last();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.path, "/issues/iss-3");
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let api = mock_api().await;
    upstream::issue::delete(&api.client, &Caller::with_token(CITIZEN_TOKEN), "iss-3")
        .await
        .unwrap();
    let req = api.last();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.path, "/issues/iss-3");
}

#[tokio::test]
async fn second_upvote_surfaces_conflict_message() {
    let api = mock_api().await;
    let caller = Caller::with_token(CITIZEN_TOKEN);

    upstream::issue::upvote(&api.client, &caller, "iss-1").await.unwrap();
    assert_eq!(api.last().path, "/issues/iss-1/upvote");

    let err = upstream::issue::upvote(&api.client, &caller, "voted")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "You have already upvoted this issue");
}

#[tokio::test]
async fn status_change_sends_kebab_case() {
    let api = mock_api().await;
    upstream::issue::set_status(
        &api.client,
        &Caller::with_token(CITIZEN_TOKEN),
        "iss-1",
        IssueStatus::InProgress,
    )
    .await
    .unwrap();

    let req = api.last();
    assert_eq!(req.path, "/issues/iss-1/status");
    assert_eq!(req.body, serde_json::json!({"status": "in-progress"}));
}

#[tokio::test]
async fn assign_requires_admin() {
    let api = mock_api().await;

    let err = upstream::issue::assign(&api.client, &Caller::with_token(CITIZEN_TOKEN), "iss-1", "u-3")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);

    upstream::issue::assign(&api.client, &Caller::with_token(ADMIN_TOKEN), "iss-1", "u-3")
        .await
        .unwrap();
    let req = api.last();
    assert_eq!(req.path, "/issues/iss-1/assign");
    assert_eq!(req.body, serde_json::json!({"staffId": "u-3"}));
}

#[tokio::test]
async fn ids_are_percent_encoded_in_paths() {
    let api = mock_api().await;
    let _ = upstream::issue::get(&api.client, &Caller::anonymous(), "a/b").await;
    assert_eq!(api.last().path, "/issues/a%2Fb");
}
