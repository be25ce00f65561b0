use pretty_assertions::assert_eq;
use server::api::{check_staff_status, clears_session, payments_gate, with_role};
use server::upstream::{self, Caller};
use shared_types::{AppError, AppErrorKind, AuthUser, FeatureFlags, IssueQuery, IssueStatus, Role};

use crate::common::{mock_api, user_json, CITIZEN_TOKEN};

fn account(id: &str, role: &str) -> AuthUser {
    serde_json::from_value(user_json(id, &format!("{id}@example.com"), role)).unwrap()
}

#[test]
fn dead_token_clears_session() {
    let caller = Caller::with_token(CITIZEN_TOKEN);
    assert!(clears_session(&caller, &AppError::unauthorized("jwt expired")));
}

#[test]
fn anonymous_401_and_403_keep_session() {
    assert!(!clears_session(
        &Caller::anonymous(),
        &AppError::unauthorized("no token")
    ));
    assert!(!clears_session(
        &Caller::with_token(CITIZEN_TOKEN),
        &AppError::forbidden("admins only")
    ));
}

#[test]
fn payments_refused_while_flag_is_off() {
    let err = payments_gate(&FeatureFlags::default()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Payments are not enabled");

    let on = FeatureFlags {
        payments: true,
        ..Default::default()
    };
    assert!(payments_gate(&on).is_ok());
}

#[test]
fn staff_cannot_reopen_or_reject() {
    for status in [IssueStatus::InProgress, IssueStatus::Resolved, IssueStatus::Closed] {
        assert!(check_staff_status(status).is_ok(), "{status:?}");
    }
    for status in [IssueStatus::Pending, IssueStatus::Rejected] {
        let err = check_staff_status(status).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(err.message.starts_with("Status cannot be changed to"));
    }
}

#[test]
fn role_filter_keeps_exact_matches() {
    let users = vec![
        account("c1", "citizen"),
        account("s1", "staff"),
        account("a1", "admin"),
        account("c2", "citizen"),
    ];

    let citizens: Vec<String> = with_role(users.clone(), Role::Citizen)
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(citizens, vec!["c1".to_string(), "c2".to_string()]);

    let staff = with_role(users, Role::Staff);
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].role, Role::Staff);
}

#[tokio::test]
async fn my_issues_query_is_scoped_to_author() {
    let api = mock_api().await;
    let query = IssueQuery::authored_by("rahim@example.com");
    upstream::issue::list(&api.client, &Caller::with_token(CITIZEN_TOKEN), &query)
        .await
        .unwrap();

    let req = api.last();
    assert_eq!(req.path, "/issues");
    assert_eq!(
        req.query.as_deref(),
        Some("limit=100&author=rahim%40example.com")
    );
}

#[tokio::test]
async fn assigned_issues_query_is_scoped_to_staff() {
    let api = mock_api().await;
    let query = IssueQuery::assigned_to("staff@cityguard.com");
    upstream::issue::list(&api.client, &Caller::with_token(CITIZEN_TOKEN), &query)
        .await
        .unwrap();

    assert_eq!(
        api.last().query.as_deref(),
        Some("limit=100&assignedTo=staff%40cityguard.com")
    );
}
