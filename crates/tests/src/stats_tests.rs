use pretty_assertions::assert_eq;
use server::upstream::{self, Caller};
use shared_types::{AdminStats, AppErrorKind, CitizenStats};

use crate::common::{mock_api, ADMIN_TOKEN, CITIZEN_TOKEN};

#[tokio::test]
async fn admin_stats() {
    let api = mock_api().await;
    let stats = upstream::stats::admin(&api.client, &Caller::with_token(ADMIN_TOKEN))
        .await
        .unwrap();
    assert_eq!(
        stats,
        AdminStats {
            total_users: 12,
            total_issues: 30,
            resolved_issues: 9,
            total_payments: 1400.0,
        }
    );
}

#[tokio::test]
async fn admin_stats_forbidden_for_citizen() {
    let api = mock_api().await;
    let err = upstream::stats::admin(&api.client, &Caller::with_token(CITIZEN_TOKEN))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[tokio::test]
async fn citizen_stats() {
    let api = mock_api().await;
    let stats = upstream::stats::citizen(&api.client, &Caller::with_token(CITIZEN_TOKEN))
        .await
        .unwrap();
    assert_eq!(
        stats,
        CitizenStats {
            total: 4,
            pending: 2,
            in_progress: 1,
            resolved: 1,
        }
    );
}

#[tokio::test]
async fn staff_stats_outstanding() {
    let api = mock_api().await;
    let stats = upstream::stats::staff(&api.client, &Caller::with_token(CITIZEN_TOKEN))
        .await
        .unwrap();
    assert_eq!(stats.assigned, 5);
    assert_eq!(stats.outstanding(), 3);
}

#[tokio::test]
async fn anonymous_stats_are_unauthorized() {
    let api = mock_api().await;
    let err = upstream::stats::citizen(&api.client, &Caller::anonymous())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}
