use server::health::{health_report, record_start_time};

use crate::common::{mock_api, unreachable_client};

#[tokio::test]
async fn reachable_upstream() {
    record_start_time();
    let api = mock_api().await;
    let report = health_report(&api.client).await;

    assert_eq!(report.status, "ok");
    assert_eq!(report.upstream, "reachable");
    assert!(!report.version.is_empty());
    assert_eq!(api.last().path, "/health");
}

#[tokio::test]
async fn unreachable_upstream_still_reports_ok() {
    let client = unreachable_client().await;
    let report = health_report(&client).await;

    assert_eq!(report.status, "ok");
    assert!(report.upstream.starts_with("error: "), "{}", report.upstream);
}
