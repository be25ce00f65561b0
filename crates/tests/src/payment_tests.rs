use pretty_assertions::assert_eq;
use server::upstream::{self, Caller};
use shared_types::{AppErrorKind, CreatePaymentRequest, PaymentPurpose, BOOST_PRICE};

use crate::common::{mock_api, ADMIN_TOKEN, CITIZEN_TOKEN};

#[tokio::test]
async fn boost_posts_fixed_amount() {
    let api = mock_api().await;
    upstream::payment::create(
        &api.client,
        &Caller::with_token(CITIZEN_TOKEN),
        &CreatePaymentRequest::boost("iss-1"),
    )
    .await
    .unwrap();

    let req = api.last();
    assert_eq!(req.path, "/payments");
    assert_eq!(req.body["amount"], BOOST_PRICE);
    assert_eq!(req.body["purpose"], "boost_issue");
    assert_eq!(req.body["issueId"], "iss-1");
}

#[tokio::test]
async fn subscription_has_no_issue_id() {
    let api = mock_api().await;
    upstream::payment::create(
        &api.client,
        &Caller::with_token(CITIZEN_TOKEN),
        &CreatePaymentRequest::subscription(),
    )
    .await
    .unwrap();

    let req = api.last();
    assert_eq!(req.body["purpose"], "subscription");
    assert!(req.body.get("issueId").is_none());
}

#[tokio::test]
async fn admin_payment_history() {
    let api = mock_api().await;
    let payments = upstream::payment::list(&api.client, &Caller::with_token(ADMIN_TOKEN))
        .await
        .unwrap();

    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].purpose, PaymentPurpose::BoostIssue);
    assert_eq!(payments[0].amount, 100.0);
    assert_eq!(payments[0].issue_id.as_deref(), Some("iss-1"));
}

#[tokio::test]
async fn citizen_cannot_read_payment_history() {
    let api = mock_api().await;
    let err = upstream::payment::list(&api.client, &Caller::with_token(CITIZEN_TOKEN))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}
