use dioxus::prelude::*;
use shared_types::Payment;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::upstream::{self, get_client};

#[cfg(feature = "server")]
use super::session::*;

#[cfg(feature = "server")]
fn require_payments_enabled() -> Result<(), ServerFnError> {
    payments_gate(crate::config::feature_flags()).map_err(|e| e.into_server_fn_error())
}

/// Boosts and subscriptions are refused unless the `payments` flag is on.
#[cfg(feature = "server")]
pub fn payments_gate(flags: &shared_types::FeatureFlags) -> Result<(), shared_types::AppError> {
    if flags.payments {
        Ok(())
    } else {
        Err(shared_types::AppError::forbidden("Payments are not enabled"))
    }
}

/// Payment history, for the admin payments page.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_payments() -> Result<Vec<Payment>, ServerFnError> {
    let caller = require_session()?;
    upstream::payment::list(get_client(), &caller)
        .await
        .map_err(|e| upstream_error(&caller, e))
}

/// Pay to raise an issue to high priority.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn boost_issue(id: String) -> Result<(), ServerFnError> {
    use shared_types::CreatePaymentRequest;

    require_payments_enabled()?;
    let caller = require_session()?;
    upstream::payment::create(get_client(), &caller, &CreatePaymentRequest::boost(id))
        .await
        .map_err(|e| upstream_error(&caller, e))
}

/// Pay for the premium subscription.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn subscribe() -> Result<(), ServerFnError> {
    use shared_types::CreatePaymentRequest;

    require_payments_enabled()?;
    let caller = require_session()?;
    upstream::payment::create(get_client(), &caller, &CreatePaymentRequest::subscription())
        .await
        .map_err(|e| upstream_error(&caller, e))
}
