use dioxus::prelude::*;
use shared_types::{AdminStats, CitizenStats, StaffStats};

#[cfg(feature = "server")]
use crate::upstream::{self, get_client};

#[cfg(feature = "server")]
use super::session::*;

#[server]
pub async fn admin_stats() -> Result<AdminStats, ServerFnError> {
    let caller = require_session()?;
    upstream::stats::admin(get_client(), &caller)
        .await
        .map_err(|e| upstream_error(&caller, e))
}

#[server]
pub async fn citizen_stats() -> Result<CitizenStats, ServerFnError> {
    let caller = require_session()?;
    upstream::stats::citizen(get_client(), &caller)
        .await
        .map_err(|e| upstream_error(&caller, e))
}

#[server]
pub async fn staff_stats() -> Result<StaffStats, ServerFnError> {
    let caller = require_session()?;
    upstream::stats::staff(get_client(), &caller)
        .await
        .map_err(|e| upstream_error(&caller, e))
}
