use dioxus::prelude::*;
use shared_types::FeatureFlags;

#[cfg(feature = "server")]
pub(crate) mod session;
#[cfg(feature = "server")]
pub use session::clears_session;

mod account;
pub use account::*;

mod issue;
pub use issue::*;

mod user;
pub use user::*;

mod payment;
pub use payment::*;

mod stats;
pub use stats::*;

/// Get the current feature flags. No auth required, flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
