#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod issue_tests;

#[cfg(test)]
mod user_tests;

#[cfg(test)]
mod payment_tests;

#[cfg(test)]
mod stats_tests;

#[cfg(test)]
mod session_middleware_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod server_rules_tests;
