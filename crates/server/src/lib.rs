#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod upstream;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod auth;
