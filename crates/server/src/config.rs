use shared_types::{ApiConfig, AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents, falling back to defaults when unparseable.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Apply `CITYGUARD_API_URL` / `CITYGUARD_API_TIMEOUT_SECS` on top of the file.
pub fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(url) = std::env::var("CITYGUARD_API_URL") {
        if !url.is_empty() {
            config.api.base_url = url;
        }
    }
    if let Some(secs) = std::env::var("CITYGUARD_API_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        config.api.timeout_secs = secs;
    }
    config
}

/// Read `.env` and `config.toml` and store the result in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, flags are off and the API
/// points at the local default.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::info!(error = %e, "{CONFIG_PATH} not found, using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env_overrides(config);
        tracing::info!(
            features = ?config.features,
            api = %config.api.base_url,
            "Configuration loaded"
        );
        config
    });
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_config()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        payments: false,
        telemetry: false,
    };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Remote API settings, with env overrides applied when not yet loaded.
pub fn api_config() -> ApiConfig {
    match CONFIG.get() {
        Some(c) => c.api.clone(),
        None => apply_env_overrides(AppConfig::default()).api,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn garbage_config_falls_back_to_defaults() {
        let config = parse_config("this is = = not toml");
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn parse_reads_api_section() {
        let config = parse_config(
            r#"
            [features]
            payments = true

            [api]
            base_url = "https://cityguard-api.example.org"
            timeout_secs = 4
            "#,
        );
        assert!(config.features.payments);
        assert_eq!(config.api.base_url, "https://cityguard-api.example.org");
        assert_eq!(config.api.timeout_secs, 4);
    }

    #[test]
    fn feature_flags_default_before_load() {
        // CONFIG is never initialised in unit tests.
        assert!(!feature_flags().payments);
        assert!(!feature_flags().telemetry);
    }
}
