use std::env;

pub const DEFAULT_API_VERSION: &str = "2024-01-01";

pub const PROJECT_ID_VAR: &str = "SANITY_PROJECT_ID";
pub const DATASET_VAR: &str = "SANITY_DATASET";
/// Names the website's `.env` uses for the same identifiers
pub const PUBLIC_PROJECT_ID_VAR: &str = "NEXT_PUBLIC_SANITY_PROJECT_ID";
pub const PUBLIC_DATASET_VAR: &str = "NEXT_PUBLIC_SANITY_DATASET";
pub const READ_TOKEN_VAR: &str = "SANITY_API_READ_TOKEN";
pub const API_VERSION_VAR: &str = "SANITY_API_VERSION";
pub const USE_CDN_VAR: &str = "SANITY_USE_CDN";
pub const API_HOST_VAR: &str = "SANITY_API_HOST";

/// Connection settings for the Sanity content source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// Only needed for private datasets
    pub token: Option<String>,
    pub api_version: String,
    /// Off by default so edits show up immediately
    pub use_cdn: bool,
    /// Overrides the `https://<project>.api.sanity.io` base URL
    pub api_host: Option<String>,
}

impl SanityConfig {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: false,
            api_host: None,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Returns `None` when the project or dataset is missing, which selects
    /// the fallback dataset.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SanityConfig::from_env`] with a custom variable source.
    /// Empty values count as missing. The project and dataset fall back to
    /// their `NEXT_PUBLIC_` names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let project_id = get(PROJECT_ID_VAR).or_else(|| get(PUBLIC_PROJECT_ID_VAR))?;
        let dataset = get(DATASET_VAR).or_else(|| get(PUBLIC_DATASET_VAR))?;

        let mut config = Self::new(project_id, dataset);
        config.token = get(READ_TOKEN_VAR);
        if let Some(version) = get(API_VERSION_VAR) {
            config.api_version = version;
        }
        config.use_cdn = get(USE_CDN_VAR)
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        config.api_host = get(API_HOST_VAR);

        Some(config)
    }

    /// Base URL of the query API
    pub fn api_base_url(&self) -> String {
        match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None if self.use_cdn => format!("https://{}.apicdn.sanity.io", self.project_id),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    /// Endpoint for GROQ queries against the configured dataset
    pub fn query_url(&self) -> String {
        let version = self.api_version.trim_start_matches('v');
        format!(
            "{}/v{}/data/query/{}",
            self.api_base_url(),
            version,
            self.dataset
        )
    }
}

/// Whether both required identifiers are present in the environment.
///
/// Makes no network call.
pub fn is_configured() -> bool {
    SanityConfig::from_env().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn requires_project_and_dataset() {
        assert!(SanityConfig::from_lookup(lookup(&[])).is_none());
        assert!(SanityConfig::from_lookup(lookup(&[(PROJECT_ID_VAR, "abc123")])).is_none());
        assert!(SanityConfig::from_lookup(lookup(&[(DATASET_VAR, "production")])).is_none());

        let config = SanityConfig::from_lookup(lookup(&[
            (PROJECT_ID_VAR, "abc123"),
            (DATASET_VAR, "production"),
        ]))
        .unwrap();
        assert_eq!(config, SanityConfig::new("abc123", "production"));
    }

    #[test]
    fn website_variable_names_are_accepted() {
        let config = SanityConfig::from_lookup(lookup(&[
            (PUBLIC_PROJECT_ID_VAR, "web123"),
            (PUBLIC_DATASET_VAR, "production"),
        ]))
        .unwrap();
        assert_eq!(config, SanityConfig::new("web123", "production"));

        let mixed = SanityConfig::from_lookup(lookup(&[
            (PROJECT_ID_VAR, "own123"),
            (PUBLIC_PROJECT_ID_VAR, "web123"),
            (PUBLIC_DATASET_VAR, "staging"),
        ]))
        .unwrap();
        assert_eq!(mixed.project_id, "own123");
        assert_eq!(mixed.dataset, "staging");
    }

    #[test]
    fn empty_values_count_as_missing() {
        let config = SanityConfig::from_lookup(lookup(&[
            (PROJECT_ID_VAR, "  "),
            (DATASET_VAR, "production"),
        ]));
        assert!(config.is_none());
    }

    #[test]
    fn optional_settings_are_read() {
        let config = SanityConfig::from_lookup(lookup(&[
            (PROJECT_ID_VAR, "abc123"),
            (DATASET_VAR, "staging"),
            (READ_TOKEN_VAR, "secret"),
            (API_VERSION_VAR, "2025-02-19"),
            (USE_CDN_VAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.token.as_deref(), Some("secret"));
        assert!(config.use_cdn);
        assert_eq!(
            config.query_url(),
            "https://abc123.apicdn.sanity.io/v2025-02-19/data/query/staging"
        );
    }

    #[test]
    fn default_query_url_skips_cdn() {
        let config = SanityConfig::new("abc123", "production");
        assert_eq!(
            config.query_url(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn api_host_override_wins() {
        let config = SanityConfig {
            api_host: Some("http://127.0.0.1:9999/".to_string()),
            ..SanityConfig::new("abc123", "production")
        };
        assert_eq!(
            config.query_url(),
            "http://127.0.0.1:9999/v2024-01-01/data/query/production"
        );
    }
}
