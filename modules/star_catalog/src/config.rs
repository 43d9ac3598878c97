use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the star_catalog module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub caller: CallerConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig::default(),
            caller: CallerConfig::default(),
        }
    }
}

/// Where and how the importer talks to the external catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Page of the upstream listing to import.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items requested from the upstream listing.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Bound on every outbound request; a slow upstream fails the import
    /// with a timeout error instead of stalling the request.
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page: default_page(),
            limit: default_limit(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Stand-in caller identity until a real session mechanism exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallerConfig {
    #[serde(default = "default_user_id")]
    pub user_id: i32,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.swapi.tech/api".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_user_id() -> i32 {
    1
}
