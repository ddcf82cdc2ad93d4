//! Application configuration

use std::env;

use serde::{Deserialize, Serialize};

/// Backend used when no explicit URL is configured and the client runs
/// against a local development host.
pub const LOCAL_DEFAULT_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explicit backend base URL, if configured.
    pub api_url: Option<String>,
    /// Host the client considers itself to be running against.
    pub host: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // An empty value counts as unset, matching the falsy check the
            // deployed frontends rely on.
            api_url: env::var("COACH_API_URL").ok().filter(|v| !v.is_empty()),
            host: env::var("COACH_HOST").unwrap_or_else(|_| "localhost".into()),
        }
    }

    pub fn base_url(&self) -> String {
        resolve_base_url(self.api_url.as_deref(), &self.host)
    }
}

/// Resolve the backend base URL, in priority order: the explicitly configured
/// URL, the local default when running against a development host, otherwise
/// an empty base (same-origin relative routing).
///
/// Pure function of its inputs so resolution stays deterministic per
/// environment.
pub fn resolve_base_url(configured: Option<&str>, host: &str) -> String {
    if let Some(url) = configured {
        return url.to_string();
    }
    if is_local_host(host) {
        LOCAL_DEFAULT_URL.to_string()
    } else {
        String::new()
    }
}

fn is_local_host(host: &str) -> bool {
    let hostname = host.split(':').next().unwrap_or(host);
    hostname == "localhost" || hostname == "127.0.0.1"
}
