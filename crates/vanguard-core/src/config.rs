use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

pub const ENV_API_URL: &str = "VANGUARD_API_URL";
pub const ENV_API_KEY: &str = "VANGUARD_API_KEY";
pub const ENV_PROJECT_ID: &str = "VANGUARD_PROJECT_ID";
pub const ENV_LISTEN: &str = "VANGUARD_LISTEN";
pub const ENV_LOG: &str = "VANGUARD_LOG";

/// Where the eval backend lives and how to authenticate against it.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(rename = "url")]
    pub api_url: String,
    #[serde(rename = "key", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            project_id: None,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("project_id", &self.project_id)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub listen: SocketAddr,
    pub log_level: String,
    /// Keys present in the config file that nothing reads.
    #[serde(skip)]
    pub unknown_fields: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: "info".to_string(),
            unknown_fields: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Defaults, then the YAML file (if any), then `VANGUARD_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        cfg.apply_env(|k| std::env::var(k).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        load_file(path)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_API_URL) {
            self.api.api_url = v;
        }
        if let Some(v) = lookup(ENV_API_KEY) {
            self.api.api_key = non_empty(v);
        }
        if let Some(v) = lookup(ENV_PROJECT_ID) {
            self.api.project_id = non_empty(v);
        }
        if let Some(v) = lookup(ENV_LISTEN) {
            self.listen = v
                .parse()
                .map_err(|e| ConfigError(format!("invalid {}={:?}: {}", ENV_LISTEN, v, e)))?;
        }
        if let Some(v) = lookup(ENV_LOG) {
            self.log_level = v;
        }
        Ok(())
    }
}

fn non_empty(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}

fn load_file(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    if raw.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }

    let mut ignored = BTreeSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(&raw);
    let mut cfg: DashboardConfig = serde_ignored::deserialize(deserializer, |p| {
        ignored.insert(p.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;

    cfg.unknown_fields = ignored.into_iter().collect();
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.api.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.listen.to_string(), DEFAULT_LISTEN);
        assert!(cfg.api.api_key.is_none());
    }

    #[test]
    fn env_overrides_defaults() {
        let mut cfg = DashboardConfig::default();
        cfg.apply_env(env(&[
            (ENV_API_URL, "https://evals.internal:9000"),
            (ENV_API_KEY, "s3cret"),
            (ENV_LISTEN, "0.0.0.0:8080"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();
        assert_eq!(cfg.api.api_url, "https://evals.internal:9000");
        assert_eq!(cfg.api.api_key.as_deref(), Some("s3cret"));
        assert_eq!(cfg.listen.port(), 8080);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn blank_api_key_disables_auth() {
        let mut cfg = DashboardConfig::default();
        cfg.apply_env(env(&[(ENV_API_KEY, "  ")])).unwrap();
        assert!(cfg.api.api_key.is_none());
    }

    #[test]
    fn bad_listen_address_is_rejected() {
        let mut cfg = DashboardConfig::default();
        let err = cfg.apply_env(env(&[(ENV_LISTEN, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LISTEN));
    }

    #[test]
    fn debug_redacts_api_key() {
        let api = ApiConfig {
            api_key: Some("s3cret".into()),
            ..ApiConfig::default()
        };
        let shown = format!("{:?}", api);
        assert!(!shown.contains("s3cret"));
        assert!(shown.contains("<redacted>"));
    }
}
