use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid jest-typed-paths plugin config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options passed by the host as the plugin's JSON config.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Warn when a `jest.*` call carries neither a type argument nor a nested
    /// helper call.
    pub warn_missing_type_argument: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warn_missing_type_argument: true,
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
