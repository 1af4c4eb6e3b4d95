use serde::Deserialize;

use crate::store::DataSet;

/// Dashboard settings, injected by the hosting page.
///
/// Every field has a default, so an empty object is a valid configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// WebSocket URL of the telemetry endpoint
    pub endpoint: String,
    /// Query parameter carrying the user id
    pub user_param: String,
    /// Data set shown before any data arrives
    pub default_set: DataSet,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: "ws://localhost:8080".to_string(),
            user_param: "userID".to_string(),
            default_set: DataSet::History,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Connection URL for a user. `encoded_user_id` must already be
    /// URI-component encoded.
    pub fn endpoint_url(&self, encoded_user_id: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.endpoint, separator, self.user_param, encoded_user_id
        )
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        assert_eq!(
            serde_json::from_str::<DashboardConfig>("{}").unwrap(),
            DashboardConfig::default()
        );
    }

    #[test]
    fn overrides_fields() {
        let config: DashboardConfig = serde_json::from_str(
            r#"{
                "endpoint": "wss://example.org/production",
                "default_set": "session",
                "log_level": "debug"
            }"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "wss://example.org/production");
        assert_eq!(config.user_param, "userID");
        assert_eq!(config.default_set, DataSet::Session);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_set() {
        assert!(serde_json::from_str::<DashboardConfig>(r#"{"default_set": "archive"}"#).is_err());
    }

    #[test]
    fn builds_endpoint_url() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.endpoint_url("pi-7"), "ws://localhost:8080?userID=pi-7");

        config.endpoint = "wss://example.org/ws?v=2".to_string();
        config.user_param = "user".to_string();
        assert_eq!(config.endpoint_url("a%20b"), "wss://example.org/ws?v=2&user=a%20b");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = DashboardConfig {
            log_level: "loud".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
