use serde::{Deserialize, Serialize};

use crate::time::format_timestamp;

/// A sample as it arrives on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Device uptime, e.g. `0d:1h:2m:3s`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    /// Cloud link status reported by the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<String>,
}

/// A sample ready for display. The timestamp is already formatted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
    pub uptime: Option<String>,
    pub cloud: Option<String>,
}

impl Reading {
    /// Zeroed reading shown when there is nothing to display.
    pub fn placeholder() -> Self {
        Self {
            timestamp: "0".to_string(),
            ..Self::default()
        }
    }
}

impl From<RawReading> for Reading {
    fn from(raw: RawReading) -> Self {
        Self {
            timestamp: format_timestamp(raw.timestamp),
            temperature: raw.temperature,
            humidity: raw.humidity,
            uptime: raw.uptime,
            cloud: raw.cloud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_raw_reading() {
        let raw: RawReading = serde_json::from_str(
            r#"{"timestamp": 2000, "temperature": 21.5, "humidity": 55, "uptime": "0d:0h:1m:2s"}"#,
        )
        .unwrap();

        let reading = Reading::from(raw);
        assert_eq!(reading.timestamp, "01/01/1970, 00:00:02");
        assert_eq!(reading.temperature, 21.5);
        assert_eq!(reading.humidity, 55.0);
        assert_eq!(reading.uptime.as_deref(), Some("0d:0h:1m:2s"));
        assert_eq!(reading.cloud, None);
    }

    #[test]
    fn placeholder_is_zeroed() {
        let placeholder = Reading::placeholder();
        assert_eq!(placeholder.timestamp, "0");
        assert_eq!(placeholder.temperature, 0.0);
        assert_eq!(placeholder.humidity, 0.0);
    }
}
