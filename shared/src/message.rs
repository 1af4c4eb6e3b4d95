//! Wire messages exchanged with the telemetry endpoint.
//!
//! Inbound text is classified by shape rather than by a tag, since the
//! endpoint sends three different payloads on one channel:
//!
//! - a JSON array of readings (a replay of stored history)
//! - an object with a `message` field holding one live reading
//! - anything else, which is an acknowledgement of the login request
//!
//! Only the third shape counts as an acknowledgement. An array is always a
//! batch; elements that are not readings are logged and skipped. An object
//! with a `message` field that is not a reading (an error body from the
//! gateway, say) is rejected. Text that is not JSON at all is an error too.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{DashboardError, Result},
    reading::RawReading,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Inbound {
    Batch(Vec<RawReading>),
    Single(RawReading),
    Acknowledgement(Value),
}

impl Inbound {
    pub fn decode(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::classify(value)
    }

    pub fn classify(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => {
                let total = items.len();
                let readings: Vec<RawReading> = items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, item)| match serde_json::from_value(item) {
                        Ok(reading) => Some(reading),
                        Err(e) => {
                            log::warn!("Skipping batch element {index}: {e}");
                            None
                        }
                    })
                    .collect();
                if readings.len() < total {
                    log::warn!("Kept {} of {total} batch elements", readings.len());
                }
                Ok(Inbound::Batch(readings))
            }
            Value::Object(mut fields) if fields.contains_key("message") => {
                let message = fields.remove("message").unwrap_or_default();
                serde_json::from_value::<RawReading>(message.clone())
                    .map(Inbound::Single)
                    .map_err(|e| DashboardError::InvalidReading(format!("{message}: {e}")))
            }
            other => Ok(Inbound::Acknowledgement(other)),
        }
    }
}

/// Requests sent to the endpoint, tagged by `action`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Outbound {
    GetData { user_id: String },
    GetHistory { user_id: String },
}

impl Outbound {
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_batch() {
        let inbound = Inbound::decode(
            r#"[{"timestamp":1000,"temperature":20,"humidity":50},
                {"timestamp":2000,"temperature":21,"humidity":55}]"#,
        )
        .unwrap();

        let Inbound::Batch(readings) = inbound else {
            panic!("expected a batch, got {inbound:?}");
        };
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].timestamp, 2000.0);
        assert_eq!(readings[1].humidity, 55.0);
    }

    #[test]
    fn empty_array_is_an_empty_batch() {
        assert_eq!(Inbound::decode("[]").unwrap(), Inbound::Batch(vec![]));
    }

    #[test]
    fn decodes_wrapped_reading() {
        let inbound = Inbound::decode(
            r#"{"message":{"timestamp":3000,"temperature":22,"humidity":60,"cloud":"online"}}"#,
        )
        .unwrap();

        assert_eq!(
            inbound,
            Inbound::Single(RawReading {
                timestamp: 3000.0,
                temperature: 22.0,
                humidity: 60.0,
                uptime: None,
                cloud: Some("online".to_string()),
            })
        );
    }

    #[test]
    fn anything_else_is_an_acknowledgement() {
        assert_eq!(
            Inbound::decode(r#"{"status":"ok"}"#).unwrap(),
            Inbound::Acknowledgement(json!({"status": "ok"}))
        );
        assert_eq!(
            Inbound::decode("42").unwrap(),
            Inbound::Acknowledgement(json!(42))
        );
        assert_eq!(
            Inbound::decode("null").unwrap(),
            Inbound::Acknowledgement(Value::Null)
        );
    }

    #[test]
    fn batch_keeps_only_decodable_elements() {
        let inbound = Inbound::decode(
            r#"[{"timestamp":1000,"temperature":20,"humidity":50},
                {"timestamp":2000,"temperature":21},
                "garbage"]"#,
        )
        .unwrap();

        let Inbound::Batch(readings) = inbound else {
            panic!("expected a batch, got {inbound:?}");
        };
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].timestamp, 1000.0);
    }

    #[test]
    fn rejects_wrapped_non_reading() {
        assert!(matches!(
            Inbound::decode(r#"{"message":"Internal server error"}"#),
            Err(DashboardError::InvalidReading(_))
        ));
        assert!(matches!(
            Inbound::decode(r#"{"message":{"temperature":20}}"#),
            Err(DashboardError::InvalidReading(_))
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            Inbound::decode("{not json"),
            Err(DashboardError::Decode(_))
        ));
    }

    #[test]
    fn encodes_requests() {
        let get_data = Outbound::GetData {
            user_id: "pi-7".to_string(),
        };
        assert_eq!(
            serde_json::from_str::<Value>(&get_data.encode().unwrap()).unwrap(),
            json!({"action": "GetData", "user_id": "pi-7"})
        );

        let get_history = Outbound::GetHistory {
            user_id: "pi-7".to_string(),
        };
        assert_eq!(
            serde_json::from_str::<Value>(&get_history.encode().unwrap()).unwrap(),
            json!({"action": "GetHistory", "user_id": "pi-7"})
        );
    }
}
