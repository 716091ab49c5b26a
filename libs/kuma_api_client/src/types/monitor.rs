use serde::{Deserialize, Serialize};

/// A monitor definition as accepted by `POST /api/monitor`.
///
/// The server performs all validation; this struct only pins the wire shape.
/// Optional fields are left off the wire entirely when unset.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MonitorDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub url: String,
    /// check interval in seconds
    pub interval: u64,
    pub maxretries: u32,
    /// per-check timeout in seconds, enforced server-side
    pub timeout: u64,
    pub active: bool,
    /// status-code range patterns, e.g. "200-299"
    pub accepted_statuscodes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// extra request headers, pre-serialized as a JSON object string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> MonitorDefinition {
        MonitorDefinition {
            name: "Example".to_string(),
            monitor_type: "http".to_string(),
            url: "https://example.org".to_string(),
            interval: 60,
            maxretries: 3,
            timeout: 10,
            active: true,
            accepted_statuscodes: vec!["200-299".to_string()],
            method: None,
            headers: None,
            description: None,
        }
    }

    #[test]
    fn serializes_type_under_wire_name() {
        let value = serde_json::to_value(minimal()).unwrap();
        assert_eq!(value["type"], "http");
        assert!(value.get("monitor_type").is_none());
    }

    #[test]
    fn unset_optional_fields_stay_off_the_wire() {
        let value = serde_json::to_value(minimal()).unwrap();
        assert!(value.get("method").is_none());
        assert!(value.get("headers").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn set_optional_fields_are_serialized() {
        let mut monitor = minimal();
        monitor.method = Some("GET".to_string());
        monitor.headers = Some(r#"{"User-Agent": "kuma-seed"}"#.to_string());

        let value = serde_json::to_value(monitor).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["headers"], r#"{"User-Agent": "kuma-seed"}"#);
    }
}
