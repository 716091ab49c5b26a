use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

pub mod monitor;

/// Message used when a 200 response carries no `msg` field.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";

/// Placeholder detail for rejections whose body is empty.
pub const NO_RESPONSE_BODY: &str = "No response body";

// curl http://localhost:3001/api/monitor \
//     --header "X-API-Key: your-api-key" \
//     --data '{"name": "Example", "type": "http", "url": "https://example.org", ...}'
// => {"ok": true, "msg": "successAdded", "monitorID": 42}
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CreateMonitorResponse {
    pub ok: Option<bool>,
    pub msg: Option<String>,
    #[serde(rename = "monitorID")]
    pub monitor_id: Option<i64>,
}

/// Body of a non-200 response.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionBody {
    /// non-empty body that parsed as JSON
    Json(Value),
    /// non-empty body that was not valid JSON
    Text(String),
    /// empty body
    Empty,
}

impl RejectionBody {
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            return RejectionBody::Empty;
        }
        match serde_json::from_str(&text) {
            Ok(value) => RejectionBody::Json(value),
            Err(_) => RejectionBody::Text(text),
        }
    }

    /// error detail as printed in the per-monitor report
    pub fn detail(&self) -> String {
        match self {
            RejectionBody::Json(value) => value.to_string(),
            RejectionBody::Text(text) => text.clone(),
            RejectionBody::Empty => NO_RESPONSE_BODY.to_string(),
        }
    }
}

/// Outcome of a single submission attempt. Every call to
/// [`submit`](crate::client::KumaClient::submit) yields exactly one of these;
/// no error escapes the call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The server answered 200 and stored the monitor.
    Accepted {
        message: String,
        monitor_id: Option<i64>,
        raw: Value,
    },
    /// The server answered with any non-200 status.
    Rejected {
        status: StatusCode,
        body: RejectionBody,
    },
    /// The request never completed (connection refused, DNS, timeout).
    Failed { cause: String },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    /// short status line for the outcome
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Accepted { message, .. } => message.clone(),
            SubmitOutcome::Rejected { status, .. } => format!("HTTP {}", status.as_u16()),
            SubmitOutcome::Failed { .. } => "Request failed".to_string(),
        }
    }
}
