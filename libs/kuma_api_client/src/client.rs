use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::KumaClientError;
use crate::types::monitor::MonitorDefinition;
use crate::types::{
    CreateMonitorResponse, RejectionBody, SubmitOutcome, DEFAULT_SUCCESS_MESSAGE,
};

/// Sentinel left in the configuration when the API key was never set.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct KumaConfig {
    /// base URL of the Uptime Kuma server, without trailing slash
    pub server: String,
    pub api_key: String,
    /// total per-request timeout in seconds
    pub timeout: u64,
}

impl Default for KumaConfig {
    fn default() -> KumaConfig {
        KumaConfig {
            server: "http://localhost:3001".into(),
            api_key: PLACEHOLDER_API_KEY.into(),
            timeout: 30,
        }
    }
}

impl KumaConfig {
    /// true if the api key still carries the placeholder sentinel
    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

#[derive(Clone, Debug)]
pub struct KumaClient {
    config: KumaConfig,
    client: reqwest::Client,
    auth_headers: HeaderMap,
}

impl KumaClient {
    /// builds the client from a config
    pub fn from_config(config: KumaConfig) -> Result<Self, KumaClientError> {
        let auth_headers = Self::generate_auth_headers(&config.api_key)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(KumaClient {
            config,
            client,
            auth_headers,
        })
    }

    /// generates the 'X-API-Key' header for uptime kuma api requests
    fn generate_auth_headers(api_key: &str) -> Result<HeaderMap, KumaClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-API-Key",
            api_key
                .parse()
                .map_err(|_| KumaClientError::InvalidApiKeyHeader)?,
        );
        Ok(headers)
    }

    /// Submits one monitor definition to the server.
    ///
    /// Exactly one POST is issued per call; there are no retries and no
    /// idempotency key, so submitting the same definition twice creates two
    /// monitors. Every outcome, including transport failure, is normalized
    /// into a [`SubmitOutcome`].
    pub async fn submit(&self, monitor: &MonitorDefinition) -> SubmitOutcome {
        let url = format!("{}/api/monitor", self.config.server);
        debug!("Submitting monitor '{}' to {}", monitor.name, url);

        let response = match self
            .client
            .post(&url)
            .headers(self.auth_headers.clone())
            .json(monitor)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return SubmitOutcome::Failed {
                    cause: e.to_string(),
                }
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return SubmitOutcome::Failed {
                    cause: e.to_string(),
                }
            }
        };

        if status == StatusCode::OK {
            let raw: serde_json::Value = match serde_json::from_str(&text) {
                Ok(raw) => raw,
                Err(e) => {
                    return SubmitOutcome::Failed {
                        cause: e.to_string(),
                    }
                }
            };
            let parsed: CreateMonitorResponse =
                serde_json::from_value(raw.clone()).unwrap_or_default();

            SubmitOutcome::Accepted {
                message: parsed
                    .msg
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                monitor_id: parsed.monitor_id,
                raw,
            }
        } else {
            SubmitOutcome::Rejected {
                status,
                body: RejectionBody::from_text(text),
            }
        }
    }
}
