use kuma_api_client::client::KumaConfig;
use kuma_api_client::types::monitor::MonitorDefinition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneralConfig {
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> GeneralConfig {
        GeneralConfig {
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub kuma: KumaConfig,
    pub monitors: Vec<MonitorDefinition>,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            general: GeneralConfig::default(),
            kuma: KumaConfig::default(),
            monitors: default_monitors(),
        }
    }
}

/// the demo monitor set submitted when no config file overrides it
fn default_monitors() -> Vec<MonitorDefinition> {
    vec![
        MonitorDefinition {
            name: "Test HTTP Monitor".into(),
            monitor_type: "http".into(),
            url: "https://httpbin.org/status/200".into(),
            interval: 60,
            maxretries: 3,
            timeout: 10,
            active: true,
            accepted_statuscodes: vec!["200-299".into()],
            method: None,
            headers: None,
            description: Some("Test monitor created via API key authentication".into()),
        },
        MonitorDefinition {
            name: "GitHub API Monitor".into(),
            monitor_type: "http".into(),
            url: "https://api.github.com/status".into(),
            interval: 120,
            maxretries: 2,
            timeout: 15,
            active: true,
            accepted_statuscodes: vec!["200".into()],
            method: Some("GET".into()),
            headers: Some(r#"{"User-Agent": "UptimeKuma-API-Test"}"#.into()),
            description: Some("GitHub API status monitor".into()),
        },
    ]
}
