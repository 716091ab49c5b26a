use thiserror::Error;

#[derive(Debug, Error)]
pub enum KumaClientError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuildError(#[from] reqwest::Error),
    #[error("API key contains characters that are not valid in a header value")]
    InvalidApiKeyHeader,
}
