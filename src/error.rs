#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Failed to encode request to JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to parse configuration: {0}")]
    Config(#[source] serde_json::Error),
}
