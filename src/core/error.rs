use thiserror::Error;

/// Errors raised at the engine boundary: decoding named actions and
/// encoding or decoding saved games. Game transitions themselves never fail.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown action `{0}`")]
    UnknownAction(String),
    #[error("Invalid payload for action `{action}`: {source}")]
    InvalidPayload {
        action: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
