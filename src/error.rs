use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    /// Non-success HTTP status or transport failure on an index/detail fetch.
    /// The status code is attached when the server produced one.
    #[error("network error: {message}")]
    Network { status: Option<u16>, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl PokedexError {
    /// HTTP status code of a network error, if the server sent one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PokedexError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
