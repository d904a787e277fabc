use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeuroDocError {
    #[error("{0}")]
    Precondition(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<&str> for NeuroDocError {
    fn from(error: &str) -> Self {
        NeuroDocError::Precondition(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NeuroDocError>;
