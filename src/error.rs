use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene JSON")]
    Json(#[from] serde_json::Error),

    #[error("unknown parameter `{0}`")]
    UnknownParam(String),

    #[error("invalid override `{0}`, expected NAME=VALUE")]
    BadOverride(String),
}
