use colorkit::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwatchError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    Dataset(String),

    #[error("Invalid channel assignment: {0} (expected PATH=VALUE)")]
    Assignment(String),

    #[error("No colors given")]
    NoColors,
}
