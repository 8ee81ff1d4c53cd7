pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(
        "Unsupported file extension: `{extension}`. Supported formats: YAML (.yaml, .yml) and JSON (.json)"
    )]
    UnsupportedExtension { extension: String },
}
