use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrsError {
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("profile parse error: {0}")]
    ProfileParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrsError>;
