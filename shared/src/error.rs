use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("snapshot is not a PNG data URL")]
    NotADataUrl,
    #[error("snapshot payload is not valid base64: {0}")]
    Base64(String),
    #[error("failed to encode surface: {0}")]
    Encode(String),
    #[error("failed to decode snapshot: {0}")]
    Decode(String),
    #[error("failed to allocate a {width}x{height} surface")]
    Allocation { width: u32, height: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{0}` is not a #rgb or #rrggbb color")]
pub struct ColorParseError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid popup config: {0}")]
    Json(#[from] serde_json::Error),
}
