//! Error types.

/// Failure to interpret data served by the device.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to decode animation catalog: {0}")]
    Catalog(#[source] serde_json::Error),
    #[error("failed to decode device configuration: {0}")]
    Config(#[source] serde_json::Error),
    #[error("device configuration must be a JSON object")]
    ConfigNotObject,
    #[error("failed to encode device configuration: {0}")]
    Encode(#[source] serde_json::Error),
}
