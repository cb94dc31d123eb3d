//! Device configuration document and panel settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// Top-level field holding the root animation slot.
pub const DEFAULT_ANIMATION_KEY: &str = "animation";

/// Base path of the device HTTP API.
pub const DEFAULT_API_BASE: &str = "/api";

/// The device's configuration document.
///
/// Only the animation slot is interpreted; strips, projection and the rest
/// are carried through untouched and in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceConfig(Map<String, Value>);

impl DeviceConfig {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        match serde_json::from_str::<Value>(json).map_err(SchemaError::Config)? {
            Value::Object(object) => Ok(Self(object)),
            _ => Err(SchemaError::ConfigNotObject),
        }
    }

    /// Pretty-printed document, as sent back to the device.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(&self.0).map_err(SchemaError::Encode)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn animation_slot(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// New document with the slot at `key` replaced.
    #[must_use]
    pub fn with_animation_slot(&self, key: &str, slot: Value) -> Self {
        let mut next = self.0.clone();
        next.insert(key.to_string(), slot);
        Self(next)
    }
}

/// User-adjustable panel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Base path of the device API, without trailing slash.
    pub api_base: String,
    /// Top-level configuration field edited as the root animation slot.
    pub animation_key: String,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            animation_key: DEFAULT_ANIMATION_KEY.to_string(),
        }
    }
}

impl PanelSettings {
    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{resource}/", self.api_base.trim_end_matches('/'))
    }

    pub fn config_url(&self) -> String {
        self.endpoint("config")
    }

    pub fn catalog_url(&self) -> String {
        self.endpoint("animations")
    }
}
