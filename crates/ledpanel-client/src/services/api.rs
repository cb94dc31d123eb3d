//! HTTP client for the device API.

use gloo::net::http::{Request, Response};
use ledpanel_core::{Catalog, DeviceConfig, PanelSettings, SchemaError};

/// Failure talking to the device.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: gloo::net::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Client for the configuration and animation catalog endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    settings: PanelSettings,
}

impl ApiClient {
    pub fn new(settings: PanelSettings) -> Self {
        Self { settings }
    }

    /// `GET {base}/config/`
    pub async fn fetch_config(&self) -> Result<DeviceConfig, ApiError> {
        let url = self.settings.config_url();
        let body = get_text(&url).await?;
        Ok(DeviceConfig::from_json(&body)?)
    }

    /// `GET {base}/animations/`
    pub async fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        let url = self.settings.catalog_url();
        let body = get_text(&url).await?;
        let catalog = Catalog::from_json(&body)?;
        tracing::info!("Loaded {} animations from {url}", catalog.len());
        Ok(catalog)
    }

    /// `PUT {base}/config/` with the full document.
    pub async fn save_config(&self, config: &DeviceConfig) -> Result<(), ApiError> {
        let url = self.settings.config_url();
        let body = config.to_json_pretty()?;
        let response = Request::put(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|source| transport(&url, source))?
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        check_status(&url, &response)?;
        tracing::info!("Saved configuration to {url}");
        Ok(())
    }
}

async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|source| transport(url, source))?;
    check_status(url, &response)?;
    response.text().await.map_err(|source| transport(url, source))
}

fn check_status(url: &str, response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        })
    }
}

fn transport(url: &str, source: gloo::net::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            url: "/api/config/".to_string(),
            status: 422,
        };
        assert_eq!(err.to_string(), "/api/config/ answered with HTTP 422");
    }

    #[wasm_bindgen_test]
    fn test_schema_error_is_transparent() {
        let err: ApiError = SchemaError::ConfigNotObject.into();
        assert_eq!(err.to_string(), "device configuration must be a JSON object");
    }

    #[wasm_bindgen_test]
    fn test_encode_failure_is_a_schema_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = SchemaError::Encode(source).into();
        assert!(matches!(err, ApiError::Schema(SchemaError::Encode(_))));
        assert!(err.to_string().starts_with("failed to encode device configuration"));
    }

    #[wasm_bindgen_test]
    fn test_clients_compare_by_settings() {
        let a = ApiClient::new(PanelSettings::default());
        let b = ApiClient::new(PanelSettings::default());
        assert_eq!(a, b);
        let c = ApiClient::new(PanelSettings {
            api_base: "/other".to_string(),
            ..PanelSettings::default()
        });
        assert_ne!(a, c);
    }
}
