//! Hook loading the device configuration and animation catalog.

use ledpanel_core::{Catalog, DeviceConfig};
use yew::prelude::*;

use crate::services::ApiClient;

/// Progress of one remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            LoadState::Loading | LoadState::Ready(_) => None,
        }
    }
}

/// Handles to the loaded data. The configuration handle doubles as the
/// page's canonical, editable copy.
#[derive(Clone, PartialEq)]
pub struct DeviceData {
    pub config: UseStateHandle<LoadState<DeviceConfig>>,
    pub catalog: UseStateHandle<LoadState<Catalog>>,
}

/// Fetches configuration and catalog concurrently, and again whenever the
/// API client changes.
#[hook]
pub fn use_device_data(api: ApiClient) -> DeviceData {
    let config = use_state(|| LoadState::Loading);
    let catalog = use_state(|| LoadState::Loading);

    {
        let config = config.clone();
        let catalog = catalog.clone();
        use_effect_with(api, move |api| {
            let api = api.clone();
            config.set(LoadState::Loading);
            catalog.set(LoadState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let (config_result, catalog_result) =
                    futures::join!(api.fetch_config(), api.fetch_catalog());

                match config_result {
                    Ok(loaded) => config.set(LoadState::Ready(loaded)),
                    Err(e) => {
                        tracing::error!("Failed to load configuration: {e}");
                        config.set(LoadState::Failed(e.to_string()));
                    }
                }
                match catalog_result {
                    Ok(loaded) => catalog.set(LoadState::Ready(loaded)),
                    Err(e) => {
                        tracing::error!("Failed to load animation catalog: {e}");
                        catalog.set(LoadState::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    DeviceData { config, catalog }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_load_state_accessors() {
        let loading: LoadState<u32> = LoadState::Loading;
        assert_eq!(loading.ready(), None);
        assert_eq!(loading.error(), None);

        assert_eq!(LoadState::Ready(7).ready(), Some(&7));

        let failed: LoadState<u32> = LoadState::Failed("HTTP 500".to_string());
        assert_eq!(failed.ready(), None);
        assert_eq!(failed.error(), Some("HTTP 500"));
    }
}
