//! Hook for the persisted panel settings.

use ledpanel_core::PanelSettings;
use yew::prelude::*;

use crate::hooks::use_localstorage;

const PANEL_SETTINGS_KEY: &str = "$ledpanel$/settings";

#[hook]
pub fn use_panel_settings() -> UseStateHandle<PanelSettings> {
    use_localstorage(PANEL_SETTINGS_KEY, PanelSettings::default)
}
