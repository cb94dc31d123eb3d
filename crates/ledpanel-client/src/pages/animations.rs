//! Animation configuration page.

use ledpanel_core::{DeviceConfig, PanelSettings, validate_root};
use serde_json::Value;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::AnimationEditor;
use crate::hooks::{LoadState, use_device_data, use_panel_settings};
use crate::services::{ApiClient, ApiError};
use crate::util::device_action;

/// Outcome of the last save or reload.
#[derive(Debug, Clone, PartialEq)]
enum SaveStatus {
    Saving,
    Saved,
    Failed(String),
    ReloadFailed(String),
}

impl SaveStatus {
    fn text(&self) -> String {
        match self {
            SaveStatus::Saving => "Saving...".to_string(),
            SaveStatus::Saved => "Saved".to_string(),
            SaveStatus::Failed(message) => format!("Save failed: {message}"),
            SaveStatus::ReloadFailed(message) => format!("Reload failed: {message}"),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            SaveStatus::Saving => "status-pending",
            SaveStatus::Saved => "status-ok",
            SaveStatus::Failed(_) | SaveStatus::ReloadFailed(_) => "status-error",
        }
    }
}

/// Page state after discarding local edits: the device's copy to show, or
/// the status explaining why the local copy stays.
fn after_reload(
    result: Result<DeviceConfig, ApiError>,
) -> (Option<DeviceConfig>, Option<SaveStatus>) {
    match result {
        Ok(fresh) => (Some(fresh), None),
        Err(e) => {
            tracing::error!("Failed to reload configuration: {e}");
            (None, Some(SaveStatus::ReloadFailed(e.to_string())))
        }
    }
}

/// Root slot editor with validation, save and reset.
#[function_component(AnimationsPage)]
pub fn animations_page() -> Html {
    let settings = use_panel_settings();
    let api = ApiClient::new((*settings).clone());
    let data = use_device_data(api.clone());
    let status = use_state(|| None::<SaveStatus>);

    let settings_panel = html! { <SettingsPanel settings={settings.clone()} /> };

    if let Some(error) = data.config.error() {
        return html! {
            <main class="page animations-page">
                {settings_panel}
                <div class="load-error">{format!("Failed to load configuration: {error}")}</div>
            </main>
        };
    }
    let Some(config) = data.config.ready().cloned() else {
        return html! {
            <main class="page animations-page">
                {settings_panel}
                <div class="page-loading">{"Loading configuration..."}</div>
            </main>
        };
    };

    let key = settings.animation_key.clone();
    let catalog = data.catalog.ready().cloned();
    let slot = config.animation_slot(&key).cloned();

    let validation = catalog
        .as_ref()
        .map(|catalog| validate_root(slot.as_ref(), catalog, catalog, &key));
    let blocked_reason = match (&validation, data.catalog.error()) {
        (_, Some(error)) => Some(format!("Animation catalog unavailable: {error}")),
        (None, None) => Some("Waiting for the animation catalog".to_string()),
        (Some(Err(e)), None) => Some(e.to_string()),
        (Some(Ok(())), None) => None,
    };
    let saving = matches!(*status, Some(SaveStatus::Saving));

    let on_slot_change = {
        let config_state = data.config.clone();
        let config = config.clone();
        let key = key.clone();
        let status = status.clone();
        Callback::from(move |slot: Value| {
            config_state.set(LoadState::Ready(config.with_animation_slot(&key, slot)));
            if matches!(*status, Some(SaveStatus::Saved)) {
                status.set(None);
            }
        })
    };

    let on_save = device_action(
        "save",
        (api.clone(), config.clone(), data.config.clone(), status.clone()),
        |(api, config, config_state, status)| async move {
            status.set(Some(SaveStatus::Saving));
            match api.save_config(&config).await {
                Ok(()) => {
                    match api.fetch_config().await {
                        Ok(fresh) => config_state.set(LoadState::Ready(fresh)),
                        Err(e) => {
                            tracing::warn!("Saved, but reloading the configuration failed: {e}");
                        }
                    }
                    status.set(Some(SaveStatus::Saved));
                }
                Err(e) => {
                    tracing::error!("Failed to save configuration: {e}");
                    status.set(Some(SaveStatus::Failed(e.to_string())));
                }
            }
        },
    );

    let on_reset = device_action(
        "reset",
        (api, data.config.clone(), status.clone()),
        |(api, config_state, status)| async move {
            if !gloo::dialogs::confirm("Are you sure you want to discard unsaved changes?") {
                return;
            }
            let (fresh, next_status) = after_reload(api.fetch_config().await);
            if let Some(fresh) = fresh {
                tracing::info!("Discarded local edits");
                config_state.set(LoadState::Ready(fresh));
            }
            status.set(next_status);
        },
    );

    let all = catalog.clone().unwrap_or_default();

    html! {
        <main class="page animations-page">
            {settings_panel}
            <section class="root-slot">
                <h2>{format!("Animation ({key})")}</h2>
                <AnimationEditor
                    config={slot}
                    on_change={on_slot_change}
                    available={catalog}
                    {all}
                    is_root=true
                />
            </section>
            <div class="save-bar">
                <button
                    class="save-button"
                    disabled={saving || blocked_reason.is_some()}
                    onclick={on_save}
                >
                    {"Save"}
                </button>
                <button class="reset-button" disabled={saving} onclick={on_reset}>
                    {"Reset"}
                </button>
                if let Some(reason) = blocked_reason {
                    <span class="save-blocked">{reason}</span>
                }
                if let Some(status) = &*status {
                    <span class={classes!("save-status", status.class())}>{status.text()}</span>
                }
            </div>
            <details class="raw-config">
                <summary>{"Configuration JSON"}</summary>
                <pre>{config.to_json_pretty().unwrap_or_else(|e| e.to_string())}</pre>
            </details>
        </main>
    }
}

/// Props for the SettingsPanel component.
#[derive(Properties, PartialEq)]
struct SettingsPanelProps {
    settings: UseStateHandle<PanelSettings>,
}

/// Device address and root slot key, persisted in local storage.
#[function_component(SettingsPanel)]
fn settings_panel(props: &SettingsPanelProps) -> Html {
    let field = |label: &'static str, current: &str, apply: fn(&mut PanelSettings, String)| {
        let settings = props.settings.clone();
        let onchange = Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*settings).clone();
            apply(&mut next, input.value());
            tracing::info!("Panel settings changed: {next:?}");
            settings.set(next);
        });
        html! {
            <label class="settings-field">
                <span>{label}</span>
                <input type="text" value={current.to_string()} {onchange} />
            </label>
        }
    };

    html! {
        <details class="panel-settings">
            <summary>{"Device"}</summary>
            {field("API base", &props.settings.api_base, |s, v| s.api_base = v)}
            {field("Config key", &props.settings.animation_key, |s, v| s.animation_key = v)}
        </details>
    }
}
