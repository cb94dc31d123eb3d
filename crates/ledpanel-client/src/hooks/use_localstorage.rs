use std::ops::Deref;

use gloo::storage::{LocalStorage, Storage};
use yew::prelude::*;

/// State persisted as JSON under `key`, falling back to `init_fn` when the
/// stored value is missing or no longer decodes.
#[hook]
pub fn use_localstorage<T, F>(key: &'static str, init_fn: F) -> UseStateHandle<T>
where
    T: 'static + Clone + serde::Serialize + serde::de::DeserializeOwned + PartialEq,
    F: Fn() -> T + 'static,
{
    let state = use_state(|| LocalStorage::get::<T>(key).unwrap_or_else(|_| init_fn()));
    {
        use_effect_with(state.clone(), move |state| {
            if let Err(e) = LocalStorage::set(key, state.deref()) {
                tracing::warn!("Failed to persist {key}: {e}");
            }
            || ()
        });
    }
    state
}
